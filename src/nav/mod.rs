// Navigation - 跳转到结果的源码位置
// Best-effort flow triggered from a user callback: open, show, then select,
// each step awaited in order. Failures are reported and swallowed here so the
// host never sees an unhandled error from a click.

use std::path::Path;

use async_trait::async_trait;

use crate::annotate::SourceRange;
use crate::click::AuditLogger;
use crate::error::{AnnotationError, Result};
use crate::model::Finding;

/// The host editor surface: opens documents and applies selections.
#[async_trait]
pub trait EditorSurface: Send + Sync {
    type Editor: Send;

    /// Open the document at an absolute path.
    async fn open(&self, path: &Path) -> anyhow::Result<Self::Editor>;

    /// Bring the opened document on screen.
    async fn show(&self, editor: Self::Editor) -> anyhow::Result<Self::Editor>;

    /// Apply a selection and scroll it into view.
    async fn set_selection(
        &self,
        editor: &mut Self::Editor,
        range: &SourceRange,
    ) -> anyhow::Result<()>;
}

/// Open the finding's primary location and select its mapped range.
/// Every failure is logged via the host logger and swallowed.
pub async fn jump_to_finding<E: EditorSurface>(
    surface: &E,
    logger: &dyn AuditLogger,
    workspace_root: &Path,
    finding: &Finding,
) {
    if let Err(e) = try_jump(surface, workspace_root, finding).await {
        tracing::warn!(check = %finding.check, "jump to source failed: {e}");
        logger.error(&format!("Failed to jump to {}: {}", finding.check, e));
    }
}

async fn try_jump<E: EditorSurface>(
    surface: &E,
    workspace_root: &Path,
    finding: &Finding,
) -> Result<()> {
    let path = finding
        .primary_path(workspace_root)
        .ok_or(AnnotationError::MissingLocation)?;
    let range = finding
        .elements
        .first()
        .map(SourceRange::from_element)
        .unwrap_or(SourceRange::NONE);

    let editor = surface.open(&path).await?;
    let mut editor = surface.show(editor).await?;
    surface.set_selection(&mut editor, &range).await?;
    Ok(())
}
