// Annotation pipeline - 文档过滤、范围映射与标签生成
// Pure over its inputs: the caller hands in the current results snapshot.

mod label;
mod range;

pub use label::format_label;
pub use range::SourceRange;

use std::path::Path;

use crate::config::AnnotationConfig;
use crate::model::{normalize_path, Finding, WorkspaceResults};

/// An inline, clickable label anchored to a computed range.
/// Recomputed on every request; the underlying results may change between
/// calls, so annotations are never cached.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub finding: Finding,
    pub range: SourceRange,
    pub label: String,
}

/// Select the annotations for one open document.
///
/// Iterates the snapshot's workspaces in order and each workspace's findings
/// in emission order. A finding is skipped when it has no elements, when its
/// primary location does not resolve to `document`, or when its check is
/// suppressed. `describe` is the host's sanitized-description provider.
pub fn select_annotations<F>(
    document: &Path,
    results: &WorkspaceResults,
    config: &AnnotationConfig,
    describe: F,
) -> Vec<Annotation>
where
    F: Fn(&Finding) -> String,
{
    let document = normalize_path(document);
    let mut annotations = Vec::new();

    for (workspace_root, findings) in results {
        for finding in findings {
            let Some(element) = finding.elements.first() else {
                continue;
            };
            let absolute =
                normalize_path(&workspace_root.join(&element.source_mapping.filename_relative));
            if absolute != document {
                continue;
            }
            if config.is_hidden(&finding.check) {
                continue;
            }
            annotations.push(Annotation {
                finding: finding.clone(),
                range: SourceRange::from_element(element),
                label: format_label(&describe(finding)),
            });
        }
    }

    tracing::debug!(
        document = %document.display(),
        count = annotations.len(),
        "selected annotations"
    );
    annotations
}
