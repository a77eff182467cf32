// Finding model - 外部分析工具结果的数据结构
// The shapes here mirror the tool's JSON output; the core only reads them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// File + line/column span describing where an element occurs.
/// Coordinates are 1-based as emitted by the tool; columns are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMapping {
    pub filename_relative: String,
    /// Ordered 1-based line numbers; empty means "no mapped location".
    #[serde(default)]
    pub lines: Vec<usize>,
    #[serde(default)]
    pub starting_column: usize,
    #[serde(default)]
    pub ending_column: usize,
}

/// One source-location occurrence attached to a finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub source_mapping: SourceMapping,
}

/// One reported issue from the external analysis tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub check: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// One detector-registry entry: remediation guidance for a check name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorInfo {
    pub check: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub recommendation: String,
}

/// Snapshot of results keyed by absolute workspace root, in path order.
/// Owned and replaced wholesale by the external results store; read-only here.
pub type WorkspaceResults = BTreeMap<PathBuf, Vec<Finding>>;

impl Finding {
    /// Absolute, normalized path of the first element's file under
    /// `workspace_root`, or `None` when the finding carries no elements.
    pub fn primary_path(&self, workspace_root: &Path) -> Option<PathBuf> {
        let element = self.elements.first()?;
        Some(normalize_path(
            &workspace_root.join(&element.source_mapping.filename_relative),
        ))
    }
}

/// Lexical normalization: folds `.` and `..` segments without touching the
/// filesystem, so paths compare equal regardless of how they were joined.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
