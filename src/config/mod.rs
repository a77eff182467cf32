// Configuration - 用户抑制规则与检测器注册表
// The host's configuration layer owns loading; these are the read-only shapes.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::DetectorInfo;

/// User-facing annotation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Detector check names whose findings are hidden from annotations.
    pub hidden_detectors: Vec<String>,
}

impl AnnotationConfig {
    pub fn is_hidden(&self, check: &str) -> bool {
        self.hidden_detectors.iter().any(|d| d == check)
    }
}

/// Parse the analysis tool's detector-list JSON into a registry keyed by
/// check name. Later entries win on duplicate checks.
pub fn load_detector_registry(json: &str) -> Result<HashMap<String, DetectorInfo>> {
    let detectors: Vec<DetectorInfo> =
        serde_json::from_str(json).context("Failed to parse detector list")?;
    Ok(detectors
        .into_iter()
        .map(|d| (d.check.clone(), d))
        .collect())
}

pub fn load_detector_registry_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<HashMap<String, DetectorInfo>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read detector list: {:?}", path))?;
    load_detector_registry(&content)
}
