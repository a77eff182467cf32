// Click handling - 树节点定位与诊断输出
// Reveals the finding's tree node and dumps its detail; failures are reported
// through the logger and never abort the dump.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AnnotationError;
use crate::model::{DetectorInfo, Finding};

/// Output channel of the host, e.g. an editor output panel.
pub trait AuditLogger: Send + Sync {
    fn log(&self, message: &str);
    fn error(&self, message: &str);
}

/// How the results tree should present a revealed node.
#[derive(Debug, Clone, Copy)]
pub struct RevealOptions {
    pub select: bool,
    pub focus: bool,
    pub expand: bool,
}

/// The external results-tree widget.
#[async_trait]
pub trait ResultTree: Send + Sync {
    type Node: Send;

    /// Resolve a finding to its tree node, if one exists.
    fn node_for(&self, finding: &Finding) -> Option<Self::Node>;

    /// Reveal a node in the tree UI.
    async fn reveal(&self, node: Self::Node, options: RevealOptions) -> anyhow::Result<()>;
}

/// Writes a full diagnostic dump of one finding through the logger.
pub trait ResultPrinter: Send + Sync {
    fn print_result(&self, finding: &Finding, logger: &dyn AuditLogger);
}

const LOG_DELIMITER: &str = "--------------------------------------------------";

pub struct ClickHandler<T: ResultTree> {
    tree: Arc<T>,
    logger: Arc<dyn AuditLogger>,
    printer: Arc<dyn ResultPrinter>,
    detectors: HashMap<String, DetectorInfo>,
}

impl<T: ResultTree> ClickHandler<T> {
    pub fn new(
        tree: Arc<T>,
        logger: Arc<dyn AuditLogger>,
        printer: Arc<dyn ResultPrinter>,
        detectors: HashMap<String, DetectorInfo>,
    ) -> Self {
        Self {
            tree,
            logger,
            printer,
            detectors,
        }
    }

    /// Reveal the finding's tree node, then log its full detail.
    ///
    /// A failed lookup or reveal is reported via the logger exactly once and
    /// recovered; the detail dump always runs.
    pub async fn on_annotation_click(&self, finding: &Finding) {
        match self.resolve_node(finding) {
            Ok(node) => {
                let options = RevealOptions {
                    select: true,
                    focus: true,
                    expand: false,
                };
                if let Err(e) = self.tree.reveal(node, options).await {
                    self.logger
                        .error(&format!("Failed to select node for {}: {}", finding.check, e));
                }
            }
            Err(_) => {
                self.logger
                    .error(&format!("Failed to select node for {}", finding.check));
            }
        }

        self.logger.log(LOG_DELIMITER);
        self.printer.print_result(finding, self.logger.as_ref());
        if let Some(detector) = self.detectors.get(&finding.check) {
            self.logger
                .log(&format!("Recommendation: {}", detector.recommendation));
        }
        self.logger.log(LOG_DELIMITER);
    }

    fn resolve_node(&self, finding: &Finding) -> crate::error::Result<T::Node> {
        self.tree
            .node_for(finding)
            .ok_or_else(|| AnnotationError::NodeLookup(finding.check.clone()))
    }
}

/// Default diagnostic dump: check, severity fields, description and each
/// element's name with its file span.
pub struct DefaultResultPrinter;

impl ResultPrinter for DefaultResultPrinter {
    fn print_result(&self, finding: &Finding, logger: &dyn AuditLogger) {
        logger.log(&format!("Check: {}", finding.check));
        if let Some(impact) = &finding.impact {
            logger.log(&format!("Impact: {}", impact));
        }
        if let Some(confidence) = &finding.confidence {
            logger.log(&format!("Confidence: {}", confidence));
        }
        logger.log(&format!("Description: {}", finding.description.trim_end()));
        for element in &finding.elements {
            let mapping = &element.source_mapping;
            let name = element.name.as_deref().unwrap_or("<unnamed>");
            match (mapping.lines.first(), mapping.lines.last()) {
                (Some(first), Some(last)) => logger.log(&format!(
                    "  {} ({} L{}-L{})",
                    name, mapping.filename_relative, first, last
                )),
                _ => logger.log(&format!("  {} ({})", name, mapping.filename_relative)),
            }
        }
    }
}
