// End-to-end: results snapshot -> annotation selection -> click handling.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use auditlens_core::{
    load_detector_registry, select_annotations, AnnotationConfig, AuditLogger, ClickHandler,
    DefaultResultPrinter, Element, Finding, ResultTree, RevealOptions, SourceMapping,
    WorkspaceResults,
};

struct PanelLogger {
    lines: Mutex<Vec<String>>,
}

impl AuditLogger for PanelLogger {
    fn log(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("ERROR {}", message));
    }
}

/// Tree keyed by check name, standing in for the host's tree-view widget.
struct CheckTree {
    nodes: HashMap<String, u32>,
    revealed: Mutex<Vec<u32>>,
}

#[async_trait]
impl ResultTree for CheckTree {
    type Node = u32;

    fn node_for(&self, finding: &Finding) -> Option<u32> {
        self.nodes.get(&finding.check).copied()
    }

    async fn reveal(&self, node: u32, _options: RevealOptions) -> anyhow::Result<()> {
        self.revealed.lock().unwrap().push(node);
        Ok(())
    }
}

fn finding(check: &str, description: &str, file: &str, lines: Vec<usize>) -> Finding {
    Finding {
        check: check.into(),
        description: description.into(),
        impact: Some("High".into()),
        confidence: Some("High".into()),
        elements: vec![Element {
            name: Some(check.replace('-', "_")),
            source_mapping: SourceMapping {
                filename_relative: file.into(),
                lines,
                starting_column: 5,
                ending_column: 20,
            },
        }],
    }
}

fn sample_results() -> WorkspaceResults {
    let mut results: WorkspaceResults = BTreeMap::new();
    results.insert(
        PathBuf::from("/home/dev/vault"),
        vec![
            finding(
                "reentrancy-eth",
                "Reentrancy in withdraw():\n\tExternal call before state update",
                "contracts/vault.sol",
                vec![41, 48],
            ),
            finding(
                "pragma",
                "Different pragma directives are used",
                "contracts/vault.sol",
                vec![1],
            ),
            finding(
                "unused-state",
                "owner is never used",
                "contracts/roles.sol",
                vec![7],
            ),
        ],
    );
    results
}

#[tokio::test]
async fn selected_annotation_click_reveals_and_logs() {
    let results = sample_results();
    let config = AnnotationConfig {
        hidden_detectors: vec!["pragma".into()],
    };

    let annotations = select_annotations(
        Path::new("/home/dev/vault/contracts/vault.sol"),
        &results,
        &config,
        |f| f.description.trim().to_string(),
    );

    // pragma suppressed, roles.sol filtered out
    assert_eq!(annotations.len(), 1);
    let annotation = &annotations[0];
    assert_eq!(annotation.finding.check, "reentrancy-eth");
    assert_eq!(annotation.label, "Reentrancy in withdraw() [...]");
    assert_eq!(
        (annotation.range.start_line, annotation.range.start_column),
        (40, 4)
    );
    assert_eq!(
        (annotation.range.end_line, annotation.range.end_column),
        (47, 19)
    );

    let detectors = load_detector_registry(
        r#"[{"check": "reentrancy-eth",
            "title": "Reentrancy (ETH)",
            "recommendation": "Apply the checks-effects-interactions pattern."}]"#,
    )
    .expect("detector list");

    let tree = Arc::new(CheckTree {
        nodes: HashMap::from([("reentrancy-eth".to_string(), 3)]),
        revealed: Mutex::new(Vec::new()),
    });
    let logger = Arc::new(PanelLogger {
        lines: Mutex::new(Vec::new()),
    });
    let handler = ClickHandler::new(
        tree.clone(),
        logger.clone(),
        Arc::new(DefaultResultPrinter),
        detectors,
    );

    handler.on_annotation_click(&annotation.finding).await;

    assert_eq!(*tree.revealed.lock().unwrap(), vec![3]);
    let lines = logger.lines.lock().unwrap().clone();
    assert!(lines.iter().all(|l| !l.starts_with("ERROR")));
    assert!(lines.iter().any(|l| l == "Check: reentrancy-eth"));
    assert!(lines
        .iter()
        .any(|l| l.contains("reentrancy_eth (contracts/vault.sol L41-L48)")));
    assert!(lines
        .iter()
        .any(|l| l.contains("Recommendation: Apply the checks-effects-interactions pattern.")));
}

#[tokio::test]
async fn refreshed_snapshot_is_reflected_immediately() {
    let config = AnnotationConfig::default();
    let document = Path::new("/home/dev/vault/contracts/vault.sol");
    let describe = |f: &Finding| f.description.clone();

    let results = sample_results();
    let before = select_annotations(document, &results, &config, describe);
    assert_eq!(before.len(), 2);

    // Re-analysis replaced the store: one finding fixed.
    let mut refreshed = sample_results();
    refreshed
        .get_mut(Path::new("/home/dev/vault"))
        .unwrap()
        .retain(|f| f.check != "reentrancy-eth");
    let after = select_annotations(document, &refreshed, &config, describe);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].finding.check, "pragma");
}

#[test]
fn findings_across_workspaces_do_not_leak() {
    let mut results = sample_results();
    results.insert(
        PathBuf::from("/home/dev/other"),
        vec![finding(
            "unused-state",
            "y is never used",
            "contracts/vault.sol",
            vec![3],
        )],
    );
    let config = AnnotationConfig::default();

    let annotations = select_annotations(
        Path::new("/home/dev/other/contracts/vault.sol"),
        &results,
        &config,
        |f| f.description.clone(),
    );

    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].label, "y is never used");
}
