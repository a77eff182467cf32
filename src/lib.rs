// AuditLens Core Library
// 核心功能库：将外部安全分析工具的结果映射为编辑器内联标注

mod annotate;
mod click;
mod config;
mod model;
mod nav;

// 重新导出常用类型
pub use annotate::{format_label, select_annotations, Annotation, SourceRange};
pub use click::{
    AuditLogger, ClickHandler, DefaultResultPrinter, ResultPrinter, ResultTree, RevealOptions,
};
pub use config::{load_detector_registry, load_detector_registry_from_file, AnnotationConfig};
pub use model::{DetectorInfo, Element, Finding, SourceMapping, WorkspaceResults};
pub use nav::{jump_to_finding, EditorSurface};

pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum AnnotationError {
        #[error("finding has no source elements")]
        MissingLocation,

        #[error("no result-tree node for check '{0}'")]
        NodeLookup(String),

        #[error("navigation failed: {0}")]
        Navigation(#[from] anyhow::Error),
    }

    pub type Result<T> = std::result::Result<T, AnnotationError>;
}
