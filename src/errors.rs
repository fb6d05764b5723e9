use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("markdown input has no content lines")]
    EmptyInput,
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template does not contain the {0} placeholder")]
    MissingPlaceholder(&'static str),
}

#[derive(Error, Debug)]
pub enum MindmapError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to serialize mindmap tree: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MindmapError>;
