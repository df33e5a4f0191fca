use thiserror::Error;

pub type BlueprintResult<T> = Result<T, BlueprintError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlueprintError {
    #[error("Event name is required before a blueprint can be exported")]
    MissingEventName,

    #[error("Failed to fetch asset '{path}': {reason}")]
    AssetFetch { path: String, reason: String },

    #[error("Failed to save '{filename}': {reason}")]
    SaveFailed { filename: String, reason: String },

    #[error("Failed to parse descriptor: {0}")]
    DescriptorParse(String),
}
