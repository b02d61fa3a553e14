//! Tab group error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabsError {
    #[error("{container} only accepts {allowed} as children. Received: {kind}")]
    StructuralViolation {
        container: String,
        allowed: String,
        kind: String,
    },

    #[error("{consumer} must be used within a TabsGroup")]
    ContextMisuse { consumer: String },

    #[error("Duplicate tab value in group: {value}")]
    DuplicateValue { value: String },

    #[error("Group id already in use: {0}")]
    GroupIdInUse(String),
}
