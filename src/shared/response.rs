// src/shared/response.rs
use serde::{Deserialize, Serialize};

/// Reply for operations that return no item (delete, reorder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
