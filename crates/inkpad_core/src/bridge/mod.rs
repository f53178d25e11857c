//! Host bridge contracts.
//!
//! # Responsibility
//! - Define the code/msg/data reply envelope shared by all bridge calls.
//! - Define the collaborator traits the host implements (article storage,
//!   image storage).
//!
//! # Invariants
//! - `code == 1` is the only success code; every other value is a failure,
//!   regardless of its specific value.
//! - A success reply must carry a data payload; a bare success is rejected
//!   instead of being masked.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article_store;
pub mod image_store;

pub use article_store::{ArticlePayload, ArticleStore};
pub use image_store::{encode_image_blob, ImageStore};

/// Reply code the bridge uses for success.
pub const CODE_SUCCESS: i64 = 1;
/// Generic failure code used for locally constructed replies.
pub const CODE_ERROR: i64 = 0;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Request/response envelope produced by the host bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Reply<T> {
    /// Builds a success reply carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: String::new(),
            data: Some(data),
        }
    }

    /// Builds a failure reply carrying a human-readable message.
    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_ERROR,
            msg: msg.into(),
            data: None,
        }
    }

    /// Collapses the envelope into a result.
    ///
    /// Any non-success code maps to [`BridgeError::Rejected`]; a success
    /// reply without a data payload maps to [`BridgeError::MissingData`].
    pub fn into_result(self) -> BridgeResult<T> {
        if self.code != CODE_SUCCESS {
            return Err(BridgeError::Rejected {
                code: self.code,
                msg: self.msg,
            });
        }
        self.data.ok_or(BridgeError::MissingData)
    }
}

/// Failure surfaced by a bridge call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The host reported a non-success code.
    Rejected { code: i64, msg: String },
    /// The host reported success without the expected data payload.
    MissingData,
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { code, msg } if msg.is_empty() => {
                write!(f, "bridge call rejected (code {code})")
            }
            Self::Rejected { code, msg } => {
                write!(f, "bridge call rejected (code {code}): {msg}")
            }
            Self::MissingData => write!(f, "bridge reply is missing its data payload"),
        }
    }
}

impl Error for BridgeError {}
