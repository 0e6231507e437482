//! Direct-invocation dispatch for the Lambda binary.
//!
//! Each deployed function serves one operation, chosen once at cold start.
//! The event payload is the flat request object; the response is the plain
//! record. Failures are returned as errors so the invoker sees them.

use std::{fmt, str::FromStr};

use serde_json::Value;
use thiserror::Error;

use studentinfo_core::storage::RepositoryError;
use studentinfo_core::student::{CreateStudentRequest, StudentKey, UpdateStudentRequest};

use crate::config::ConfigError;
use crate::students::StudentHandlers;

/// The operation a Lambda function serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Create,
    Get,
    Update,
    Delete,
}

impl FromStr for HandlerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "get" | "read" => Ok(Self::Get),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(ConfigError::UnknownHandler(other.to_string())),
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Get => "get",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Errors returned from a single invocation.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("Invalid {handler} payload: {source}")]
    InvalidPayload {
        handler: HandlerKind,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

fn parse<T: serde::de::DeserializeOwned>(
    handler: HandlerKind,
    payload: Value,
) -> Result<T, InvocationError> {
    serde_json::from_value(payload)
        .map_err(|source| InvocationError::InvalidPayload { handler, source })
}

fn encode<T: serde::Serialize>(value: &T) -> Result<Value, InvocationError> {
    serde_json::to_value(value).map_err(InvocationError::Encode)
}

/// Runs one invocation against the selected handler.
pub async fn dispatch(
    handlers: &StudentHandlers,
    kind: HandlerKind,
    payload: Value,
) -> Result<Value, InvocationError> {
    match kind {
        HandlerKind::Create => {
            let request: CreateStudentRequest = parse(kind, payload)?;
            encode(&handlers.create.handle(request).await?)
        }
        HandlerKind::Get => {
            let key: StudentKey = parse(kind, payload)?;
            encode(&handlers.read.handle(key).await?)
        }
        HandlerKind::Update => {
            let request: UpdateStudentRequest = parse(kind, payload)?;
            encode(&handlers.update.handle(request).await?)
        }
        HandlerKind::Delete => {
            let key: StudentKey = parse(kind, payload)?;
            encode(&handlers.delete.handle(key).await?)
        }
    }
}
