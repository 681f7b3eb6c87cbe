use std::{
    error::Error,
    fmt::{Display, Formatter},
};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Everything that can go wrong between receiving a submission and relaying
/// the compiler's output. Each variant owns one fixed HTTP mapping; no error
/// here ever takes the listener down.
#[derive(Debug)]
pub enum RunError {
    /// the request carried no usable `code` field
    MissingCode,

    /// the submission could not be persisted where the compiler reads it
    InputWrite(std::io::Error),

    /// the compiler exited with an error, or could not be started at all;
    /// callers cannot tell the two apart
    Compiler { stderr: String },
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            RunError::MissingCode => write!(f, "No code received"),
            RunError::InputWrite(e) => write!(f, "Error writing input file: {}", e),
            RunError::Compiler { .. } => write!(f, "Compiler invocation failed"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunError::InputWrite(e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for RunError {
    fn into_response(self) -> Response {
        match self {
            RunError::MissingCode => {
                (StatusCode::BAD_REQUEST, "No code received").into_response()
            }
            RunError::InputWrite(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error writing input file").into_response()
            }
            RunError::Compiler { stderr } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Compiler error:\n{}", stderr),
            )
                .into_response(),
        }
    }
}
