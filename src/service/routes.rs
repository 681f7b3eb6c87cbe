use axum::extract::{Json, State};

use super::{compiler::Compiler, error::RunError, models::Submission};

/// POST /run
///
/// Accepts a submission, feeds it through the external compiler and relays
/// the compiler's stdout verbatim. Anything without a usable `code` field is
/// rejected before a single byte hits the filesystem.
pub async fn run(
    State(compiler): State<Compiler>,
    submission: Option<Json<Submission>>,
) -> Result<String, RunError> {
    let code = submission
        .and_then(|Json(submission)| submission.code)
        .filter(|code| !code.is_empty())
        .ok_or(RunError::MissingCode)?;

    debug!("Received submission of {} bytes", code.len());
    compiler.run(&code).await
}
