use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use uuid::Uuid;

use super::error::RunError;

/// Bridge to the pre-built compiler binary sitting next to the server.
///
/// Submissions are written to a file first and the binary reads them on its
/// stdin, so the compiler itself never has to know where its input came from.
#[derive(Debug, Clone)]
pub struct Compiler {
    binary: PathBuf,
    input_path: PathBuf,
    unique_inputs: bool,
}

impl Compiler {
    pub fn new(binary: PathBuf, input_path: PathBuf, unique_inputs: bool) -> Self {
        Compiler {
            binary,
            input_path,
            unique_inputs,
        }
    }

    /// Runs a submission through the compiler and returns its stdout.
    pub async fn run(&self, code: &str) -> Result<String, RunError> {
        let input_path = self.request_input_path();

        if let Err(e) = tokio::fs::write(&input_path, code).await {
            error!("Could not write {}: {}", input_path.display(), e);
            return Err(RunError::InputWrite(e));
        }
        trace!("Submission written to {}", input_path.display());

        let result = self.invoke(&input_path).await;

        if self.unique_inputs {
            // The input file only exists to carry one submission, failing to
            // remove it costs nothing but disk space.
            let _ = tokio::fs::remove_file(&input_path).await;
        }

        result
    }

    async fn invoke(&self, input_path: &Path) -> Result<String, RunError> {
        let input = match std::fs::File::open(input_path) {
            Ok(input) => input,
            Err(e) => {
                error!("Could not reopen {}: {}", input_path.display(), e);
                return Err(RunError::Compiler {
                    stderr: String::new(),
                });
            }
        };

        let output = Command::new(&self.binary)
            .stdin(Stdio::from(input))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                debug!("Compiler exited cleanly, {} bytes on stdout", output.stdout.len());
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                debug!("Compiler exited with {}", output.status);
                Err(RunError::Compiler {
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
            Err(e) => {
                error!("Could not spawn {}: {}", self.binary.display(), e);
                // A compiler that cannot be spawned at all surfaces exactly
                // like one that rejected the program, just with nothing on
                // stderr.
                Err(RunError::Compiler {
                    stderr: String::new(),
                })
            }
        }
    }

    /// Picks the file the next submission is written to. The configured path
    /// is shared by every request unless unique inputs are switched on.
    fn request_input_path(&self) -> PathBuf {
        if self.unique_inputs {
            self.input_path
                .with_file_name(format!("input-{}.txt", Uuid::new_v4()))
        } else {
            self.input_path.clone()
        }
    }
}
