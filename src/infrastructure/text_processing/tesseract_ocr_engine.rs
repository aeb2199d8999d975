use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{OcrEngine, OcrError};

/// Runs the `tesseract` command-line tool on a temporary PNG and reads the
/// recognised text from stdout.
pub struct TesseractOcrEngine {
    binary: PathBuf,
}

impl TesseractOcrEngine {
    pub fn new() -> Self {
        Self::with_binary("tesseract")
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for TesseractOcrEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrEngine for TesseractOcrEngine {
    #[tracing::instrument(skip(self, png), fields(bytes = png.len()))]
    async fn recognize(&self, png: &[u8], language: &str) -> Result<String, OcrError> {
        let mut input = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::RecognitionFailed(format!("failed to create temp file: {e}")))?;

        input
            .write_all(png)
            .map_err(|e| OcrError::RecognitionFailed(format!("failed to write temp file: {e}")))?;

        let output = Command::new(&self.binary)
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(language)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => OcrError::EngineUnavailable(format!(
                    "{} not found",
                    self.binary.display()
                )),
                _ => OcrError::RecognitionFailed(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::RecognitionFailed(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
