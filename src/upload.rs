/// Upload pipeline
///
/// One attempt = one multipart POST to the gateway's upload endpoint,
/// carrying the chosen file under the form key "file". Each attempt builds
/// a fresh payload and client; nothing is shared or reused across attempts,
/// and nothing is retried.

use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::scan::ScanResult;

/// What went wrong with one upload attempt.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The guard clause: no candidate file was supplied.
    #[error("no file selected")]
    NoFile,

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The gateway answered with a non-success status.
    #[error("gateway returned status {0}")]
    Status(StatusCode),

    /// The request itself failed, or the response body was not a valid verdict.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl UploadError {
    /// The fixed alert text shown to the user. Diagnostic detail stays in
    /// the logs; the user only ever sees one of these three messages.
    pub fn user_message(&self) -> &'static str {
        match self {
            UploadError::NoFile => "No file selected.",
            UploadError::Status(_) => "Failed to upload the file. Please try again.",
            UploadError::Read { .. } | UploadError::Transport(_) => {
                "An error occurred while uploading the file."
            }
        }
    }
}

/// Perform one upload attempt.
///
/// `file` is the candidate from whichever gesture produced it; `None` is
/// the deferred-validation case and returns [`UploadError::NoFile`] without
/// touching the network. On a 2xx response the body is parsed as a
/// [`ScanResult`]; any other outcome maps to an [`UploadError`].
///
/// No timeout is imposed here; a hung request blocks this attempt only.
pub async fn submit(file: Option<PathBuf>, endpoint: Url) -> Result<ScanResult, UploadError> {
    let path = file.ok_or(UploadError::NoFile)?;

    tracing::info!(file = %path.display(), "uploading file for scanning");

    let bytes = tokio::fs::read(&path).await.map_err(|source| UploadError::Read {
        path: path.clone(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    // Fresh payload per attempt; the multipart form sets its own
    // content type and boundary, no custom headers are added.
    let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

    let client = reqwest::Client::builder().build()?;
    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UploadError::Status(status));
    }

    let result = response.json::<ScanResult>().await?;
    tracing::debug!(?result, "scan verdict received");

    Ok(result)
}
