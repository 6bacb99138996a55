//! Request/response types and upload errors

use crate::core::types::Direction;
use crate::persistence::StoreError;
use axum::extract::multipart::MultipartError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form field that carries the uploaded file.
pub const UPLOAD_FIELD: &str = "myFile";

/// Body sent to clients for every failed upload.
pub const GENERIC_FAILURE: &str = "Internal Server Error";

#[derive(Deserialize)]
pub struct ConvertRequest {
    pub input: String,
}

#[derive(Serialize)]
pub struct ConvertResponse {
    pub direction: Direction,
    pub output: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Kind of conversion failure, e.g. `AMBIGUOUS`
    pub code: String,
}

/// An uploaded file pulled out of a multipart form.
pub struct Upload {
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),
    #[error("form has no `myFile` field")]
    MissingField,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
