//! Request handlers

use crate::config::ServerConfig;
use crate::core::engine::MorseEngine;
use crate::core::types::Conversion;
use crate::persistence::{StoreError, TranscriptStore};
use crate::server::types::{
    ConvertRequest, ConvertResponse, ErrorResponse, Upload, UploadError, GENERIC_FAILURE,
    UPLOAD_FIELD,
};
use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub engine: MorseEngine,
    pub store: Arc<TranscriptStore>,
    pub index_path: PathBuf,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Result<Self, StoreError> {
        Ok(Self {
            engine: MorseEngine::new(),
            store: Arc::new(TranscriptStore::open(config.output_dir.clone())?),
            index_path: config.index_path.clone(),
        })
    }
}

fn generic_failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE).into_response()
}

/// GET / - upload page
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read_to_string(&state.index_path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::warn!(path = %state.index_path.display(), "index page unavailable: {e}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await?.to_vec();
        return Ok(Upload { file_name, data });
    }
    Err(UploadError::MissingField)
}

/// POST /upload - convert an uploaded file and keep the transcript
///
/// Every failure gets the same opaque 500; the cause only goes to the log.
pub async fn upload(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let Upload { file_name, data } = match read_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(e) => {
            tracing::warn!("rejected upload: {e}");
            return generic_failure();
        }
    };

    let text = String::from_utf8_lossy(&data);
    let Conversion { direction, output } = match state.engine.convert_detailed(&text) {
        Ok(conversion) => conversion,
        Err(e) => {
            tracing::warn!(kind = e.code(), file = ?file_name, "conversion failed: {e}");
            return generic_failure();
        }
    };

    let store = Arc::clone(&state.store);
    let transcript = output.clone();
    let saved = tokio::task::spawn_blocking(move || {
        store.save(&transcript, file_name.as_deref(), Utc::now())
    })
    .await;

    match saved {
        Ok(Ok(path)) => {
            tracing::info!(path = %path.display(), ?direction, bytes = output.len(), "transcript saved");
        }
        Ok(Err(e)) => {
            tracing::error!("could not save transcript: {e}");
            return generic_failure();
        }
        Err(e) => {
            tracing::error!("transcript writer task failed: {e}");
            return generic_failure();
        }
    }

    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], output).into_response()
}

/// POST /api/convert - convert a JSON payload without storing anything
pub async fn convert_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConvertRequest>,
) -> Response {
    match state.engine.convert_detailed(&request.input) {
        Ok(Conversion { direction, output }) => {
            (StatusCode::OK, Json(ConvertResponse { direction, output })).into_response()
        }
        Err(e) => {
            tracing::warn!(kind = e.code(), "conversion failed: {e}");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "conversion failed".to_string(),
                    code: e.code().to_string(),
                }),
            )
                .into_response()
        }
    }
}
