//! Error handling for the Receipt Tracker
//!
//! Provides consistent error responses in English and Turkish

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::LedgerError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Ledger errors
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // Storage errors
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_tr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// "error" or "warning"; warnings mean nothing was recorded but nothing is wrong
    pub severity: &'static str,
}

impl ErrorDetail {
    fn error(code: &str, message_en: String, message_tr: String) -> Self {
        Self {
            code: code.to_string(),
            message_en,
            message_tr,
            field: None,
            severity: "error",
        }
    }
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Ledger(LedgerError::Validation { field, message }) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    field: Some(field.clone()),
                    ..ErrorDetail::error(
                        "VALIDATION_ERROR",
                        message.clone(),
                        turkish_validation_message(field),
                    )
                },
            ),
            AppError::Ledger(LedgerError::LookupMiss { serial_number, .. }) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    field: Some("serial_number".to_string()),
                    ..ErrorDetail::error(
                        "LOOKUP_MISS",
                        format!("Serial {} was not issued to this department", serial_number),
                        "Hatalı giriş: Bu seri numarası verilenler tablosunda bulunmamaktadır!"
                            .to_string(),
                    )
                },
            ),
            AppError::Ledger(LedgerError::DuplicateCollection { serial_number, .. }) => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    field: Some("serial_number".to_string()),
                    severity: "warning",
                    ..ErrorDetail::error(
                        "DUPLICATE_COLLECTION",
                        format!("Serial {} is already on the collection ledger", serial_number),
                        "Bu seri numarası zaten alınanlar tablosunda mevcut!".to_string(),
                    )
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::error(
                    "VALIDATION_ERROR",
                    msg.clone(),
                    format!("Geçersiz veri: {}", msg),
                ),
            ),
            AppError::StorageError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::error(
                    "STORAGE_ERROR",
                    format!("Storage error: {}", msg),
                    "Veriler dosyaya kaydedilemedi".to_string(),
                ),
            ),
            AppError::Csv(_) | AppError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::error(
                    "STORAGE_ERROR",
                    "Ledger file could not be read or written".to_string(),
                    "Veri dosyası okunamadı veya yazılamadı".to_string(),
                ),
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::error(
                    "CONFIGURATION_ERROR",
                    format!("Configuration error: {}", msg),
                    format!("Yapılandırma hatası: {}", msg),
                ),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::error(
                    "INTERNAL_ERROR",
                    msg.clone(),
                    "Sunucu hatası".to_string(),
                ),
            ),
        }
    }
}

fn turkish_validation_message(field: &str) -> String {
    if field.ends_with("department") || field.ends_with("location") {
        "Dükkan ve İş Yeri boş bırakılamaz!".to_string()
    } else if field.ends_with("range_start") {
        "Seri Başlangıç değeri Seri Bitiş değerinden büyük olamaz!".to_string()
    } else if field.ends_with("range_end") {
        "Seri aralığı tek seferde verilebilecek sayıyı aşıyor!".to_string()
    } else {
        format!("Geçersiz veri: {}", field)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        if error_detail.severity == "warning" {
            tracing::warn!("Rejected: {}", self);
        } else {
            tracing::error!("Error: {:?}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
