//! Unified application error type.
//! All modules (db, core, cli, storage) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No calculation available: {0}")]
    InvalidSleepWindow(String),

    #[error("No sleep record found for date {0}")]
    NoRecordForDate(String),

    #[error("No sleep record with id {0}")]
    UnknownRecord(String),

    #[error("Invalid wake quality rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    #[error("Not onboarded yet: run `rsleepmanager init --age <AGE>` first")]
    NotOnboarded,

    // ---------------------------
    // Storage errors
    // ---------------------------
    #[error("Storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
