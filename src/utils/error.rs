// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum WxrError {
    #[error("Failed to read export file: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Failed to parse export XML: {0}")]
    Parse(String),

    #[error("No <channel> element found in export document")]
    ChannelNotFound,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export document error: {0}")]
    Wxr(#[from] WxrError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
