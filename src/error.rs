// SYNOID Shorts Error Types
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortsError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Completion API error: {0}")]
    Api(String),

    #[error("Invalid remote plan: {0}")]
    InvalidPlan(String),

    #[error("Completion returned no content")]
    EmptyCompletion,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShortsError>;
