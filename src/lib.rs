// SYNOID Shorts Library
// Copyright (c) 2026 Xing_The_Creator | SYNOID

pub mod agent;
pub mod config;
pub mod error;

pub use agent::blueprint::{GenerationOptions, Scene, ShortsProject};
pub use agent::director::{GenerationProvider, ShortsGenerator};
pub use agent::exporter::{write_project, WrittenArtifacts};
pub use agent::local_generator::generate_local;
pub use config::ShortsConfig;
pub use error::{Result, ShortsError};
