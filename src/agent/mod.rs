// SYNOID Shorts Agent Modules
// Copyright (c) 2026 Xing_The_Creator | SYNOID

pub mod blueprint;
pub mod director;
pub mod exporter;
pub mod llm_bridge;
pub mod local_generator;
pub mod templates;
