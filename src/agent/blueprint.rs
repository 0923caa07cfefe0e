// SYNOID Shorts Blueprint - Data Model
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use serde::{Deserialize, Serialize};

pub const DEFAULT_ANGLE: &str = "educational";
pub const DEFAULT_AUDIENCE: &str = "general";
pub const DEFAULT_DURATION_SECONDS: u32 = 30;

/// What the caller asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub topic: String,
    pub angle: String,
    pub audience: String,
    pub duration_seconds: u32,
}

impl GenerationOptions {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            angle: DEFAULT_ANGLE.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            duration_seconds: DEFAULT_DURATION_SECONDS,
        }
    }

    pub fn with_angle(mut self, angle: &str) -> Self {
        self.angle = angle.to_string();
        self
    }

    pub fn with_audience(mut self, audience: &str) -> Self {
        self.audience = audience.to_string();
        self
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = seconds;
        self
    }
}

/// One time-boxed shot of the short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub start_second: u32,
    pub end_second: u32,
    pub visual_prompt: String,
    pub narration_line: String,
    pub subtitle: String,
}

impl Scene {
    pub fn duration(&self) -> u32 {
        self.end_second.saturating_sub(self.start_second)
    }
}

/// The full production package for one topic.
/// Field order here is the field order of `shorts_project.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortsProject {
    pub topic: String,
    pub angle: String,
    pub hook: String,
    pub cta: String,
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
    pub voiceover_script: String,
    pub scenes: Vec<Scene>,
}

impl ShortsProject {
    /// Seconds of the timeline covered by the shot list.
    pub fn covered_seconds(&self) -> u32 {
        self.scenes.iter().map(Scene::duration).sum()
    }
}
