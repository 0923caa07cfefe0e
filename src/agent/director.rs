// SYNOID Shorts Director - Provider Selection & Fallback
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use crate::agent::blueprint::{GenerationOptions, Scene, ShortsProject};
use crate::agent::llm_bridge::{CompletionBackend, OpenAiBackend};
use crate::agent::local_generator::generate_local;
use crate::agent::templates;
use crate::config::ShortsConfig;
use crate::error::{Result, ShortsError};
use serde::Deserialize;
use tracing::{info, warn};

/// Where a project comes from.
pub enum GenerationProvider {
    Local,
    Remote(Box<dyn CompletionBackend>),
}

/// Shape the remote backend must return. Every key is required.
#[derive(Debug, Deserialize)]
struct RemotePlan {
    title: String,
    description: String,
    hashtags: Vec<String>,
    hook: String,
    cta: String,
    voiceover_script: String,
    scenes: Vec<RemoteScene>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RemoteScene {
    start_second: u32,
    end_second: u32,
    visual_prompt: String,
    narration_line: String,
    subtitle: String,
}

impl From<RemoteScene> for Scene {
    fn from(scene: RemoteScene) -> Self {
        Scene {
            start_second: scene.start_second,
            end_second: scene.end_second,
            visual_prompt: scene.visual_prompt,
            narration_line: scene.narration_line,
            subtitle: scene.subtitle,
        }
    }
}

/// Parses a completion into a project. Topic and angle come from the
/// options, everything else from the payload.
pub fn parse_remote_plan(response_text: &str, options: &GenerationOptions) -> Result<ShortsProject> {
    // LLMs like to wrap JSON in markdown fences.
    let clean_json = response_text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let plan: RemotePlan = serde_json::from_str(clean_json)?;

    if let Some(bad) = plan.scenes.iter().find(|s| s.start_second > s.end_second) {
        return Err(ShortsError::InvalidPlan(format!(
            "scene ends before it starts ({}s - {}s)",
            bad.start_second, bad.end_second
        )));
    }

    Ok(ShortsProject {
        topic: options.topic.clone(),
        angle: options.angle.clone(),
        hook: plan.hook,
        cta: plan.cta,
        title: plan.title,
        description: plan.description,
        hashtags: plan.hashtags,
        voiceover_script: plan.voiceover_script,
        scenes: plan.scenes.into_iter().map(Scene::from).collect(),
    })
}

pub struct ShortsGenerator {
    provider: GenerationProvider,
}

impl ShortsGenerator {
    pub fn local() -> Self {
        Self {
            provider: GenerationProvider::Local,
        }
    }

    pub fn with_backend(backend: Box<dyn CompletionBackend>) -> Self {
        Self {
            provider: GenerationProvider::Remote(backend),
        }
    }

    /// Remote when a key is configured, local otherwise.
    /// Client setup errors are returned here, not folded into the fallback.
    pub fn from_config(config: &ShortsConfig) -> Result<Self> {
        if !config.has_remote() {
            info!("[DIRECTOR] No API key configured, using local templates");
            return Ok(Self::local());
        }

        let backend = OpenAiBackend::from_config(config)?;
        Ok(Self::with_backend(Box::new(backend)))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.provider, GenerationProvider::Remote(_))
    }

    /// Never fails. Any remote error falls back to the local generator.
    pub async fn generate(&self, options: &GenerationOptions) -> ShortsProject {
        match &self.provider {
            GenerationProvider::Local => generate_local(options),
            GenerationProvider::Remote(backend) => {
                match Self::try_remote(&**backend, options).await {
                    Ok(project) => project,
                    Err(e) => {
                        warn!(
                            "[DIRECTOR] {} generation failed ({}), falling back to local templates",
                            backend.name(),
                            e
                        );
                        generate_local(options)
                    }
                }
            }
        }
    }

    /// One attempt, no retry.
    pub async fn try_remote(
        backend: &dyn CompletionBackend,
        options: &GenerationOptions,
    ) -> Result<ShortsProject> {
        info!("[DIRECTOR] Drafting '{}' with {}", options.topic, backend.name());

        let prompt = templates::remote_prompt(options);
        let response_text = backend.complete(&prompt, templates::SYSTEM_PROMPT).await?;
        let project = parse_remote_plan(&response_text, options)?;

        info!("[DIRECTOR] Remote plan accepted: {} scenes", project.scenes.len());
        Ok(project)
    }
}
