// SYNOID Shorts Local Generator
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Offline template fill. Always succeeds.

use crate::agent::blueprint::{GenerationOptions, Scene, ShortsProject};
use crate::agent::templates;

pub const MIN_SCENES: u32 = 4;
pub const MAX_SCENES: u32 = 7;
pub const MIN_SECONDS_PER_SCENE: u32 = 3;
const SECONDS_PER_SCENE_TARGET: u32 = 5;

/// Scene count for a duration: one scene per 5 seconds, kept within 4..=7.
pub fn scene_count(duration_seconds: u32) -> u32 {
    (duration_seconds / SECONDS_PER_SCENE_TARGET).clamp(MIN_SCENES, MAX_SCENES)
}

/// Floor division with a 3 second minimum. No rounding correction.
pub fn seconds_per_scene(duration_seconds: u32, scene_count: u32) -> u32 {
    (duration_seconds / scene_count).max(MIN_SECONDS_PER_SCENE)
}

pub fn generate_local(options: &GenerationOptions) -> ShortsProject {
    let duration = options.duration_seconds;
    let count = scene_count(duration);
    let step = seconds_per_scene(duration, count);

    let mut scenes = Vec::with_capacity(count as usize);
    let mut narration = Vec::with_capacity(count as usize);

    for idx in 0..count {
        let point = idx + 1;
        // Short durations would otherwise start scenes past the end.
        let start = (idx * step).min(duration);
        let end = duration.min(start + step);

        let line = templates::narration_line(options, point);
        scenes.push(Scene {
            start_second: start,
            end_second: end,
            visual_prompt: templates::visual_prompt(options, point),
            narration_line: line.clone(),
            subtitle: templates::subtitle(options, point),
        });
        narration.push(line);
    }

    let hook = templates::hook(options);
    let cta = templates::CTA.to_string();
    let voiceover_script = templates::voiceover_script(&hook, &narration, &cta);

    ShortsProject {
        topic: options.topic.clone(),
        angle: options.angle.clone(),
        hook,
        cta,
        title: templates::title(options),
        description: templates::description(options),
        hashtags: templates::hashtags(options),
        voiceover_script,
        scenes,
    }
}
