// SYNOID Shorts Copy Templates
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// All generated wording lives here. Generators only decide which template
// to fill and with what.

use crate::agent::blueprint::GenerationOptions;

pub const CTA: &str = "Follow for more bite-sized AI-powered shorts ideas.";

pub const SYSTEM_PROMPT: &str = "You are an expert viral short-form video producer.";

pub const BASE_HASHTAGS: [&str; 3] = ["#shorts", "#youtubeshorts", "#ai"];

/// Upper-cases a cased letter that follows an uncased character and
/// lower-cases the rest. Uncased letters (CJK etc.) start a new word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_cased = false;
    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased {
            if prev_is_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        prev_is_cased = cased;
    }
    out
}

pub fn hook(options: &GenerationOptions) -> String {
    format!(
        "Stop scrolling: {} in {} seconds.",
        title_case(&options.topic),
        options.duration_seconds
    )
}

pub fn title(options: &GenerationOptions) -> String {
    format!(
        "{} in {}s (AI Shorts Blueprint)",
        title_case(&options.topic),
        options.duration_seconds
    )
}

pub fn description(options: &GenerationOptions) -> String {
    format!(
        "Fast breakdown on {}. Built for {} viewers with an {} angle. Use this script to produce your next YouTube Short.",
        options.topic, options.audience, options.angle
    )
}

/// Base tags plus the topic with spaces removed. No other sanitizing.
pub fn hashtags(options: &GenerationOptions) -> Vec<String> {
    let mut tags: Vec<String> = BASE_HASHTAGS.iter().map(|t| t.to_string()).collect();
    tags.push(format!("#{}", options.topic.replace(' ', "")));
    tags
}

pub fn narration_line(options: &GenerationOptions, point: u32) -> String {
    format!(
        "Point {}: {} insight focused on {} for {} viewers.",
        point, options.topic, options.angle, options.audience
    )
}

pub fn subtitle(options: &GenerationOptions, point: u32) -> String {
    format!("{} Tip {}", title_case(&options.topic), point)
}

pub fn visual_prompt(options: &GenerationOptions, point: u32) -> String {
    format!(
        "Vertical cinematic b-roll illustrating {}, dynamic motion, high contrast, scene {}.",
        options.topic, point
    )
}

pub fn voiceover_script(hook: &str, narration: &[String], cta: &str) -> String {
    format!("{} {} {}", hook, narration.join(" "), cta)
}

/// User prompt sent to the remote completion backend.
pub fn remote_prompt(options: &GenerationOptions) -> String {
    format!(
        "Generate a YouTube Shorts production plan as strict JSON with keys: \
         title, description, hashtags (array), hook, cta, voiceover_script, scenes (array). \
         Each scene must have start_second, end_second, visual_prompt, narration_line, subtitle. \
         Topic: {}. Angle: {}. Audience: {}. Duration target: {} seconds.",
        options.topic, options.angle, options.audience, options.duration_seconds
    )
}
