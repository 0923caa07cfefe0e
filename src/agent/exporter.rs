// SYNOID Shorts Exporter - JSON & Markdown Artifacts
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Writes are not atomic. A failure between the two files can leave the JSON
// written and the markdown missing.

use crate::agent::blueprint::ShortsProject;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const JSON_FILE_NAME: &str = "shorts_project.json";
pub const MARKDOWN_FILE_NAME: &str = "shorts_project.md";

const PRODUCTION_CHECKLIST: [&str; 6] = [
    "- [ ] Generate voiceover audio",
    "- [ ] Gather or generate vertical clips (9:16)",
    "- [ ] Add subtitles and hook text",
    "- [ ] Sync cuts to narration pacing",
    "- [ ] Export MP4 (1080x1920)",
    "- [ ] Upload and schedule",
];

/// Paths of the two files produced by [`write_project`].
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenArtifacts {
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
}

/// Creates `output_dir` if needed and overwrites both artifacts.
pub fn write_project(project: &ShortsProject, output_dir: &Path) -> Result<WrittenArtifacts> {
    fs::create_dir_all(output_dir)?;

    let json_path = output_dir.join(JSON_FILE_NAME);
    let markdown_path = output_dir.join(MARKDOWN_FILE_NAME);

    fs::write(&json_path, serde_json::to_string_pretty(project)?)?;
    fs::write(&markdown_path, render_markdown(project))?;

    info!("[EXPORT] Wrote {:?} and {:?}", json_path, markdown_path);

    Ok(WrittenArtifacts {
        json_path,
        markdown_path,
    })
}

pub fn render_markdown(project: &ShortsProject) -> String {
    let mut lines: Vec<String> = vec![
        format!("# AI Shorts Plan: {}", project.topic),
        String::new(),
        format!("## Title\n{}", project.title),
        String::new(),
        "## Description".to_string(),
        project.description.clone(),
        String::new(),
        format!("## Hashtags\n{}", project.hashtags.join(" ")),
        String::new(),
        "## Hook".to_string(),
        project.hook.clone(),
        String::new(),
        "## Voiceover Script".to_string(),
        project.voiceover_script.clone(),
        String::new(),
        "## Shot List".to_string(),
    ];

    for scene in &project.scenes {
        lines.push(format!("### {}s - {}s", scene.start_second, scene.end_second));
        lines.push(format!("- Visual prompt: {}", scene.visual_prompt));
        lines.push(format!("- Narration: {}", scene.narration_line));
        lines.push(format!("- Subtitle: {}", scene.subtitle));
        lines.push(String::new());
    }

    lines.push("## CTA".to_string());
    lines.push(project.cta.clone());
    lines.push(String::new());
    lines.push("## Production Checklist".to_string());
    lines.extend(PRODUCTION_CHECKLIST.iter().map(|item| item.to_string()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::blueprint::{GenerationOptions, Scene};
    use crate::agent::local_generator::generate_local;

    #[test]
    fn test_markdown_layout() {
        let project = generate_local(&GenerationOptions::new("ai productivity"));
        let markdown = render_markdown(&project);

        assert!(markdown.starts_with("# AI Shorts Plan: ai productivity\n\n## Title\nAi Productivity in 30s"));
        assert!(markdown.contains("## Hashtags\n#shorts #youtubeshorts #ai #aiproductivity\n"));
        assert!(markdown.contains("### 0s - 5s\n- Visual prompt: "));
        assert!(markdown.contains("### 25s - 30s\n"));
        assert!(markdown.contains("- Subtitle: Ai Productivity Tip 6\n\n## CTA\n"));
        assert!(markdown.ends_with("- [ ] Upload and schedule"));
        assert_eq!(markdown.matches("### ").count(), 6);
        assert_eq!(markdown.matches("- [ ] ").count(), 6);
    }

    #[test]
    fn test_markdown_matches_exact_layout() {
        let scene = |start, end, n: u32| Scene {
            start_second: start,
            end_second: end,
            visual_prompt: format!("shot {}", n),
            narration_line: format!("line {}", n),
            subtitle: format!("sub {}", n),
        };
        let project = ShortsProject {
            topic: "tea".into(),
            angle: "calm".into(),
            hook: "Stop scrolling: tea.".into(),
            cta: "Follow.".into(),
            title: "Tea in 10s".into(),
            description: "All about tea.".into(),
            hashtags: vec!["#shorts".into(), "#tea".into()],
            voiceover_script: "Stop scrolling: tea. line 1 line 2 Follow.".into(),
            scenes: vec![scene(0, 5, 1), scene(5, 10, 2)],
        };

        let expected = "\
# AI Shorts Plan: tea

## Title
Tea in 10s

## Description
All about tea.

## Hashtags
#shorts #tea

## Hook
Stop scrolling: tea.

## Voiceover Script
Stop scrolling: tea. line 1 line 2 Follow.

## Shot List
### 0s - 5s
- Visual prompt: shot 1
- Narration: line 1
- Subtitle: sub 1

### 5s - 10s
- Visual prompt: shot 2
- Narration: line 2
- Subtitle: sub 2

## CTA
Follow.

## Production Checklist
- [ ] Generate voiceover audio
- [ ] Gather or generate vertical clips (9:16)
- [ ] Add subtitles and hook text
- [ ] Sync cuts to narration pacing
- [ ] Export MP4 (1080x1920)
- [ ] Upload and schedule";

        assert_eq!(render_markdown(&project), expected);
    }

    #[test]
    fn test_scene_sections_keep_order() {
        let project = generate_local(&GenerationOptions::new("order").with_duration(20));
        let markdown = render_markdown(&project);

        let positions: Vec<usize> = ["### 0s - 5s", "### 5s - 10s", "### 10s - 15s", "### 15s - 20s"]
            .iter()
            .map(|h| markdown.find(h).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
