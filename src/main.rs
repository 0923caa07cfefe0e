// SYNOID Shorts Main Entry Point
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use synoid_shorts::{write_project, GenerationOptions, ShortsConfig, ShortsGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "synoid-shorts")]
#[command(about = "Create an AI-powered YouTube Shorts production package", long_about = None)]
struct Cli {
    /// Shorts topic, e.g. 'AI tools for students'
    topic: String,

    /// Creative angle
    #[arg(long, default_value = "educational")]
    angle: String,

    /// Target audience
    #[arg(long, default_value = "general")]
    audience: String,

    /// Target duration in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    duration: u32,

    /// Directory where JSON and markdown plan will be saved
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Skip the completion API even if OPENAI_API_KEY is set
    #[arg(long)]
    local: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let mut config = ShortsConfig::from_env();
    if args.local {
        config = config.without_remote();
    }

    let options = GenerationOptions::new(&args.topic)
        .with_angle(&args.angle)
        .with_audience(&args.audience)
        .with_duration(args.duration);

    let generator =
        ShortsGenerator::from_config(&config).context("Failed to set up the completion backend")?;
    let project = generator.generate(&options).await;
    info!("Generated {} scenes for '{}'", project.scenes.len(), project.topic);

    write_project(&project, &args.output)
        .with_context(|| format!("Failed to write project files to {:?}", args.output))?;

    let resolved = std::fs::canonicalize(&args.output).unwrap_or_else(|_| args.output.clone());

    println!("✅ Shorts automation package generated");
    println!("Topic: {}", project.topic);
    println!("Title: {}", project.title);
    println!("Files written to: {}", resolved.display());

    Ok(())
}
