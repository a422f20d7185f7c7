// autoblogger CLI
//
// Drafts articles through an OpenAI-compatible endpoint and prints CMS-ready
// HTML. Logs go to stderr; stdout carries only markup or JSON.

use anyhow::{Context, Result};
use autoblogger::{
    BlogRequest, BlogWriter, ModelConfig, Normalizer, NormalizerConfig, OpenAiClient,
    PublishBundle, RefineSession, Tone,
};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "autoblogger", version, about = "Draft and normalize CMS-ready blog HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Strip fences, style and wrap existing markup (file or stdin)
    Normalize {
        #[arg(long)]
        input: Option<PathBuf>,
        /// JSON normalizer config; the blog preset when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Only strip fences and wrap, no inline styles
        #[arg(long)]
        no_styles: bool,
    },
    /// Draft a new article
    Generate {
        #[arg(long)]
        topic: String,
        #[arg(long)]
        persona: Option<String>,
        #[arg(long, default_value = "")]
        key_points: String,
        #[arg(long, value_enum, default_value_t = Tone::DirectBold)]
        tone: Tone,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the publish bundle as JSON
        #[arg(long)]
        json: bool,
        #[arg(long)]
        skip_seo: bool,
    },
    /// Apply one edit instruction to an existing article
    Refine {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        instruction: String,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Normalize {
            input,
            config,
            no_styles,
        } => {
            let normalizer = load_normalizer(config.as_deref(), no_styles)?;
            let raw = read_input(input.as_deref())?;
            println!("{}", normalizer.render(&raw));
        }
        Command::Generate {
            topic,
            persona,
            key_points,
            tone,
            config,
            json,
            skip_seo,
        } => {
            let normalizer = load_normalizer(config.as_deref(), false)?;
            let writer = build_writer()?;

            let mut request = BlogRequest::new(topic).key_points(key_points).tone(tone);
            if let Some(persona) = persona {
                request = request.persona(persona);
            }

            let session = RefineSession::draft(writer, normalizer, request, !skip_seo).await;
            let (document, seo) = session.finish();
            let bundle = PublishBundle::from_document(&document, seo);

            if json {
                println!("{}", serde_json::to_string_pretty(&bundle)?);
            } else {
                print!("{}", bundle.to_text());
            }
        }
        Command::Refine {
            input,
            instruction,
            config,
        } => {
            let normalizer = load_normalizer(config.as_deref(), false)?;
            let writer = build_writer()?;
            let existing = read_input(Some(input.as_path()))?;

            let mut session = RefineSession::import(writer, normalizer, &existing);
            let document = session.refine(&instruction).await;
            println!("{document}");
        }
    }

    Ok(())
}

fn load_normalizer(config: Option<&Path>, no_styles: bool) -> Result<Normalizer> {
    let config = NormalizerConfig::load_or_default(config)?;
    let normalizer = Normalizer::new(config);
    Ok(if no_styles {
        normalizer.without_styles()
    } else {
        normalizer
    })
}

fn build_writer() -> Result<BlogWriter<OpenAiClient>> {
    let models = ModelConfig::from_env()?;
    if !models.has_api_key() {
        tracing::warn!("No API key configured; generation will return an error sentinel");
    }
    let client = OpenAiClient::new(models.clone()).context("Failed to create completion client")?;
    Ok(BlogWriter::new(client, &models))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
