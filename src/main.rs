//! EduMorph command-line entry point.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use edumorph::{
    ConfigService, Difficulty, DoubtParams, ExplanationDepth, ExplanationParams, FeatureServices,
    Persona, QuizParams, RoadmapParams, SkillLevel, TimeCommitment, ToneMode, VisionParams,
};
use edumorph_llm::GeminiProvider;
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "edumorph", version, about = "AI learning assistant")]
struct Cli {
    /// Path to config.json (defaults to ~/.edumorph/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Real-world applications of a concept
    Vision {
        concept: String,
        #[arg(long, default_value = "default")]
        persona: Persona,
    },
    /// Personalized learning roadmap
    Roadmap {
        goal: String,
        #[arg(long, default_value = "beginner")]
        level: SkillLevel,
        #[arg(long, default_value = "part-time")]
        time: TimeCommitment,
    },
    /// Ask the tutor a question
    Doubt {
        question: String,
        #[arg(long, default_value = "General")]
        subject: String,
        /// Prior conversation, as `Student: ...` / `Tutor: ...` lines
        #[arg(long, default_value = "")]
        context: String,
    },
    /// Stream an explanation of a topic
    Explain {
        topic: String,
        #[arg(long, default_value = "tldr", conflicts_with = "all")]
        depth: ExplanationDepth,
        /// Generate all three depths at once
        #[arg(long)]
        all: bool,
        #[arg(long, default_value = "default")]
        tone: ToneMode,
    },
    /// Generate quiz questions
    Quiz {
        topic: String,
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,
        #[arg(long, default_value_t = 5)]
        count: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = dotenv::dotenv() {
        debug!(error = %e, "no .env file loaded");
    }

    let config_service = match &cli.config {
        Some(path) => ConfigService::load(path),
        None => ConfigService::load_default(),
    }
    .context("failed to load configuration")?;
    let config = config_service.config();

    // The credential is read once, here, and handed to the provider.
    let api_key = std::env::var(&config.api_key_env).ok();
    if api_key.is_none() {
        warn!(var = %config.api_key_env, "API key environment variable is not set");
    }
    let provider = GeminiProvider::new(config.provider_config(api_key))
        .context("failed to create backend client")?;
    let services = FeatureServices::new(Arc::new(provider));

    run(cli.command, &services).await
}

async fn run(command: Command, services: &FeatureServices) -> Result<()> {
    match command {
        Command::Vision { concept, persona } => {
            require_text("concept", &concept)?;
            let vision = services
                .vision
                .generate(&VisionParams { concept, persona })
                .await?;
            print_json(&vision)
        }
        Command::Roadmap { goal, level, time } => {
            require_text("goal", &goal)?;
            let roadmap = services
                .roadmap
                .generate_tracked(&RoadmapParams {
                    learning_goal: goal,
                    level,
                    time_commitment: time,
                })
                .await?;
            print_json(&roadmap)
        }
        Command::Doubt {
            question,
            subject,
            context,
        } => {
            require_text("question", &question)?;
            let answer = services
                .doubt
                .resolve(&DoubtParams {
                    question,
                    context,
                    subject,
                })
                .await?;
            println!("{}", answer);
            Ok(())
        }
        Command::Explain {
            topic,
            depth,
            all,
            tone,
        } => {
            require_text("topic", &topic)?;
            if all {
                let set = services
                    .explainer
                    .explain_all_depths(&topic, &tone, |_, _| {})
                    .await?;
                print_json(&set)
            } else {
                let mut out = FragmentWriter::new(std::io::stdout());
                services
                    .explainer
                    .stream_explanation(&ExplanationParams { topic, depth, tone }, |fragment| {
                        out.write(fragment)
                    })
                    .await?;
                out.finish()
                    .context("failed to write explanation to stdout")?;
                println!();
                Ok(())
            }
        }
        Command::Quiz {
            topic,
            difficulty,
            count,
        } => {
            require_text("topic", &topic)?;
            let questions = services
                .quiz
                .generate(&QuizParams {
                    topic,
                    difficulty,
                    count,
                })
                .await?;
            print_json(&questions)
        }
    }
}

/// Blank primary parameters never reach the feature layer.
fn require_text(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{} must not be empty", name);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes streamed fragments as they arrive, keeping the first I/O error.
///
/// After a failed write the remaining fragments are dropped; the stream
/// itself still runs to completion.
struct FragmentWriter<W: Write> {
    inner: W,
    error: Option<std::io::Error>,
}

impl<W: Write> FragmentWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    fn write(&mut self, fragment: &str) {
        if self.error.is_some() {
            return;
        }
        let result = self
            .inner
            .write_all(fragment.as_bytes())
            .and_then(|()| self.inner.flush());
        if let Err(e) = result {
            self.error = Some(e);
        }
    }

    fn finish(self) -> std::io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
