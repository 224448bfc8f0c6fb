use anyhow::Context;
use clap::{Parser, Subcommand};
use red_flag_lib::config::AppConfig;
use red_flag_lib::input;
use red_flag_lib::llm::{AnalysisMode, InferenceClient, InputKind};
use red_flag_lib::pipeline::{self, Analysis};
use red_flag_lib::session::{SessionId, SessionStore};
use red_flag_lib::verdict::Verdict;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "red-flag")]
#[command(about = "🚩 Red Flag Detector — screenshots & WhatsApp exports, judged by an LLM")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a chat screenshot (png, jpg, jpeg)
    Scan {
        image: PathBuf,

        /// Analysis mode: red-flag, rizz or summary
        #[arg(short, long, default_value = "red-flag")]
        mode: AnalysisMode,
    },
    /// Analyze an exported WhatsApp chat (.txt)
    Chat {
        log: PathBuf,

        /// Analysis mode: red-flag, rizz or summary
        #[arg(short, long, default_value = "red-flag")]
        mode: AnalysisMode,

        /// Skip the preview confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// List analysis modes
    Modes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    red_flag_lib::init_logging_and_env();
    let cli = Cli::parse();

    let analysis = match cli.command {
        Command::Modes => {
            for mode in AnalysisMode::ALL {
                println!("{:<10} {}", mode.id(), mode.label());
            }
            return Ok(());
        }
        Command::Scan { image, mode } => scan(&client()?, &image, mode).await?,
        Command::Chat { log, mode, yes } => match chat(&client()?, &log, mode, yes).await? {
            Some(analysis) => analysis,
            None => return Ok(()),
        },
    };

    print_analysis(&analysis);
    if analysis.failed {
        std::process::exit(1);
    }
    Ok(())
}

fn client() -> anyhow::Result<InferenceClient> {
    let config = AppConfig::from_env()
        .context("Set GROQ_API_KEY (or add it to .env.local) and try again")?;
    Ok(InferenceClient::new(config))
}

async fn scan(client: &InferenceClient, image: &Path, mode: AnalysisMode) -> anyhow::Result<Analysis> {
    if input::kind_for_file_name(&image.display().to_string())? != InputKind::Image {
        anyhow::bail!("{} is a chat export — use `red-flag chat` instead", image.display());
    }
    let payload = input::read_upload(image)?;
    eprintln!("🕵️‍♂️ Analyzing Screenshot...");
    Ok(pipeline::analyze(client, mode, &payload).await?)
}

/// Two-step flow: upload + preview, then analyze after confirmation.
async fn chat(
    client: &InferenceClient,
    log: &Path,
    mode: AnalysisMode,
    yes: bool,
) -> anyhow::Result<Option<Analysis>> {
    let sessions = SessionStore::new();
    let session = SessionId::new("cli");
    let bytes = input::read_chat_export(log)?;
    let preview = pipeline::upload_chat_log(&sessions, &session, &log.display().to_string(), bytes)?;

    println!("👁️ Preview Chat Log");
    println!("{preview}");
    println!();

    if !yes && !confirm("ANALYZE FULL CHAT? [Y/n] ").await? {
        sessions.end_session(&session).map_err(anyhow::Error::msg)?;
        return Ok(None);
    }

    eprintln!("📖 Reading the whole history (Hinglish/Benglish supported)...");
    let analysis = pipeline::analyze_chat_log(client, &sessions, &session, mode).await?;
    sessions.end_session(&session).map_err(anyhow::Error::msg)?;
    Ok(Some(analysis))
}

async fn confirm(question: &str) -> anyhow::Result<bool> {
    eprint!("{question}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let answer = lines.next_line().await?.unwrap_or_default();
    let answer = answer.trim().to_lowercase();
    Ok(answer.is_empty() || answer == "y" || answer == "yes")
}

fn print_analysis(analysis: &Analysis) {
    println!("---");
    println!("{}", analysis.mode.label());
    match analysis.verdict {
        Verdict::Alert => println!("🚩 {}", analysis.text),
        Verdict::Neutral => {
            println!("✅ {}", analysis.text);
            if analysis.verdict.celebrate() && !analysis.failed {
                println!("🎈🎈🎈");
            }
        }
    }
}
