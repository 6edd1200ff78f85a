use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use swasthya::config::{DelayProfile, EngineConfig};
use swasthya::console::{self, Command};
use swasthya::kernel::event::QuickAction;
use swasthya::phrases::Language;
use swasthya::{random, DialogueEngine, Session, Turn};

#[derive(Parser, Debug)]
#[command(name = "swasthya")]
#[command(about = "Bilingual health assistant chat on the terminal", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting language (hi or en)
    #[arg(long)]
    lang: Option<Language>,

    /// Seed for reproducible replies
    #[arg(long)]
    seed: Option<u64>,

    /// Deliver replies without simulated typing delays
    #[arg(long)]
    instant: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the conversation
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(lang) = cli.lang {
        config.default_language = lang;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.instant {
        config.delays = DelayProfile::instant();
    }

    let engine = Arc::new(DialogueEngine::builtin(&config).context("phrase table invalid")?);
    let mut session = Session::new(engine, random::from_seed(config.seed));
    tracing::info!(language = %config.default_language, "session created");

    let shutdown = CancellationToken::new();
    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let mut stdout = tokio::io::stdout();
    print_quick_actions(&session, &mut stdout).await?;

    let welcome = session.start(config.default_language)?;
    let mut last_options = play(&welcome, &mut stdout, &shutdown).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            _ = shutdown.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                say(&mut stdout, &message).await?;
                continue;
            }
        };

        let turn = match command {
            Command::Text(text) => session.send_text(&text)?,
            Command::Option(n) => match last_options.get(n - 1) {
                Some(option) => session.select_option(option)?,
                None => {
                    say(&mut stdout, "no such option").await?;
                    continue;
                }
            },
            Command::Quick(action) => session.quick_action(&action)?,
            Command::Tips => session.request_education()?,
            Command::Voice => session.send_voice_note()?,
            Command::Lang(language) => {
                session.set_language(language);
                print_quick_actions(&session, &mut stdout).await?;
                continue;
            }
            Command::Toggle => {
                session.toggle_language();
                print_quick_actions(&session, &mut stdout).await?;
                continue;
            }
            Command::Transcript => {
                say(&mut stdout, &session.transcript_json()?).await?;
                continue;
            }
            Command::Stats => {
                say(&mut stdout, &format!("{:#?}", session.telemetry())).await?;
                continue;
            }
            Command::Help => {
                say(&mut stdout, console::HELP).await?;
                continue;
            }
            Command::Quit => break,
        };

        let offered = play(&turn, &mut stdout, &shutdown).await?;
        if !offered.is_empty() {
            last_options = offered;
        }
        if shutdown.is_cancelled() {
            break;
        }
    }

    tracing::info!(messages = session.transcript().len(), "session ended");
    Ok(())
}

/// Plays a turn and returns the options it offered, if any.
async fn play(
    turn: &Turn,
    stdout: &mut tokio::io::Stdout,
    shutdown: &CancellationToken,
) -> Result<Vec<String>> {
    console::play_turn(turn, stdout, shutdown).await?;
    Ok(turn.last_options().map(<[String]>::to_vec).unwrap_or_default())
}

async fn say(stdout: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

async fn print_quick_actions(session: &Session, stdout: &mut tokio::io::Stdout) -> Result<()> {
    let labels = QuickAction::ALL
        .into_iter()
        .map(|action| -> Result<(QuickAction, String)> {
            Ok((action, session.quick_action_label(action)?.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;
    say(stdout, &console::render_quick_actions(&labels)).await
}
