//! Terminal presentation adapter.
//!
//! Maps typed lines to session calls and plays a `Turn` back with the delay
//! hints honoured. The dialogue core never sees any of this.

use std::str::FromStr;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::kernel::event::{Message, QuickAction, Sender};
use crate::kernel::scheduler::{Panel, SideEffect, Turn};
use crate::phrases::Language;

pub const HELP: &str = "\
commands:
  <text>            talk to the assistant
  <N>               choose option N of the last offered options
  /quick <action>   symptoms | appointment | emergency | education
  /tips             show a health tip
  /voice            send a (simulated) voice message
  /lang <hi|en>     switch language
  /toggle           flip language
  /transcript       print the conversation as JSON
  /stats            print session telemetry
  /help             this text
  /quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Text(String),
    Option(usize),
    Quick(String),
    Tips,
    Voice,
    Lang(Language),
    Toggle,
    Transcript,
    Stats,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        if let Ok(n) = line.parse::<usize>() {
            return if n == 0 {
                Err("options are numbered from 1".to_string())
            } else {
                Ok(Command::Option(n))
            };
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Command::Text(line.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (name, arg) {
            ("quick", Some(action)) => Ok(Command::Quick(action.to_string())),
            ("quick", None) => Err("usage: /quick <action>".to_string()),
            ("tips", _) => Ok(Command::Tips),
            ("voice", _) => Ok(Command::Voice),
            ("lang", Some(code)) => code
                .parse::<Language>()
                .map(Command::Lang)
                .map_err(|e| e.to_string()),
            ("lang", None) => Err("usage: /lang <hi|en>".to_string()),
            ("toggle", _) => Ok(Command::Toggle),
            ("transcript", _) => Ok(Command::Transcript),
            ("stats", _) => Ok(Command::Stats),
            ("help", _) => Ok(Command::Help),
            ("quit" | "exit", _) => Ok(Command::Quit),
            (other, _) => Err(format!("unknown command: /{other}")),
        }
    }
}

pub fn render_message(message: &Message) -> String {
    let who = match message.sender {
        Sender::Bot => "bot",
        Sender::User => "you",
    };
    let mut out = format!(
        "[{}] {}: {}",
        message.timestamp.format("%H:%M"),
        who,
        message.text
    );
    for (index, option) in message.options.iter().enumerate() {
        out.push_str(&format!("\n    {}) {}", index + 1, option));
    }
    out
}

pub fn render_panel(panel: Panel) -> &'static str {
    match panel {
        Panel::Emergency => "=== EMERGENCY: dial 108 ===",
        Panel::Facilities => "=== Nearby health facilities ===",
    }
}

pub fn render_quick_actions(labels: &[(QuickAction, String)]) -> String {
    labels
        .iter()
        .map(|(action, label)| format!("[{}] {}", action.id(), label))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Writes each effect after its delay. Returns `false` if cancelled midway;
/// effects already written stay written.
pub async fn play_turn<W>(
    turn: &Turn,
    out: &mut W,
    cancel: &CancellationToken,
) -> std::io::Result<bool>
where
    W: AsyncWrite + Unpin,
{
    for effect in &turn.effects {
        let line = match effect {
            SideEffect::Deliver { message, delay } => {
                if !delay.is_zero() {
                    tokio::select! {
                        _ = cancel.cancelled() => return Ok(false),
                        _ = tokio::time::sleep(delay.as_duration()) => {}
                    }
                }
                render_message(message)
            }
            SideEffect::OpenPanel(panel) => render_panel(*panel).to_string(),
        };
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;
    }
    Ok(true)
}
