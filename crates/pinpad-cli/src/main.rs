//! Terminal keypad demo
//!
//! Draws a shuffled keypad and reads slot letters from stdin:
//! - `a`-`j` tap the digit button in that slot (runs like `adf` tap several)
//! - `clear`, `done`, `show` (reshuffle), `hide`, `quit`

use anyhow::Context;
use clap::Parser;
use pinpad_core::{AssemblerOutcome, KeypadConfig};
use pinpad_host::{parse_line, render_keypad, render_mask, Command, KeypadSession};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pinpad-cli")]
#[command(about = "Shuffled PIN keypad demo", long_about = None)]
struct Cli {
    /// JSON keypad config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum PIN length before Done is accepted
    #[arg(long)]
    min_len: Option<usize>,

    /// Maximum PIN length
    #[arg(long)]
    max_len: Option<usize>,

    /// Fixed RNG seed for reproducible layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Character shown per entered digit
    #[arg(long)]
    mask_char: Option<char>,

    /// Reshuffle the keypad after Clear
    #[arg(long)]
    reshuffle_on_clear: bool,

    /// Print the submitted PIN instead of only its length
    #[arg(long)]
    reveal: bool,
}

impl Cli {
    fn keypad_config(&self) -> anyhow::Result<KeypadConfig> {
        let mut config = match &self.config {
            Some(path) => KeypadConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => KeypadConfig::default(),
        };

        if let Some(min_len) = self.min_len {
            config.min_len = min_len;
        }
        if self.max_len.is_some() {
            config.max_len = self.max_len;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(mask_char) = self.mask_char {
            config.mask_char = mask_char;
        }
        if self.reshuffle_on_clear {
            config.reshuffle_on_clear = true;
        }

        config.length_policy().context("invalid length policy")?;
        Ok(config)
    }
}

fn draw(session: &KeypadSession, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", render_mask(&session.masked()))?;
    match session.layout() {
        Some(layout) => writeln!(out, "{}", render_keypad(layout))?,
        None => writeln!(out, "(keypad hidden, type `show`)")?,
    }
    out.flush()
}

fn report(
    outcome: AssemblerOutcome,
    session: &mut KeypadSession,
    reveal: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    match outcome {
        AssemblerOutcome::Updated { .. } => {}
        AssemblerOutcome::Ignored { len } => {
            writeln!(out, "Maximum length {} reached", len)?;
        }
        AssemblerOutcome::Incomplete { len, min_len } => {
            writeln!(out, "PIN too short: {} of {} digits", len, min_len)?;
        }
        AssemblerOutcome::Finalized(_) => {
            if let Some(pin) = session.take_pin() {
                info!(len = pin.len(), "PIN submitted");
                if reveal {
                    writeln!(out, "Submitted PIN: {}", pin.to_pin_string().as_str())?;
                } else {
                    writeln!(out, "Submitted {}-digit PIN", pin.len())?;
                }
            }
            session.reset();
            session.show();
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Keep logs quiet by default so they don't interleave with the keypad
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.keypad_config()?;
    let mut session = KeypadSession::new(config).context("creating keypad")?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    session.show();
    draw(&session, &mut out)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let commands = match parse_line(&line) {
            Ok(commands) => commands,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        for command in commands {
            let result = match command {
                Command::Quit => return Ok(()),
                Command::Show => {
                    session.show();
                    continue;
                }
                Command::Hide => {
                    session.hide();
                    continue;
                }
                Command::Tap(position) => session.tap(position),
                Command::Clear => session.clear(),
                Command::Done => session.done(),
            };

            match result {
                Ok(outcome) => report(outcome, &mut session, cli.reveal, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "keypad input rejected");
                    writeln!(out, "{}", e)?;
                }
            }
        }

        draw(&session, &mut out)?;
    }

    Ok(())
}
