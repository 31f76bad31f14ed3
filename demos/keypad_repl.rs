//! Keypad REPL
//!
//! Drives a keypad from standard input. Each whitespace-separated token is
//! a key name as a keyboard would report it (`7`, `+`, `Enter`, `Escape`,
//! `Backspace`, ...); every frame is printed.
//!
//! Key concepts:
//! - The accumulator knows nothing about keys or time
//! - The keypad owns the error banner and press feedback
//! - Frames reach the terminal through a render effect
//!
//! Run with: cargo run --example keypad_repl
//! Set RUST_LOG=abacus=debug to watch state changes, and
//! ABACUS_KEYPAD_CONFIG=/path/to/keypad.json to override the defaults.

use abacus::adapter::{render, render_if_changed, Frame, Keypad, KeypadConfig, Surface, SurfaceError};
use chrono::Utc;
use std::io::{self, BufRead, Write};
use stillwater::effect::Effect;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct Terminal;

impl Surface for Terminal {
    fn show(&self, frame: &Frame) -> Result<(), SurfaceError> {
        let pressed = frame
            .pressed
            .map(|input| format!("  [{input}]"))
            .unwrap_or_default();
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "| {:>14} |{pressed}", frame.text)
            .map_err(|e| SurfaceError::Unavailable(e.to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::var("ABACUS_KEYPAD_CONFIG") {
        Ok(path) => KeypadConfig::load(path)?,
        Err(_) => KeypadConfig::default(),
    };

    println!("=== Abacus Keypad ===");
    println!("Type keys separated by spaces, e.g. `2 + 3 * 4 Enter`. Ctrl-D quits.\n");

    let terminal = Terminal;
    let mut keypad = Keypad::new(config);
    render(keypad.frame()).run(&terminal).await?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        for key in line.split_whitespace() {
            render_if_changed(keypad.tick(Utc::now()))
                .run(&terminal)
                .await?;
            match keypad.key(key, Utc::now()) {
                Some(frame) => render(frame).run(&terminal).await?,
                None => eprintln!("  (ignored key {key:?})"),
            }
        }

        // The REPL has no timer; let a pending error banner play out.
        if keypad.is_showing_error() {
            tokio::time::sleep(keypad.config().error_dismiss()).await;
            render_if_changed(keypad.tick(Utc::now()))
                .run(&terminal)
                .await?;
        }
    }

    Ok(())
}
