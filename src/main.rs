//! Terminal dino runner (default binary).
//!
//! Space jumps; `q`, `Esc` or `Ctrl-C` quits. Logs go to stderr. When stderr
//! is the terminal the game draws on, logging is off unless `RUST_LOG` is set;
//! redirect it to read logs (e.g. `RUST_LOG=tui_dino=debug tui-dino 2> dino.log`).

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tui_dino::engine::{Session, Shutdown};
use tui_dino::input::CrosstermKeys;
use tui_dino::term::TerminalRenderer;

/// Log level used when `RUST_LOG` is unset. Log lines on the game's own
/// terminal would draw over the grid.
fn default_filter(stderr_is_tty: bool) -> &'static str {
    if stderr_is_tty {
        "off"
    } else {
        "warn"
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(io::stderr().is_terminal()))),
        )
        .init();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the tokio runtime")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = rt.block_on(run(&mut term));

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!(error = %e, "failed to restore terminal");
    }
    result
}

async fn run(term: &mut TerminalRenderer) -> Result<()> {
    let shutdown = Shutdown::new();

    // Raw mode turns Ctrl-C into a key press, but SIGINT can still arrive from
    // outside (e.g. `kill -INT`).
    let on_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.trigger();
        }
    });

    let mut session = Session::new(CrosstermKeys::new(), term);
    let outcome = session.run(shutdown).await?;
    info!(
        reason = outcome.reason.as_str(),
        ticks = outcome.ticks,
        "bye"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_is_silent_on_the_game_terminal() {
        assert_eq!(default_filter(true), "off");
        assert_eq!(default_filter(false), "warn");
    }
}
