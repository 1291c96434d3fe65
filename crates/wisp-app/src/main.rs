mod cli;
mod config;
mod term;

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use wisp_backend::{HttpBackend, HttpBackendConfig};
use wisp_core::{Cadence, ChatWidget, Immediate, Interval};

use crate::term::TermSurface;

#[tokio::main]
async fn main() -> wisp_common::Result<()> {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("wisp=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "wisp=info".parse().unwrap()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Wisp v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config::load(args.config.as_deref()).unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e}");
        config::WispConfig::default()
    });

    let base_url = args
        .base_url
        .unwrap_or_else(|| config.backend.base_url.clone());
    let backend = HttpBackend::new(
        HttpBackendConfig::new(base_url)
            .with_timeout(Duration::from_secs(config.backend.timeout_secs)),
    )
    .map_err(wisp_common::WispError::from)?;

    let cadence: Box<dyn Cadence> = if args.instant {
        Box::new(Immediate)
    } else {
        Box::new(Interval::new(Duration::from_millis(config.reveal.cadence_ms)))
    };

    let mut widget = ChatWidget::new(TermSurface::stdout(), Box::new(backend), cadence);

    // Log lifecycle events as they happen.
    let mut events = widget.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            debug!(?event, "widget event");
        }
    });

    widget.init().await;
    if config.widget.open_on_start {
        widget.toggle_panel();
    }

    println!("Type a question, /toggle to open or close the panel, /quit to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\n> ");
        let _ = std::io::stdout().flush();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "/quit" => break,
            "/toggle" => widget.toggle_panel(),
            _ => {
                println!();
                widget.send(&line).await;
            }
        }
    }

    if args.transcript {
        println!("\n{}", widget.transcript());
    }

    info!("Wisp exiting");
    Ok(())
}
