//! Contact Book - Main entry point
//!
//! Interactive loop: reads one command per line from stdin and prints the
//! reply to stdout.

use anyhow::{Context, Result};
use contact_book::commands::{handle_raw_line, Reply, GREETING};
use contact_book::{Config, ContactService};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr; stdout carries replies
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book with snapshot file: {}",
        config.snapshot_path.display()
    );

    let mut service = ContactService::from_config(&config);

    if config.autoload {
        match service.load(&[]) {
            Ok(message) => info!("{}", message),
            Err(e) => error!("Failed to load contacts: {}", e),
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", GREETING)?;

    let mut line = Vec::new();
    loop {
        write!(stdout, "Enter command: ")?;
        stdout.flush()?;

        line.clear();
        let read = stdin
            .lock()
            .read_until(b'\n', &mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            break;
        }

        let reply = match handle_raw_line(&mut service, &line) {
            Some(reply) => reply,
            None => continue,
        };

        match reply {
            Reply::Text(text) => writeln!(stdout, "{}", text)?,
            Reply::Records(records) if records.is_empty() => {
                writeln!(stdout, "No contacts found")?
            }
            Reply::Records(records) => {
                writeln!(stdout, "All contacts:")?;
                for record in records {
                    writeln!(stdout, "{}", record)?;
                }
            }
            Reply::Exit => break,
        }
    }

    writeln!(stdout, "Good bye!")?;
    info!("Contact book session ended");
    Ok(())
}
