use std::path::Path;

use anyhow::{Context, bail};
use serde_json::Value;
use tracing::{info, warn};

use plummy::config::Config;
use plummy::event::{self, EventKind};
use plummy::parsers::{parse_gateway_event, parse_queue_event_with};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let Some(input) = std::env::args().nth(1) else {
        println!("Hello from plummy!");
        return Ok(());
    };

    let raw = if input == "-" {
        event::read_event(std::io::stdin().lock()).context("reading event from stdin")?
    } else {
        event::load_event(Path::new(&input))?
    };

    let kind = EventKind::detect(&raw);
    info!(input = %input, kind = kind.label(), "Loaded event");

    let parsed: Value = match kind {
        EventKind::Queue => {
            let parser = config.parser();
            let records: Vec<_> = parse_queue_event_with(&raw, &parser).collect();
            info!(parsed = records.len(), "Parsed queue event");
            serde_json::to_value(records)?
        }
        EventKind::Gateway => match parse_gateway_event(&raw) {
            Some(request) => {
                info!(method = %request.http_method, path = %request.path, "Parsed gateway event");
                serde_json::to_value(request)?
            }
            None => {
                warn!(input = %input, "Gateway event could not be parsed");
                bail!("malformed gateway event in {input}");
            }
        },
        EventKind::Unknown => bail!("unrecognized event shape in {input}"),
    };

    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}
