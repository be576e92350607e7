// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Annospan replay CLI.
//!
//! Reads an annotator config and a JSON-lines file of host events, applies the events in order
//! and prints one snapshot per event as a JSON line on stdout. Logs go to stderr.

use std::error::Error;
use std::io::{BufRead, BufReader, Write};

use annospan::config::AnnotatorConfig;
use annospan::session::{AnnotatorSession, Event};

const DEFAULT_LOG_LEVEL: &str = "warn";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--log-level <level>] <config.json> <events.jsonl>\n\nEvents are read one JSON object per line; blank lines are skipped.\n<events.jsonl> may be `-` to read from stdin.\n--log-level defaults to `{DEFAULT_LOG_LEVEL}`; RUST_LOG takes precedence when set."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    log_level: Option<String>,
    config: String,
    events: String,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut log_level = None;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--log-level" => {
                if log_level.is_some() {
                    return Err(());
                }
                log_level = Some(args.next().ok_or(())?);
            }
            "-" => positional.push(arg),
            _ if arg.starts_with('-') => return Err(()),
            _ => positional.push(arg),
        }
    }

    let [config, events]: [String; 2] = positional.try_into().map_err(|_| ())?;
    Ok(CliOptions { log_level, config, events })
}

fn replay(
    session: &mut AnnotatorSession,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<usize, Box<dyn Error>> {
    let mut applied = 0usize;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: Event = serde_json::from_str(&line)
            .map_err(|err| format!("events line {}: {err}", index + 1))?;
        session.apply(event).map_err(|err| format!("events line {}: {err}", index + 1))?;
        serde_json::to_writer(&mut output, &session.snapshot())?;
        output.write_all(b"\n")?;
        applied += 1;
    }
    output.flush()?;
    Ok(applied)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "annospan".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let level = options.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
        let _logger = flexi_logger::Logger::try_with_env_or_str(level)?.log_to_stderr().start()?;

        let config = AnnotatorConfig::load(&options.config)?;
        log::info!(
            "event=replay_start features={} near_window={}",
            config.features().len(),
            config.near_window()
        );
        let mut session = AnnotatorSession::new(&config);

        let stdout = std::io::stdout();
        let applied = if options.events == "-" {
            replay(&mut session, std::io::stdin().lock(), stdout.lock())?
        } else {
            let file = std::fs::File::open(&options.events)
                .map_err(|err| format!("failed to open events {}: {err}", options.events))?;
            replay(&mut session, BufReader::new(file), stdout.lock())?
        };
        log::info!("event=replay_done applied={applied} rev={}", session.rev());
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("annospan: {err}");
        std::process::exit(1);
    }
}
