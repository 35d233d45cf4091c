// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! Demo shell entrypoint.
//!
//! Runs the interactive terminal rendition of the channel box against the
//! built-in demo scene. The search line, colour-coded user attributes and
//! selection-driven refresh behave exactly as they do against a real host.

use std::error::Error;

use channelbox_plus::widget::WidgetConfig;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--threshold <value>]\n\nRuns the interactive demo shell against a built-in scene.\n\n--threshold sets the minimum name-similarity ratio (within [0, 1], default 0.75)\nfor adjacent user attributes to keep the same sub colour; the higher the value,\nthe more two names must match up to stay the same colour."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    threshold: Option<f64>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--threshold" => {
                if options.threshold.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let threshold: f64 = raw.parse().map_err(|_| ())?;
                options.threshold = Some(threshold);
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "channelbox-plus".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let mut config = WidgetConfig::default();
        if let Some(threshold) = options.threshold {
            config.threshold = threshold;
        }

        channelbox_plus::tui::run(config)
    })();

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
