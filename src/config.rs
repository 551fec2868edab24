//! Configuration and CLI argument handling

use anyhow::{bail, Result};
use clap::Parser;

use crate::{
    controller::Intent,
    picker::{TimeField, MAX_HOUR, MAX_MIN_SEC},
    presets::resolve_preset,
    tasks::SessionOptions,
    view::OutputFormat,
};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "dial-timer")]
#[command(about = "A countdown timer with preset actions")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Hours to dial in before the session starts
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_HOUR as i64))]
    pub hour: Option<u32>,

    /// Minutes to dial in
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_MIN_SEC as i64))]
    pub min: Option<u32>,

    /// Seconds to dial in
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_MIN_SEC as i64))]
    pub sec: Option<u32>,

    /// Preset action to select, by id or title
    #[arg(short, long, conflicts_with_all = ["hour", "min", "sec"])]
    pub preset: Option<String>,

    /// Start the countdown right away
    #[arg(short, long)]
    pub start: bool,

    /// Exit when the countdown expires
    #[arg(long, requires = "start")]
    pub once: bool,

    /// Print snapshots as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Print the preset actions and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            exit_on_expiry: self.once,
        }
    }

    /// Intents that reproduce the requested starting selection
    pub fn initial_intents(&self) -> Result<Vec<Intent>> {
        let mut intents = Vec::new();

        if let Some(reference) = &self.preset {
            match resolve_preset(reference) {
                Some(preset) if preset.is_selectable() => {
                    intents.push(Intent::PresetTapped(preset.id))
                }
                _ => bail!("Unknown preset '{}', see --list-presets", reference),
            }
        }

        let fields = [
            (TimeField::Hour, self.hour),
            (TimeField::Minute, self.min),
            (TimeField::Second, self.sec),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                intents.push(Intent::FieldScrollSettled {
                    field,
                    value: value as i32,
                });
            }
        }

        if self.start {
            intents.push(Intent::StartStopTapped);
        }
        Ok(intents)
    }
}
