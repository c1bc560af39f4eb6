// ⌨️ Command line - optional flags; no arguments runs the classic interactive loop

use crate::input::RetryPolicy;
use crate::messages::Locale;
use crate::presenter::OutputFormat;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "bmi-calculator", version, about = "Body Mass Index calculator")]
pub struct Cli {
    /// Language for prompts and results
    #[arg(long, value_enum, default_value_t = Locale::En)]
    pub lang: Locale,

    /// `text` for interactive use, `json` for one JSON object per result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Give up after this many invalid entries for a single value
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved runtime settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub locale: Locale,
    pub format: OutputFormat,
    pub policy: RetryPolicy,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            locale: self.lang,
            format: self.format,
            policy: RetryPolicy::default().with_max_attempts(self.max_attempts),
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
