use anyhow::{Context, Result};
use bmi_calculator::{
    Cli, JsonPresenter, Messages, OutputFormat, Presenter, RetryPolicy, Session, TextPresenter,
};
use clap::Parser;
use std::io::{self, BufRead};

fn main() {
    if let Err(error) = run() {
        eprintln!("bmi-calculator error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level())?;

    let settings = cli.settings();
    tracing::debug!(?settings, "starting");

    let messages = Messages::for_locale(settings.locale);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match settings.format {
        OutputFormat::Text => run_session(stdin, TextPresenter::new(stdout, messages), settings.policy),
        OutputFormat::Json => run_session(stdin, JsonPresenter::new(stdout, messages), settings.policy),
    }
}

fn run_session<R: BufRead, P: Presenter>(input: R, presenter: P, policy: RetryPolicy) -> Result<()> {
    let mut session = Session::new(input, presenter, policy);
    session.run().context("BMI session aborted")?;
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("BMI_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
