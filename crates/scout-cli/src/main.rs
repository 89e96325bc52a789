use anyhow::Context;
use clap::Parser;
use scout_config::ScoutConfig;
use scout_research::{DailyNote, Playbook, Researcher};

mod cli;
mod output;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("scout error: {error:#}");
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = ScoutConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load configuration")?;
    if !config.github.is_configured() {
        tracing::warn!("no GitHub token configured; code search may be rate limited or rejected");
    }

    let playbook = match cli.playbook.as_ref().or(config.general.playbook.as_ref()) {
        Some(path) => Playbook::from_file(path)?,
        None => Playbook::builtin(),
    };

    let researcher = Researcher::new(&config, playbook).context("failed to build crawlers")?;
    let notes_dir = cli.output.clone().unwrap_or_else(|| config.general.notes_dir.clone());
    let sink = DailyNote::new(notes_dir);
    let options = cli.run_options(config.general.max_results);
    let today = chrono::Local::now().date_naive();

    let outcome = researcher.run(&options, &sink, today).await?;
    println!("{}", output::render(&outcome, cli.format)?);

    Ok(outcome.exit_code())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SCOUT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
