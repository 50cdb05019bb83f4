use clap::Parser;
use secret_santa::config::roster_is_url;
use secret_santa::core::matcher::Matcher;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{
    CliConfig, ConfigProvider, ConsoleNotifier, CsvRoster, HttpRoster, Notifier, RosterSource,
    RunReport, SantaEngine, SantaError, TomlConfig, WebhookNotifier,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Welcome to Secret Santa!");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => run_checked(&config).await,
            Err(e) => Err(e),
        },
        None => run_checked(&cli).await,
    };

    match result {
        Ok(report) => {
            tracing::info!("✅ All participants matched and notified!");
            println!(
                "✅ Matched {} participants, sent {} notifications",
                report.matched, report.notified
            );
            if !report.failed_notifications.is_empty() {
                for (name, reason) in &report.failed_notifications {
                    eprintln!("⚠️  {} was not notified: {}", name, reason);
                }
                eprintln!(
                    "⚠️  {} notification(s) failed; re-run with a fixed roster or tell them in person",
                    report.failed_notifications.len()
                );
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            if let SantaError::MatchingExhausted { .. } = e {
                eprintln!("💡 The exclusions may be too tight; raise --max-attempts or loosen them");
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run_checked<C: ConfigProvider + Validate>(
    config: &C,
) -> secret_santa::Result<RunReport> {
    config.validate()?;

    let source: Box<dyn RosterSource> = if roster_is_url(config.roster()) {
        Box::new(HttpRoster::new(config.roster()))
    } else {
        Box::new(CsvRoster::new(config.roster()))
    };

    let notifier: Box<dyn Notifier> = if config.dry_run() {
        tracing::info!("Dry run: pairings will be logged, not sent");
        Box::new(ConsoleNotifier)
    } else {
        match config.notify_endpoint() {
            Some(endpoint) => Box::new(WebhookNotifier::new(endpoint, config.event_name())),
            None => {
                return Err(SantaError::config(
                    "notify endpoint is required unless dry-run is set",
                ))
            }
        }
    };

    let matcher = Matcher::from_seed(config.max_attempts(), config.seed());
    let mut engine =
        SantaEngine::new(source, notifier, matcher).with_expected_count(config.expected_count());
    engine.run().await
}
