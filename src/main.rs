use clap::Parser;
use ticket_stats::core::ConfigProvider;
use ticket_stats::utils::{logger, validation::Validate};
use ticket_stats::{render, CliConfig, EtlEngine, LocalStorage, TicketError, TicketPipeline};

/// The only stderr output of a failed run, unless `--verbose` or `RUST_LOG` asks for more.
fn fail(e: &TicketError) -> ! {
    tracing::debug!("Ticket analysis failed: {:?}", e);
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(1);
}

fn main() {
    let cli = CliConfig::parse();

    let config = cli.resolve().unwrap_or_else(|e| fail(&e));
    let monitor_enabled = config.monitoring_enabled();

    logger::init_cli_logger(cli.verbose, monitor_enabled);

    tracing::info!("Starting ticket-stats CLI");
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let format = config.report_format();
    if monitor_enabled {
        tracing::info!("System monitoring enabled");
    }

    let pipeline = TicketPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    // Rendered in full before anything reaches stdout.
    match engine.run().and_then(|report| render(&report, format)) {
        Ok(output) => {
            print!("{}", output);
            tracing::info!("Ticket analysis completed successfully");
        }
        Err(e) => fail(&e),
    }
}
