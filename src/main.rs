use carbon_footprint::utils::logger::{self, LogFormat};
use carbon_footprint::CliConfig;
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_cli_logger(config.verbose, log_format);

    tracing::info!("Starting carbon-footprint CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match config.run() {
        Ok(output) if output.ends_with('\n') => print!("{}", output),
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
