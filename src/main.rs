use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use kronos_console_e2e::cli::commands::{RunArgs, cmd_models, cmd_probe, cmd_run, cmd_scenarios};
use kronos_console_e2e::cli::config::{Cli, Commands, load_config};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Run {
            device,
            results_dir,
            format,
            output,
            groups,
            scenario,
            headed,
            browser,
        } => {
            let args = RunArgs {
                device,
                results_dir,
                format,
                output,
                groups,
                scenario,
                headed,
                browser,
            };
            let all_passed = cmd_run(args, &config)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Models { model } => cmd_models(model.as_deref())?,
        Commands::Scenarios { groups } => cmd_scenarios(&groups),
        Commands::Probe { device } => cmd_probe(&device, &config)?,
    }

    Ok(())
}
