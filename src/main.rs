use anyhow::Result;
use clap::Parser;
use joincode::cli::{handle_codes_command, CodesCmd, CommandStatus};
use joincode::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "joincode")]
#[command(about = "Generate and validate short join codes", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of codes to print
    #[arg(value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Length of generated codes (only 7-character codes pass validation)
    #[arg(short, long, value_name = "N")]
    length: Option<usize>,

    /// Validate CODE instead of generating codes
    #[arg(
        long,
        value_name = "CODE",
        allow_hyphen_values = true,
        conflicts_with_all = ["count", "length"]
    )]
    check: Option<String>,
}

/// Exit status for failures other than an invalid `--check` code
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(CommandStatus::Success) => ExitCode::SUCCESS,
        Ok(CommandStatus::InvalidCode) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<CommandStatus> {

    let (config, config_path) = Config::resolve(cli.config.as_deref())?;

    init_logging(&config.logging.level.to_lowercase(), &config.logging.format)?;

    match &config_path {
        Some(path) => tracing::debug!("Config loaded from: {}", path.display()),
        None => tracing::debug!("No config file found, using defaults"),
    }

    let cmd = match cli.check {
        Some(code) => CodesCmd::Check { code },
        None => CodesCmd::Generate {
            count: cli.count,
            length: cli.length,
        },
    };

    let stdout = std::io::stdout();
    handle_codes_command(cmd, &config, &mut stdout.lock())
}

fn init_logging(level: &str, format: &str) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Logs go to stderr so stdout only ever carries codes
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    Ok(())
}
