mod cli;

use clap::Parser;
use cli::{Commands, ConfigCommands};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "comment-remover")]
#[command(
    version,
    about = "Remove comments from source files without touching string literals"
)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Strip(args) => cli::strip::run_strip(&args)?,
        Commands::Languages { format } => cli::languages::list_languages(format.resolve())?,
        Commands::Detect { path, format } => {
            cli::detect::show_detection(&path, format.resolve())?
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Path => cli::config_cmd::show_path()?,
            ConfigCommands::Get { key } => cli::config_cmd::get_config(&key)?,
            ConfigCommands::Set { key, value } => cli::config_cmd::set_config(&key, &value)?,
        },
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
