mod app;
mod cli;
mod config;
mod error;
mod host;
mod pool;
mod version;

use clap::Parser;
use log::error;

use app::SnapshotOptions;
use cli::{Cli, Commands};
use config::Config;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .format_target(false)
        .init();

    let result = match &cli.command {
        Commands::New {
            dry_run,
            no_archive,
        } => app::create_snapshot(&SnapshotOptions {
            dry_run: *dry_run,
            archive: config.archive && !*no_archive,
            archive_folder: config.archive_folder.clone(),
        }),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
