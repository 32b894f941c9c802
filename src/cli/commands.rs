//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create a new timeline snapshot
    New {
        /// Compute and print the next version name without changing anything
        #[arg(long)]
        dry_run: bool,

        /// Leave the snapshot in place instead of filing it into the
        /// archive subfolder
        #[arg(long)]
        no_archive: bool,
    },
}
