use clap::Parser;

/// Local console for a synced Stripe warehouse.
#[derive(Debug, Clone, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Drop the warehouse schema, then migrate and backfill from scratch
    #[arg(long)]
    pub nuke: bool,

    /// Re-run migrate and backfill even when the schema looks ready
    #[arg(long)]
    pub resync: bool,
}

impl Cli {
    pub fn forces_sync(&self) -> bool {
        self.nuke || self.resync
    }
}
