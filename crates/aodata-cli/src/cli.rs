//! CLI argument definitions for aodata.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fetch` | Poll the price API and save the quotes as timestamped CSV |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--timeout-ms` | `5000` | Per-request transport timeout in ms |
//! | `--delay-ms` | `1500` | Pause between consecutive API requests in ms |
//!
//! # Examples
//!
//! ```bash
//! # Fetch the default cursed staff tiers across all royal cities
//! aodata fetch
//!
//! # One item, one city, normal quality only
//! aodata fetch --items T4_BAG --cities Caerleon --qualities 0 --subject bags
//!
//! # Preview without writing a file
//! aodata fetch --no-save
//! ```

use clap::{Args, Parser, Subcommand};

/// Albion Online market price snapshot tool.
///
/// Polls the Albion Online Data Project price API for the requested
/// item/city/quality combinations and saves the quotes as a timestamped
/// CSV file.
#[derive(Debug, Parser)]
#[command(
    name = "aodata",
    author,
    version,
    about = "Albion Online market price snapshots"
)]
pub struct Cli {
    /// Per-request transport timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// Pause between consecutive API requests in milliseconds.
    ///
    /// The upstream API is shared infrastructure; keep this at or above the
    /// default unless you run your own mirror.
    #[arg(long, global = true, default_value_t = 1_500)]
    pub delay_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch current price quotes and save them as a timestamped CSV file.
    ///
    /// One request is issued per (item, city, quality) combination, in
    /// order, with a fixed pause in between.
    ///
    /// # Examples
    ///
    ///   aodata fetch
    ///   aodata fetch --items T4_BAG,T5_BAG --cities Martlock --qualities 1,2
    Fetch(FetchArgs),
}

/// Arguments for the `fetch` command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Comma-separated tier-prefixed item ids.
    #[arg(
        long,
        default_value = "T4_MAIN_CURSEDSTAFF,T5_MAIN_CURSEDSTAFF,T6_MAIN_CURSEDSTAFF"
    )]
    pub items: String,

    /// Comma-separated trading city names.
    #[arg(
        long,
        default_value = "Thetford,Martlock,Lymhurst,Bridgewatch,Fort Sterling,Caerleon,Black Market"
    )]
    pub cities: String,

    /// Comma-separated quality tiers (0-5).
    #[arg(long, default_value = "0,1,2,3,4,5")]
    pub qualities: String,

    /// Stem of the output file name.
    #[arg(long, default_value = "cursed_staff")]
    pub subject: String,

    /// Directory the CSV file is written to (created on demand).
    #[arg(long, default_value = "output")]
    pub output_dir: String,

    /// Fetch and preview without writing a file.
    #[arg(long, default_value_t = false)]
    pub no_save: bool,
}
