//! The `fetch` command: poll the price API and save the batch as CSV.

use std::time::Duration;

use aodata_core::{CsvExporter, FetchPlan, FetcherConfig, ItemId, PriceFetcher, Quality};

use crate::cli::{Cli, FetchArgs};
use crate::error::CliError;

/// Rows echoed to the terminal after a fetch.
const SUMMARY_ROWS: usize = 5;

pub async fn run(cli: &Cli, args: &FetchArgs) -> Result<(), CliError> {
    let plan = build_plan(args)?;
    if plan.is_empty() {
        return Err(CliError::Command(String::from(
            "nothing to fetch: items, cities, and qualities must all be non-empty",
        )));
    }

    let mut config = FetcherConfig::from_env();
    config.request_timeout_ms = cli.timeout_ms;
    config.request_delay = Duration::from_millis(cli.delay_ms);

    eprintln!(
        "Fetching {} item(s) in {} city(ies) at {} quality tier(s): {} requests...",
        plan.items.len(),
        plan.cities.len(),
        plan.qualities.len(),
        plan.tuple_count()
    );

    let fetcher = PriceFetcher::new(config);
    let batch = fetcher.fetch(&plan).await;

    eprintln!(
        "✓ Fetched {} record(s), {} tuple(s) skipped",
        batch.records.len(),
        batch.skipped
    );
    for record in batch.records.iter().take(SUMMARY_ROWS) {
        eprintln!(
            "  {} | {} | Q{} | sell min: {} | buy max: {}",
            record.item_id,
            record.city,
            record.quality,
            record.sell_price_min.as_csv_field(),
            record.buy_price_max.as_csv_field()
        );
    }

    if args.no_save {
        eprintln!("ℹ --no-save given, not writing a file");
        return Ok(());
    }

    let exporter = CsvExporter::new(&args.output_dir);
    let path = exporter.export(&batch.records, &args.subject)?;
    eprintln!("✓ Market data saved to {}", path.display());

    Ok(())
}

/// Split a comma-separated list, dropping empty segments.
fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

fn build_plan(args: &FetchArgs) -> Result<FetchPlan, CliError> {
    let items = split_list(&args.items)
        .iter()
        .map(|raw| ItemId::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let cities = split_list(&args.cities);

    let qualities = split_list(&args.qualities)
        .iter()
        .map(|raw| Quality::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FetchPlan::new(items, cities, qualities))
}
