//! CSV export of price records to timestamped files.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::{debug, info};

use crate::domain::{file_stamp, PriceRecord};
use crate::error::ExportError;

/// Column order of the exported file. Fixed contract: exactly these twelve
/// columns, in this order.
pub const COLUMNS: [&str; 12] = [
    "item_id",
    "city",
    "quality",
    "sell_price_min",
    "sell_price_min_date",
    "sell_price_max",
    "sell_price_max_date",
    "buy_price_min",
    "buy_price_min_date",
    "buy_price_max",
    "buy_price_max_date",
    "fetch_time",
];

/// Most rows included in the informational preview.
const PREVIEW_ROWS: usize = 10;

/// Writes price records to timestamped CSV files under an output directory.
///
/// The directory is created on demand; the second-granularity stamp in the
/// file name keeps repeated exports from overwriting one another.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `records` to `{subject}_{stamp}.csv`, stamped with the current
    /// UTC time, and return the resolved path.
    ///
    /// An empty slice still produces a header-only file.
    pub fn export(&self, records: &[PriceRecord], subject: &str) -> Result<PathBuf, ExportError> {
        self.export_stamped(records, subject, &file_stamp())
    }

    /// Write `records` to `{subject}_{stamp}.csv` with an explicit stamp.
    pub fn export_stamped(
        &self,
        records: &[PriceRecord],
        subject: &str,
        stamp: &str,
    ) -> Result<PathBuf, ExportError> {
        preview(records);

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{subject}_{stamp}.csv"));
        debug!("creating export file: {}", path.display());

        let file = File::create(&path)?;
        let mut writer = Writer::from_writer(BufWriter::new(file));

        writer.write_record(COLUMNS)?;
        for record in records {
            writer.write_record(row(record))?;
        }
        writer.flush()?;

        info!(
            "market data saved to {} ({} rows)",
            path.display(),
            records.len()
        );
        Ok(path)
    }
}

/// Log a random sample of at most [`PREVIEW_ROWS`] rows before writing.
fn preview(records: &[PriceRecord]) {
    if records.is_empty() {
        return;
    }

    let mut indices: Vec<usize> = (0..records.len()).collect();
    fastrand::shuffle(&mut indices);
    indices.truncate(PREVIEW_ROWS);
    indices.sort_unstable();

    for index in indices {
        let record = &records[index];
        info!(
            "{} | {} | Q{} | sell min: {} | buy max: {}",
            record.item_id,
            record.city,
            record.quality,
            record.sell_price_min.as_csv_field(),
            record.buy_price_max.as_csv_field()
        );
    }
}

fn row(record: &PriceRecord) -> [String; 12] {
    [
        record.item_id.to_string(),
        record.city.clone(),
        record.quality.to_string(),
        record.sell_price_min.as_csv_field(),
        date_field(&record.sell_price_min_date),
        record.sell_price_max.as_csv_field(),
        date_field(&record.sell_price_max_date),
        record.buy_price_min.as_csv_field(),
        date_field(&record.buy_price_min_date),
        record.buy_price_max.as_csv_field(),
        date_field(&record.buy_price_max_date),
        record.fetch_time.clone(),
    ]
}

fn date_field(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, PriceEntry, Quality};

    fn sample_record() -> PriceRecord {
        PriceRecord::quoted(
            ItemId::parse("T4_MAIN_CURSEDSTAFF").expect("item id"),
            "Thetford",
            Quality::new(0).expect("quality"),
            "2025-01-01 10",
            PriceEntry {
                sell_price_min: Some(100),
                sell_price_min_date: Some(String::from("2025-01-01")),
                buy_price_max: Some(90),
                ..PriceEntry::default()
            },
        )
    }

    #[test]
    fn row_follows_declared_column_order() {
        let fields = row(&sample_record());

        assert_eq!(fields.len(), COLUMNS.len());
        assert_eq!(fields[0], "T4_MAIN_CURSEDSTAFF");
        assert_eq!(fields[1], "Thetford");
        assert_eq!(fields[2], "0");
        assert_eq!(fields[3], "100");
        assert_eq!(fields[4], "2025-01-01");
        assert_eq!(fields[5], ""); // sell_price_max absent upstream
        assert_eq!(fields[9], "90");
        assert_eq!(fields[11], "2025-01-01 10");
    }
}
