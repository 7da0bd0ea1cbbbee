use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Hour-granularity UTC stamp identifying a fetch batch (`2025-04-05 10`).
pub fn batch_stamp() -> String {
    format_now(format_description!("[year]-[month]-[day] [hour]"))
}

/// Second-granularity UTC stamp embedded in export file names
/// (`2025-04-05_10-30-22`).
pub fn file_stamp() -> String {
    format_now(format_description!(
        "[year]-[month]-[day]_[hour]-[minute]-[second]"
    ))
}

fn format_now(format: &[BorrowedFormatItem<'_>]) -> String {
    OffsetDateTime::now_utc()
        .format(format)
        .expect("date components always format")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_stamp_has_hour_granularity() {
        let stamp = batch_stamp();
        // "YYYY-MM-DD HH"
        assert_eq!(stamp.len(), 13, "unexpected stamp: {stamp}");
        assert_eq!(&stamp[10..11], " ");
    }

    #[test]
    fn file_stamp_has_second_granularity() {
        let stamp = file_stamp();
        // "YYYY-MM-DD_HH-MM-SS"
        assert_eq!(stamp.len(), 19, "unexpected stamp: {stamp}");
        assert!(!stamp.contains(' '), "file stamp must be path-safe: {stamp}");
    }
}
