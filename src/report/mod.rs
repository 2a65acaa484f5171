//! Read-only report view over a loaded delivery-order table
//!
//! Filters and aggregates are purely derived; nothing here writes back to
//! the store. The filter dimensions mirror the report page: month labels,
//! exact client, inclusive order-date range.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use crate::core::record::{COLUMNS, DeliveryOrder};

/// Independent, composable filters for the report view.
///
/// Each dimension is optional; an unset dimension passes every row. Rows
/// with an unset `order_date` drop out whenever a date range is applied.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    months: Option<Vec<String>>,
    client: Option<String>,
    date_range: Option<(NaiveDate, NaiveDate)>,
}

impl ReportFilter {
    /// A filter that passes every row
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only rows whose month label is in `months`
    pub fn months<I, S>(mut self, months: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.months = Some(months.into_iter().map(Into::into).collect());
        self
    }

    /// Keep only rows for exactly this client
    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Keep only rows whose order date falls in `[from, to]` (inclusive)
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_range = Some((from, to));
        self
    }

    /// Apply the filter, borrowing the matching rows in table order
    pub fn apply<'a>(&self, rows: &'a [DeliveryOrder]) -> Vec<&'a DeliveryOrder> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }

    fn matches(&self, row: &DeliveryOrder) -> bool {
        if let Some(months) = &self.months {
            if !months.iter().any(|m| m == &row.month) {
                return false;
            }
        }
        if let Some(client) = &self.client {
            if &row.client != client {
                return false;
            }
        }
        if let Some((from, to)) = self.date_range {
            match row.order_date {
                Some(date) => {
                    if date < from || date > to {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

/// Aggregates over a (usually filtered) set of rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    /// Sum of delivered quantities; unset quantities count as zero
    pub total_liters: f64,
    /// Number of delivery notes in the set
    pub delivery_count: usize,
}

impl ReportSummary {
    /// Aggregate `rows`
    pub fn of<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a DeliveryOrder>,
    {
        let mut total_liters = 0.0;
        let mut delivery_count = 0;
        for row in rows {
            total_liters += row.quantity();
            delivery_count += 1;
        }
        Self {
            total_liters,
            delivery_count,
        }
    }
}

/// Sorted distinct month labels present in `rows`, for the month filter
pub fn month_labels(rows: &[DeliveryOrder]) -> Vec<String> {
    distinct(rows.iter().map(|r| r.month.as_str()))
}

/// Sorted distinct clients present in `rows`, for the client filter
pub fn clients(rows: &[DeliveryOrder]) -> Vec<String> {
    distinct(rows.iter().map(|r| r.client.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}

/// Export a filtered view as CSV with the canonical header (the report
/// page's download)
pub fn write_csv<W: Write>(rows: &[&DeliveryOrder], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(COLUMNS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(month: &str, client: &str, date: Option<NaiveDate>, qty: f64) -> DeliveryOrder {
        let base = date.unwrap_or_else(|| NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        let mut order = DeliveryOrder::new_for_date("010525-01", base);
        order.month = month.to_string();
        order.client = client.to_string();
        order.order_date = date;
        order.quantity_liters = Some(qty);
        order
    }

    #[test]
    fn test_unset_filter_passes_everything() {
        let rows = vec![row("May", "A", None, 1.0), row("June", "B", None, 2.0)];
        assert_eq!(ReportFilter::new().apply(&rows).len(), 2);
    }

    #[test]
    fn test_date_range_excludes_unset_dates() {
        let in_range = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let rows = vec![row("May", "A", Some(in_range), 1.0), row("May", "A", None, 2.0)];
        let filter = ReportFilter::new().date_range(
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
        );
        let filtered = filter.apply(&rows);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].order_date, Some(in_range));
    }

    #[test]
    fn test_distinct_values_are_sorted_and_deduplicated() {
        let rows = vec![
            row("May", "Beta", None, 0.0),
            row("April", "Alpha", None, 0.0),
            row("May", "", None, 0.0),
        ];
        assert_eq!(month_labels(&rows), vec!["April", "May"]);
        assert_eq!(clients(&rows), vec!["Alpha", "Beta"]);
    }
}
