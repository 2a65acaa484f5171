//! Delivery-order row type and its durable column mapping

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed textual form of dates in the durable table
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fuel description pre-filled on a blank form
pub const DEFAULT_FUEL_TYPE: &str = "Biosolar Industri B40";

/// Transporter pre-filled on a blank form
pub const DEFAULT_TRANSPORTER: &str = "PT. SHA Solo";

/// Canonical column set of the durable table, in header order.
///
/// The order matters: rows are written field-by-field under this header,
/// and a file whose header row differs is rejected on load.
pub const COLUMNS: [&str; 19] = [
    "No",
    "Month",
    "SPO-Letter",
    "NOMOR DO",
    "Date",
    "Source",
    "Transportir",
    "Client",
    "Site/Discharge Addr Line 1",
    "Site/Discharge Addr Line 2",
    "PO Client",
    "Tgl PO",
    "PO Pertamina",
    "PIC Delivery",
    "Qty",
    "Jenis BBM",
    "Fleet Number",
    "Nama Driver",
    "Keterangan",
];

/// One delivery-order row, uniquely identified by `do_number`.
///
/// Free-text fields use the empty string as their "unset" value — there is
/// no distinct null state for them. Dates and quantity are optional because
/// the durable table is read leniently: a value that fails to parse becomes
/// `None` instead of failing the load.
///
/// Field declaration order mirrors [`COLUMNS`] so that serialized rows line
/// up with the canonical header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOrder {
    /// Display-order counter (`No` column). Monotonically assigned on each
    /// save; not a uniqueness key.
    #[serde(rename = "No", with = "lenient_sequence")]
    pub sequence_id: u64,

    /// Derived month label of `order_date` (e.g. "May"), kept redundantly
    /// for filter convenience.
    #[serde(rename = "Month")]
    pub month: String,

    #[serde(rename = "SPO-Letter")]
    pub spo_letter: String,

    /// Business key, format `DDMMYY-NN`. The date prefix is fixed at the
    /// time the number was generated and is never re-derived from
    /// `order_date`.
    #[serde(rename = "NOMOR DO")]
    pub do_number: String,

    #[serde(rename = "Date", with = "lenient_date")]
    pub order_date: Option<NaiveDate>,

    #[serde(rename = "Source")]
    pub source: String,

    #[serde(rename = "Transportir")]
    pub transporter: String,

    #[serde(rename = "Client")]
    pub client: String,

    #[serde(rename = "Site/Discharge Addr Line 1")]
    pub site_address_1: String,

    #[serde(rename = "Site/Discharge Addr Line 2")]
    pub site_address_2: String,

    #[serde(rename = "PO Client")]
    pub po_client: String,

    #[serde(rename = "Tgl PO", with = "lenient_date")]
    pub po_date: Option<NaiveDate>,

    #[serde(rename = "PO Pertamina")]
    pub po_pertamina: String,

    #[serde(rename = "PIC Delivery")]
    pub pic_delivery: String,

    /// Delivered volume in liters. `None` when the stored value was blank
    /// or non-numeric; aggregation treats that as zero.
    #[serde(rename = "Qty", with = "lenient_quantity")]
    pub quantity_liters: Option<f64>,

    #[serde(rename = "Jenis BBM")]
    pub fuel_type: String,

    #[serde(rename = "Fleet Number")]
    pub fleet_number: String,

    #[serde(rename = "Nama Driver")]
    pub driver: String,

    #[serde(rename = "Keterangan")]
    pub notes: String,
}

impl DeliveryOrder {
    /// Create the blank-form default row for a freshly generated DO number:
    /// today's dates, today's month label, the standard fuel type and
    /// transporter, zero quantity, everything else unset.
    pub fn new_for_date(do_number: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            sequence_id: 0,
            month: month_label(today),
            spo_letter: String::new(),
            do_number: do_number.into(),
            order_date: Some(today),
            source: String::new(),
            transporter: DEFAULT_TRANSPORTER.to_string(),
            client: String::new(),
            site_address_1: String::new(),
            site_address_2: String::new(),
            po_client: String::new(),
            po_date: Some(today),
            po_pertamina: String::new(),
            pic_delivery: String::new(),
            quantity_liters: Some(0.0),
            fuel_type: DEFAULT_FUEL_TYPE.to_string(),
            fleet_number: String::new(),
            driver: String::new(),
            notes: String::new(),
        }
    }

    /// Delivered volume with the unset state collapsed to zero
    pub fn quantity(&self) -> f64 {
        self.quantity_liters.unwrap_or(0.0)
    }
}

/// English month name of a date (e.g. "May"), the display label stored in
/// the `Month` column
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// `Date` / `Tgl PO` columns: `YYYY-MM-DD` out, lenient in.
///
/// Anything that does not parse back as `YYYY-MM-DD` becomes `None` rather
/// than failing the row (ParseDegradation, silent by design).
mod lenient_date {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
    }
}

/// `Qty` column: numeric out, empty when unset, lenient in
mod lenient_quantity {
    use super::*;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(quantity) => serializer.serialize_f64(*quantity),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.trim().parse::<f64>().ok())
    }
}

/// `No` column: integer out, lenient in.
///
/// Spreadsheet round-trips tend to hand the counter back as `3.0`, so the
/// reader accepts a float form and truncates; anything else becomes 0.
mod lenient_sequence {
    use super::*;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<u64>() {
            return Ok(n);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f >= 0.0 => Ok(f as u64),
            _ => Ok(0),
        }
    }
}
