//! Delivery-note rendering seam
//!
//! The store does not render documents itself; a renderer implementation
//! (PDF or otherwise) plugs in behind [`DeliveryNoteRenderer`] and
//! receives one fully resolved record plus the company identity and an
//! optional header image. The artifact is keyed by a filesystem-safe
//! transform of the DO number.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::CompanyIdentity;
use crate::core::record::DeliveryOrder;

/// Everything a renderer needs for one delivery note
#[derive(Debug, Clone, Copy)]
pub struct DeliveryNote<'a> {
    /// The saved record to render
    pub order: &'a DeliveryOrder,
    /// Company identity for the document header and footer
    pub identity: &'a CompanyIdentity,
    /// Header/logo image, when one is installed
    pub header_image: Option<&'a Path>,
}

/// Renderer collaborator interface.
///
/// Implementations own the page layout entirely; the store side only
/// guarantees the inputs. Renderers have no feedback channel into the
/// store.
pub trait DeliveryNoteRenderer {
    /// Produce the document artifact for `note` under `out_dir` and return
    /// its path. The file stem must be
    /// [`document_file_stem`]`(note.order.do_number)`.
    fn render(&self, note: &DeliveryNote<'_>, out_dir: &Path) -> Result<PathBuf>;
}

/// Filesystem-safe transform of a DO number, used as the artifact's file
/// stem: alphanumerics, `-` and `_` survive, everything else is dropped.
pub fn document_file_stem(do_number: &str) -> String {
    do_number
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Quantity display used on delivery notes: rounded to whole liters with
/// `.` as the thousands separator (`16000` → `"16.000"`).
///
/// Ties round to even, matching how the production documents have always
/// displayed half-liter values.
pub fn format_liters(quantity: f64) -> String {
    let rounded = quantity.round_ties_even() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem_keeps_key_characters() {
        assert_eq!(document_file_stem("010525-01"), "010525-01");
        assert_eq!(document_file_stem("0105/25:*01 "), "01052501");
        assert_eq!(document_file_stem("a_b-c"), "a_b-c");
    }

    #[test]
    fn test_format_liters_groups_with_dots() {
        assert_eq!(format_liters(0.0), "0");
        assert_eq!(format_liters(950.0), "950");
        assert_eq!(format_liters(16000.0), "16.000");
        assert_eq!(format_liters(1234567.0), "1.234.567");
    }

    #[test]
    fn test_format_liters_rounds_to_whole_liters() {
        assert_eq!(format_liters(999.6), "1.000");
        assert_eq!(format_liters(16000.4), "16.000");
    }

    #[test]
    fn test_format_liters_rounds_ties_to_even() {
        assert_eq!(format_liters(16000.5), "16.000");
        assert_eq!(format_liters(16001.5), "16.002");
        assert_eq!(format_liters(0.5), "0");
    }
}
