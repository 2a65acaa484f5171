//! Sequential DO-number generation
//!
//! A DO number is `DDMMYY-NN`: the date stamp of the day the number was
//! *generated* plus a per-day counter. Generation is a pure scan over the
//! existing keys — it never reserves the number, so calling it twice
//! without an intervening save returns the same value both times.

use chrono::NaiveDate;

/// The "no selection" placeholder the form UI shows in its recall dropdown.
///
/// Kept verbatim from the production UI so existing front-ends and stored
/// selections keep working; both mutating store operations reject it as a
/// key.
pub const NEW_DO_PLACEHOLDER: &str = "--- Buat DO Baru ---";

/// `DDMMYY` stamp embedded in a generated DO number
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%d%m%y").to_string()
}

/// Generate the next DO number for `today` given every existing key.
///
/// Keys whose prefix matches today's stamp are scanned; the suffix after
/// the last `-` is parsed as an integer and suffixes that fail to parse
/// are ignored. The result is `<stamp>-<max + 1>`, zero-padded to two
/// digits, or `<stamp>-01` when today has no keys yet.
pub fn next_do_number<'a, I>(existing: I, today: NaiveDate) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let stamp = date_stamp(today);
    let max = existing
        .into_iter()
        .filter(|key| key.starts_with(&stamp))
        .filter_map(|key| key.rsplit('-').next())
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}-{:02}", stamp, max + 1)
}

/// Whether a key may be used for upsert/delete: non-empty and not the
/// "no selection" placeholder.
///
/// Slightly stricter than "non-empty": a whitespace-only key is rejected
/// too, since it could never have come out of the generator and would
/// produce an unaddressable row.
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty() && key != NEW_DO_PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn test_date_stamp_is_ddmmyy() {
        assert_eq!(date_stamp(may_first()), "010525");
        assert_eq!(
            date_stamp(NaiveDate::from_ymd_opt(2026, 12, 3).unwrap()),
            "031226"
        );
    }

    #[test]
    fn test_first_number_of_the_day() {
        assert_eq!(next_do_number(std::iter::empty(), may_first()), "010525-01");
    }

    #[test]
    fn test_increments_past_the_max_suffix() {
        let existing = ["010525-01", "010525-03", "010525-02"];
        assert_eq!(next_do_number(existing, may_first()), "010525-04");
    }

    #[test]
    fn test_ignores_keys_from_other_days() {
        let existing = ["300425-07", "020525-01"];
        assert_eq!(next_do_number(existing, may_first()), "010525-01");
    }

    #[test]
    fn test_ignores_unparseable_suffixes() {
        let existing = ["010525-xx", "010525-", "010525-02"];
        assert_eq!(next_do_number(existing, may_first()), "010525-03");
    }

    #[test]
    fn test_grows_past_two_digits_without_truncation() {
        let existing = ["010525-09", "010525-99"];
        assert_eq!(next_do_number(existing, may_first()), "010525-100");
    }

    #[test]
    fn test_idempotent_without_intervening_save() {
        let existing = ["010525-05"];
        let first = next_do_number(existing, may_first());
        let second = next_do_number(existing, may_first());
        assert_eq!(first, second);
        assert_eq!(first, "010525-06");
    }

    #[test]
    fn test_key_validity() {
        assert!(is_valid_key("010525-01"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("   "));
        assert!(!is_valid_key(NEW_DO_PLACEHOLDER));
    }
}
