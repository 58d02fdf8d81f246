//! Lenient deserializers for the fields that arrive malformed in practice.
//!
//! Snapshots come from local storage and hand-edited imports, so a numeric
//! field may be a string (or garbage) and a date may be any shape of invalid.
//! The contract is per-field degradation: a bad amount decodes to zero, a bad
//! date to `None`. A single broken record must never fail a whole snapshot.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Deserializes a `Decimal` from a number or numeric string, substituting
/// `Decimal::ZERO` for anything that does not parse.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer) {
        Ok(Raw::Number(value)) => value,
        Ok(Raw::Text(text)) => text.trim().parse().unwrap_or(Decimal::ZERO),
        Ok(Raw::Other(_)) | Err(_) => Decimal::ZERO,
    })
}

/// Deserializes an ISO `YYYY-MM-DD` date, substituting `None` for anything
/// that does not parse.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer) {
        Ok(Raw::Text(text)) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok(),
        Ok(Raw::Other(_)) | Err(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "lenient_decimal")]
        amount: Decimal,
        #[serde(default, deserialize_with = "lenient_date")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let h: Holder = serde_json::from_str(r#"{"amount": 1250.5, "date": "2023-09-18"}"#).unwrap();
        assert_eq!(h.amount, dec!(1250.5));
        assert_eq!(h.date, Some(NaiveDate::from_ymd_opt(2023, 9, 18).unwrap()));

        let h: Holder = serde_json::from_str(r#"{"amount": " 750 "}"#).unwrap();
        assert_eq!(h.amount, dec!(750));
    }

    #[test]
    fn garbage_degrades_instead_of_failing() {
        let h: Holder =
            serde_json::from_str(r#"{"amount": "twelve", "date": "18/09/2023"}"#).unwrap();
        assert_eq!(h.amount, Decimal::ZERO);
        assert_eq!(h.date, None);

        let h: Holder = serde_json::from_str(r#"{"amount": [1], "date": {"y": 2023}}"#).unwrap();
        assert_eq!(h.amount, Decimal::ZERO);
        assert_eq!(h.date, None);
    }

    #[test]
    fn null_and_missing_fields_default() {
        let h: Holder = serde_json::from_str(r#"{"amount": null, "date": null}"#).unwrap();
        assert_eq!(h.amount, Decimal::ZERO);
        assert_eq!(h.date, None);

        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.amount, Decimal::ZERO);
        assert_eq!(h.date, None);
    }
}
