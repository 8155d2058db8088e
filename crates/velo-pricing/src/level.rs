//! Price level records and raw API payload parsing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use velo_core::{VeloError, VeloResult};

/// Pricing category a record applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceCategory {
    /// Individual participant price
    Basic,
    /// Company-paid participant price
    Company,
    /// School team price
    School,
}

impl PriceCategory {
    /// Get the string form used by the pricing API
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCategory::Basic => "basic",
            PriceCategory::Company => "company",
            PriceCategory::School => "school",
        }
    }
}

impl std::fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One time-bounded price record
///
/// Immutable once parsed; the resolver only reads `category` and
/// `takes_effect_on`, the remaining fields are opaque to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Category this record prices
    pub category: PriceCategory,
    /// Date from which the price is valid
    pub takes_effect_on: NaiveDate,
    /// Price amount, opaque to the resolver
    pub amount: f64,
    /// ISO currency code, opaque to the resolver
    pub currency: String,
}

/// Wire-shape mirror of a price record as the pricing API returns it
///
/// The date arrives as a string and is validated during conversion to
/// [`PriceLevel`]; a malformed date is a data error surfaced to the caller,
/// never silently coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPriceLevel {
    /// Category tag
    pub category: PriceCategory,
    /// Effective date as `YYYY-MM-DD`
    pub takes_effect_on: String,
    /// Price amount
    pub amount: f64,
    /// ISO currency code
    pub currency: String,
}

impl PriceLevel {
    /// Parse a raw API record into a validated price level
    pub fn from_raw(raw: &RawPriceLevel) -> VeloResult<Self> {
        let takes_effect_on =
            NaiveDate::parse_from_str(&raw.takes_effect_on, "%Y-%m-%d").map_err(|err| {
                VeloError::invalid_date(format!(
                    "takes_effect_on {:?}: {err}",
                    raw.takes_effect_on
                ))
            })?;

        Ok(Self {
            category: raw.category,
            takes_effect_on,
            amount: raw.amount,
            currency: raw.currency.clone(),
        })
    }
}

impl TryFrom<RawPriceLevel> for PriceLevel {
    type Error = VeloError;

    fn try_from(raw: RawPriceLevel) -> VeloResult<Self> {
        Self::from_raw(&raw)
    }
}

/// Parse a batch of raw records, failing on the first malformed date
pub fn parse_price_levels(raw: &[RawPriceLevel]) -> VeloResult<Vec<PriceLevel>> {
    raw.iter().map(PriceLevel::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(category: PriceCategory, date: &str) -> RawPriceLevel {
        RawPriceLevel {
            category,
            takes_effect_on: date.to_string(),
            amount: 399.0,
            currency: "CZK".to_string(),
        }
    }

    #[test]
    fn test_parse_valid_record() {
        let level = PriceLevel::from_raw(&raw(PriceCategory::Basic, "2024-06-01")).unwrap();
        assert_eq!(level.category, PriceCategory::Basic);
        assert_eq!(
            level.takes_effect_on,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let err = PriceLevel::from_raw(&raw(PriceCategory::Basic, "01.06.2024")).unwrap_err();
        assert!(matches!(err, VeloError::InvalidDate { .. }));
        assert!(err.to_string().contains("01.06.2024"));

        // Out-of-range calendar dates fail the same way
        let err = PriceLevel::from_raw(&raw(PriceCategory::Basic, "2024-02-30")).unwrap_err();
        assert!(matches!(err, VeloError::InvalidDate { .. }));
    }

    #[test]
    fn test_batch_parse_surfaces_first_error() {
        let batch = vec![
            raw(PriceCategory::Basic, "2024-01-01"),
            raw(PriceCategory::Company, "not-a-date"),
        ];
        assert!(parse_price_levels(&batch).is_err());

        let batch = vec![
            raw(PriceCategory::Basic, "2024-01-01"),
            raw(PriceCategory::Company, "2024-03-01"),
        ];
        assert_eq!(parse_price_levels(&batch).unwrap().len(), 2);
    }

    #[test]
    fn test_raw_record_deserializes_from_api_json() {
        let json = r#"{
            "category": "company",
            "takes_effect_on": "2025-02-01",
            "amount": 599.0,
            "currency": "CZK"
        }"#;
        let raw: RawPriceLevel = serde_json::from_str(json).unwrap();
        assert_eq!(raw.category, PriceCategory::Company);

        let level = PriceLevel::try_from(raw).unwrap();
        assert_eq!(
            level.takes_effect_on,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
    }
}
