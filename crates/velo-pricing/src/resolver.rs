//! Current price level resolution
//!
//! A fold over the record list keeping one "best so far" record per
//! category. Replacement requires a strictly later `takes_effect_on`, so on
//! equal dates the first-seen record wins; for distinct dates the result is
//! independent of input order.

use crate::level::{PriceCategory, PriceLevel};
use chrono::NaiveDate;
use indexmap::IndexMap;

/// Resolve the latest price record per category
///
/// "Latest" is by `takes_effect_on` alone; the caller's clock does not
/// participate. Empty input yields an empty mapping. Pure function, the
/// input is never mutated.
pub fn resolve_current_by_category(
    levels: &[PriceLevel],
) -> IndexMap<PriceCategory, PriceLevel> {
    let mut current: IndexMap<PriceCategory, PriceLevel> = IndexMap::new();

    for level in levels {
        match current.get(&level.category) {
            Some(existing) if level.takes_effect_on <= existing.takes_effect_on => {}
            _ => {
                current.insert(level.category, level.clone());
            }
        }
    }

    current
}

/// Resolve the latest price record per category that is already in effect
///
/// Records dated after `today` are ignored before taking the latest. Use
/// this variant when a future-dated record must not win.
pub fn resolve_effective_by_category(
    levels: &[PriceLevel],
    today: NaiveDate,
) -> IndexMap<PriceCategory, PriceLevel> {
    let mut current: IndexMap<PriceCategory, PriceLevel> = IndexMap::new();

    for level in levels {
        if level.takes_effect_on > today {
            continue;
        }
        match current.get(&level.category) {
            Some(existing) if level.takes_effect_on <= existing.takes_effect_on => {}
            _ => {
                current.insert(level.category, level.clone());
            }
        }
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn level(category: PriceCategory, date: (i32, u32, u32), amount: f64) -> PriceLevel {
        PriceLevel {
            category,
            takes_effect_on: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            amount,
            currency: "CZK".to_string(),
        }
    }

    #[test]
    fn test_latest_record_wins_within_category() {
        let levels = vec![
            level(PriceCategory::Basic, (2024, 1, 1), 299.0),
            level(PriceCategory::Basic, (2024, 6, 1), 399.0),
        ];

        let current = resolve_current_by_category(&levels);
        assert_eq!(current.len(), 1);
        assert_eq!(current[&PriceCategory::Basic].amount, 399.0);
    }

    #[test]
    fn test_empty_input_yields_empty_mapping() {
        assert!(resolve_current_by_category(&[]).is_empty());
    }

    #[test]
    fn test_one_entry_per_category() {
        let levels = vec![
            level(PriceCategory::Basic, (2024, 1, 1), 299.0),
            level(PriceCategory::Company, (2024, 1, 1), 599.0),
            level(PriceCategory::Basic, (2024, 6, 1), 399.0),
            level(PriceCategory::Company, (2023, 12, 1), 549.0),
        ];

        let current = resolve_current_by_category(&levels);
        assert_eq!(current.len(), 2);
        assert_eq!(current[&PriceCategory::Basic].amount, 399.0);
        assert_eq!(current[&PriceCategory::Company].amount, 599.0);
    }

    #[test]
    fn test_tie_keeps_first_seen_record() {
        let levels = vec![
            level(PriceCategory::Basic, (2024, 6, 1), 399.0),
            level(PriceCategory::Basic, (2024, 6, 1), 450.0),
        ];

        let current = resolve_current_by_category(&levels);
        assert_eq!(current[&PriceCategory::Basic].amount, 399.0);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let levels = vec![
            level(PriceCategory::Basic, (2024, 6, 1), 399.0),
            level(PriceCategory::Basic, (2024, 1, 1), 299.0),
        ];
        let snapshot = levels.clone();

        let _ = resolve_current_by_category(&levels);
        assert_eq!(levels, snapshot);
    }

    #[test]
    fn test_effective_ignores_future_records() {
        let levels = vec![
            level(PriceCategory::Basic, (2024, 1, 1), 299.0),
            level(PriceCategory::Basic, (2024, 6, 1), 399.0),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let effective = resolve_effective_by_category(&levels, today);
        assert_eq!(effective[&PriceCategory::Basic].amount, 299.0);

        // The unfiltered variant still picks the future-dated record
        let current = resolve_current_by_category(&levels);
        assert_eq!(current[&PriceCategory::Basic].amount, 399.0);
    }

    #[test]
    fn test_effective_with_no_in_effect_record_is_empty() {
        let levels = vec![level(PriceCategory::Basic, (2025, 1, 1), 499.0)];
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        assert!(resolve_effective_by_category(&levels, today).is_empty());
    }

    fn arb_category() -> impl Strategy<Value = PriceCategory> {
        prop_oneof![
            Just(PriceCategory::Basic),
            Just(PriceCategory::Company),
            Just(PriceCategory::School),
        ]
    }

    fn arb_level() -> impl Strategy<Value = PriceLevel> {
        (arb_category(), 0i64..4000, 0u32..100_000).prop_map(|(category, day, amount)| {
            PriceLevel {
                category,
                takes_effect_on: NaiveDate::from_ymd_opt(2015, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(day as u64))
                    .unwrap(),
                amount: f64::from(amount),
                currency: "CZK".to_string(),
            }
        })
    }

    proptest! {
        #[test]
        fn prop_at_most_one_entry_per_category(levels in prop::collection::vec(arb_level(), 0..32)) {
            let current = resolve_current_by_category(&levels);
            let categories: std::collections::HashSet<_> =
                levels.iter().map(|l| l.category).collect();
            prop_assert_eq!(current.len(), categories.len());
        }

        #[test]
        fn prop_result_is_order_independent(
            levels in prop::collection::vec(arb_level(), 0..16),
            rotation in 0usize..16,
        ) {
            // Distinct dates per category keep the comparison unambiguous
            let mut seen = std::collections::HashSet::new();
            let levels: Vec<_> = levels
                .into_iter()
                .filter(|l| seen.insert((l.category, l.takes_effect_on)))
                .collect();

            let mut rotated = levels.clone();
            if !rotated.is_empty() {
                let len = rotated.len();
                rotated.rotate_left(rotation % len);
            }

            let a = resolve_current_by_category(&levels);
            let b = resolve_current_by_category(&rotated);

            prop_assert_eq!(a.len(), b.len());
            for (category, record) in &a {
                prop_assert_eq!(&b[category], record);
            }
        }

        #[test]
        fn prop_effective_never_returns_future_records(
            levels in prop::collection::vec(arb_level(), 0..32),
            day in 0i64..4000,
        ) {
            let today = NaiveDate::from_ymd_opt(2015, 1, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(day as u64))
                .unwrap();

            for record in resolve_effective_by_category(&levels, today).values() {
                prop_assert!(record.takes_effect_on <= today);
            }
        }
    }
}
