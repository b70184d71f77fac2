//! Budget Allocation
//!
//! Splits a monthly budget across asset classes. Each class is rounded on
//! its own, so the amounts may not add up to the rounded budget (off by at
//! most one unit per class beyond the first).

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::model::{AssetMix, PerAsset, RiskProfile};

/// Whole-unit amount per asset class
pub type Allocations = PerAsset<Decimal>;

/// Budget splitter bound to a risk profile
#[derive(Clone, Copy, Debug)]
pub struct AllocationStrategy {
    profile: RiskProfile,
}

impl AllocationStrategy {
    pub const fn new(profile: RiskProfile) -> Self {
        Self { profile }
    }

    pub const fn mix(&self) -> AssetMix {
        self.profile.mix()
    }

    pub fn allocate(&self, budget: Decimal) -> Allocations {
        allocate(budget, &self.mix())
    }
}

/// `round(budget * weight)` for every class. Negative budgets are not
/// rejected and produce negative amounts.
pub fn allocate(budget: Decimal, mix: &AssetMix) -> Allocations {
    PerAsset::from_fn(|class| round_amount(budget * mix.weight(class)))
}

/// Round half away from zero to a whole unit
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Coerce a loosely typed budget into a number.
///
/// Accepts JSON numbers, numeric strings (plain or scientific) and booleans.
/// Everything else, including blank or unparsable strings, is zero.
pub fn coerce_budget(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(Decimal::from)
            .or_else(|| n.as_f64().and_then(Decimal::from_f64))
            .unwrap_or_default(),
        Value::String(s) => {
            let s = s.trim();
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .unwrap_or_default()
        }
        Value::Bool(b) => Decimal::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::model::AssetClass;

    #[test]
    fn test_high_risk_thousand() {
        let allocations = AllocationStrategy::new(RiskProfile::High).allocate(dec!(1000));
        assert_eq!(allocations.stocks, dec!(450));
        assert_eq!(allocations.mutual_funds, dec!(200));
        assert_eq!(allocations.etfs, dec!(150));
        assert_eq!(allocations.crypto, dec!(150));
        assert_eq!(allocations.real_estate, dec!(50));
    }

    #[test]
    fn test_each_amount_is_rounded_product() {
        let budgets = [
            dec!(0),
            dec!(1),
            dec!(7),
            dec!(33.3),
            dec!(99),
            dec!(1234.56),
            dec!(50001),
            dec!(100000000000000000000),
            dec!(12345678901234567890123.45),
        ];
        for profile in RiskProfile::ALL {
            let mix = profile.mix();
            for budget in budgets {
                let allocations = allocate(budget, &mix);
                for class in AssetClass::ALL {
                    let expected = (budget * mix.weight(class))
                        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
                    assert_eq!(*allocations.get(class), expected);
                }

                let sum: Decimal = allocations.iter().map(|(_, a)| *a).sum();
                let drift = (sum - round_amount(budget)).abs();
                assert!(drift <= dec!(4), "{profile} @ {budget}: drift {drift}");
            }
        }
    }

    #[test]
    fn test_rounding_slack_is_kept() {
        // 0.35*10 + 0.30*10 + ... rounds per class: 4 + 3 + 2 + 1 + 1 = 11
        let allocations = allocate(dec!(10), &RiskProfile::Medium.mix());
        let sum: Decimal = allocations.iter().map(|(_, a)| *a).sum();
        assert_eq!(sum, dec!(11));
    }

    #[test]
    fn test_zero_budget() {
        let allocations = allocate(Decimal::ZERO, &RiskProfile::High.mix());
        assert!(allocations.iter().all(|(_, a)| a.is_zero()));
    }

    #[test]
    fn test_negative_budget_propagates() {
        let allocations = allocate(dec!(-100), &RiskProfile::Medium.mix());
        assert_eq!(allocations.stocks, dec!(-35));
        assert_eq!(allocations.crypto, dec!(-5));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_amount(dec!(2.5)), dec!(3));
        assert_eq!(round_amount(dec!(-2.5)), dec!(-3));
        assert_eq!(round_amount(dec!(2.49)), dec!(2));
    }

    #[test]
    fn test_budget_beyond_machine_integers() {
        let allocations = allocate(dec!(100000000000000000000), &RiskProfile::High.mix());
        assert_eq!(allocations.stocks, dec!(45000000000000000000));
        assert_eq!(allocations.mutual_funds, dec!(20000000000000000000));
        assert_eq!(allocations.real_estate, dec!(5000000000000000000));

        // Largest representable budget still splits without overflow
        let allocations = allocate(Decimal::MAX, &RiskProfile::Medium.mix());
        assert!(allocations.iter().all(|(_, a)| *a > Decimal::ZERO && *a < Decimal::MAX));
    }

    #[test]
    fn test_coerce_budget() {
        assert_eq!(coerce_budget(&json!(1000)), dec!(1000));
        assert_eq!(coerce_budget(&json!(12.5)), dec!(12.5));
        assert_eq!(coerce_budget(&json!(" 250 ")), dec!(250));
        assert_eq!(coerce_budget(&json!("1e3")), dec!(1000));
        assert_eq!(coerce_budget(&json!("lots")), Decimal::ZERO);
        assert_eq!(coerce_budget(&json!("")), Decimal::ZERO);
        assert_eq!(coerce_budget(&json!(null)), Decimal::ZERO);
        assert_eq!(coerce_budget(&json!([1, 2])), Decimal::ZERO);
        assert_eq!(coerce_budget(&json!(true)), Decimal::ONE);
    }
}
