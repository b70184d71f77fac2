//! Domain Models
//!
//! Core data types for allocation recommendations.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog;

/// Canonical risk tolerance tier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskProfile {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a risk label. Labels outside the three tiers resolve to `Medium`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// Illustrative annual return band for this tier
    pub const fn expected_returns(self) -> &'static str {
        match self {
            Self::Low => "4-6%/yr",
            Self::Medium => "6-10%/yr",
            Self::High => "10-15%+/yr (volatile)",
        }
    }
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Investment category. Closed set, always iterated in `AssetClass::ALL` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    Stocks,
    MutualFunds,
    Etfs,
    Crypto,
    RealEstate,
}

impl AssetClass {
    pub const ALL: [Self; 5] = [
        Self::Stocks,
        Self::MutualFunds,
        Self::Etfs,
        Self::Crypto,
        Self::RealEstate,
    ];

    /// Wire name used as the JSON key
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::MutualFunds => "mutualFunds",
            Self::Etfs => "etfs",
            Self::Crypto => "crypto",
            Self::RealEstate => "realEstate",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per asset class.
///
/// Serializes as an object keyed by the asset class wire names, in
/// `AssetClass::ALL` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerAsset<T> {
    pub stocks: T,
    pub mutual_funds: T,
    pub etfs: T,
    pub crypto: T,
    pub real_estate: T,
}

impl<T> PerAsset<T> {
    /// Build by evaluating `f` once per class, in canonical order
    pub fn from_fn(mut f: impl FnMut(AssetClass) -> T) -> Self {
        Self {
            stocks: f(AssetClass::Stocks),
            mutual_funds: f(AssetClass::MutualFunds),
            etfs: f(AssetClass::Etfs),
            crypto: f(AssetClass::Crypto),
            real_estate: f(AssetClass::RealEstate),
        }
    }

    pub const fn get(&self, class: AssetClass) -> &T {
        match class {
            AssetClass::Stocks => &self.stocks,
            AssetClass::MutualFunds => &self.mutual_funds,
            AssetClass::Etfs => &self.etfs,
            AssetClass::Crypto => &self.crypto,
            AssetClass::RealEstate => &self.real_estate,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssetClass, &T)> {
        AssetClass::ALL.into_iter().map(move |class| (class, self.get(class)))
    }
}

/// Fixed weighting of a budget across asset classes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetMix(PerAsset<Decimal>);

impl AssetMix {
    pub const fn new(weights: PerAsset<Decimal>) -> Self {
        Self(weights)
    }

    pub const fn weight(&self, class: AssetClass) -> Decimal {
        *self.0.get(class)
    }

    pub const fn weights(&self) -> &PerAsset<Decimal> {
        &self.0
    }

    /// Sum of all weights (exactly 1 for every canonical profile)
    pub fn total(&self) -> Decimal {
        self.0.iter().map(|(_, w)| *w).sum()
    }
}

/// Display currency: uppercased code plus its symbol
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    pub symbol: &'static str,
}

impl Currency {
    pub const DEFAULT_CODE: &'static str = "USD";

    /// Resolve a free-form code. Blank input means USD; unknown codes keep
    /// their (uppercased) code but display with the default symbol.
    pub fn resolve(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        let code = if code.is_empty() {
            Self::DEFAULT_CODE.to_string()
        } else {
            code
        };
        let symbol = catalog::currency_symbol(&code);
        Self { code, symbol }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::resolve(Self::DEFAULT_CODE)
    }
}

/// Serde helpers that write a `Decimal` as a plain JSON number
/// (`1000`, not `"1000"` or `1000.0`).
pub mod number {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract().is_zero() {
            if let Some(int) = value.to_i64() {
                return serializer.serialize_i64(int);
            }
            if let Some(int) = value.to_u64() {
                return serializer.serialize_u64(int);
            }
        }
        // Beyond 64-bit integers JSON numbers are floats anyway
        serializer.serialize_f64(value.to_f64().unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let n = serde_json::Number::deserialize(deserializer)?;
        if let Some(int) = n.as_i64() {
            return Ok(Decimal::from(int));
        }
        if let Some(int) = n.as_u64() {
            return Ok(Decimal::from(int));
        }
        n.as_f64()
            .and_then(Decimal::from_f64)
            .ok_or_else(|| D::Error::custom(format!("number out of range: {n}")))
    }

    /// The same encoding for one amount per asset class
    pub mod per_asset {
        use rust_decimal::Decimal;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        use crate::model::PerAsset;

        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        struct Amount(#[serde(with = "crate::model::number")] Decimal);

        pub fn serialize<S: Serializer>(
            value: &PerAsset<Decimal>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            PerAsset::from_fn(|class| Amount(*value.get(class))).serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<PerAsset<Decimal>, D::Error> {
            let amounts = PerAsset::<Amount>::deserialize(deserializer)?;
            Ok(PerAsset::from_fn(|class| amounts.get(class).0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_parse() {
        assert_eq!(RiskProfile::parse("LOW"), RiskProfile::Low);
        assert_eq!(RiskProfile::parse("  High "), RiskProfile::High);
        assert_eq!(RiskProfile::parse("aggressive"), RiskProfile::Medium);
        assert_eq!(RiskProfile::parse(""), RiskProfile::Medium);
    }

    #[test]
    fn test_per_asset_iterates_in_canonical_order() {
        let keys: Vec<_> = PerAsset::from_fn(|c| c).iter().map(|(c, _)| c).collect();
        assert_eq!(keys, AssetClass::ALL.to_vec());
    }

    #[test]
    fn test_per_asset_wire_names() {
        let json = serde_json::to_string(&PerAsset::from_fn(|c| c.as_str())).unwrap();
        assert_eq!(
            json,
            r#"{"stocks":"stocks","mutualFunds":"mutualFunds","etfs":"etfs","crypto":"crypto","realEstate":"realEstate"}"#
        );
    }

    #[test]
    fn test_currency_resolution() {
        for code in ["usd", "USD", "Usd"] {
            let currency = Currency::resolve(code);
            assert_eq!(currency.code, "USD");
            assert_eq!(currency.symbol, "$");
        }

        let inr = Currency::resolve("inr");
        assert_eq!(inr.symbol, "₹");

        let unknown = Currency::resolve("xyz");
        assert_eq!(unknown.code, "XYZ");
        assert_eq!(unknown.symbol, "$");

        assert_eq!(Currency::resolve("   ").code, "USD");
    }

    #[test]
    fn test_large_amounts_stay_numbers() {
        use rust_decimal_macros::dec;

        #[derive(Serialize, Deserialize)]
        struct Wrapped(#[serde(with = "number::per_asset")] PerAsset<Decimal>);

        let amounts = PerAsset::from_fn(|_| dec!(45000000000000000000));
        let json = serde_json::to_value(Wrapped(amounts)).unwrap();
        assert!(json["stocks"].is_number());
        assert_eq!(json["stocks"].as_f64(), Some(4.5e19));

        let Wrapped(back) = serde_json::from_value(json).unwrap();
        assert_eq!(back, amounts);

        let small = serde_json::to_value(Wrapped(PerAsset::from_fn(|_| dec!(450)))).unwrap();
        assert_eq!(small["crypto"], serde_json::json!(450));
    }
}
