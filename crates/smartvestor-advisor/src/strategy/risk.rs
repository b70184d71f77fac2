//! Risk Profile Resolution
//!
//! Maps a fuzzy risk label onto one of three canonical asset mixes.

use rust_decimal_macros::dec;

use crate::model::{AssetMix, PerAsset, RiskProfile};

const LOW_MIX: AssetMix = AssetMix::new(PerAsset {
    stocks: dec!(0.25),
    mutual_funds: dec!(0.35),
    etfs: dec!(0.25),
    crypto: dec!(0.00),
    real_estate: dec!(0.15),
});

const MEDIUM_MIX: AssetMix = AssetMix::new(PerAsset {
    stocks: dec!(0.35),
    mutual_funds: dec!(0.30),
    etfs: dec!(0.20),
    crypto: dec!(0.05),
    real_estate: dec!(0.10),
});

const HIGH_MIX: AssetMix = AssetMix::new(PerAsset {
    stocks: dec!(0.45),
    mutual_funds: dec!(0.20),
    etfs: dec!(0.15),
    crypto: dec!(0.15),
    real_estate: dec!(0.05),
});

impl RiskProfile {
    /// Canonical asset mix for this tier
    pub const fn mix(self) -> AssetMix {
        match self {
            Self::Low => LOW_MIX,
            Self::Medium => MEDIUM_MIX,
            Self::High => HIGH_MIX,
        }
    }
}

/// Resolve a risk label to its profile and mix.
///
/// Never fails: unknown or empty labels resolve to `medium`.
pub fn resolve(risk: &str) -> (RiskProfile, AssetMix) {
    let profile = RiskProfile::parse(risk);
    if profile.as_str() != risk.trim().to_lowercase() {
        tracing::debug!(requested = %risk, resolved = %profile, "Risk label fell back to default profile");
    }
    (profile, profile.mix())
}
