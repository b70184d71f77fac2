//! Advice Assembly
//!
//! Composes risk resolution, allocation, localization and the static
//! catalog into the document returned to clients.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{self, DIVERSIFICATION_TIPS};
use crate::error::Result;
use crate::locale::Language;
use crate::model::{AssetClass, Currency, PerAsset, RiskProfile, number};
use crate::strategy::{Allocations, allocate, coerce_budget, resolve};

/// Raw advice request as received from a client.
///
/// Fields are kept loosely typed; normalization happens in [`assemble`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdviceRequest {
    /// Free-text goal, echoed back verbatim
    #[serde(default)]
    pub goals: Value,

    /// Monthly budget (number or numeric string)
    #[serde(default)]
    pub budget: Value,

    /// `low`, `medium` or `high`
    #[serde(default)]
    pub risk: Value,

    /// ISO currency code
    #[serde(default)]
    pub currency: Value,

    /// `en`, `hi` or `hinglish`
    #[serde(default)]
    pub language: Value,
}

impl AdviceRequest {
    pub fn new(budget: impl Into<Value>) -> Self {
        Self {
            budget: budget.into(),
            ..Self::default()
        }
    }

    pub fn with_goals(mut self, goals: impl Into<String>) -> Self {
        self.goals = Value::String(goals.into());
        self
    }

    pub fn with_risk(mut self, risk: impl Into<String>) -> Self {
        self.risk = Value::String(risk.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Value::String(currency.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Value::String(language.into());
        self
    }

    /// Read a request from an arbitrary JSON body. Anything that is not an
    /// object (`null`, arrays, scalars) is an empty request.
    pub fn from_json(body: &Value) -> Result<Self> {
        match body {
            Value::Object(_) => Ok(Self::deserialize(body)?),
            other => {
                tracing::debug!(kind = json_kind(other), "Non-object advice request, using defaults");
                Ok(Self::default())
            }
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// String form of a loosely typed field, `default` when absent
fn text_field(value: &Value, default: &str) -> String {
    match value {
        Value::Null => default.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Normalized inputs echoed back to the client
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputEcho {
    pub goals: String,

    #[serde(with = "number")]
    pub monthly_budget: Decimal,

    /// Resolved profile, not the raw label: `"aggressive"` echoes as
    /// `"medium"` so the whole document matches a medium request.
    pub risk: RiskProfile,

    /// Lowercased tag as supplied. Unlike `risk` this is not canonicalized,
    /// so `"fr"` echoes as `"fr"` while the text is English.
    pub language: String,
}

/// Where an asset class is bought. Real estate lists locations, every other
/// class lists markets; the JSON key follows the variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venues {
    Markets(Vec<String>),
    Locations(Vec<String>),
}

impl Venues {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Markets(v) | Self::Locations(v) => v,
        }
    }
}

/// Full recommendation for one asset class
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(with = "number")]
    pub amount: Decimal,
    pub platforms: Vec<String>,
    #[serde(flatten)]
    pub venues: Venues,
    pub note: String,
    pub fees: String,
    pub horizon: String,
    pub tip: String,
}

impl Recommendation {
    fn build(class: AssetClass, amount: Decimal, language: Language) -> Self {
        let profile = catalog::asset_profile(class);
        let venues: Vec<String> = profile.markets.iter().map(ToString::to_string).collect();
        let venues = match class {
            AssetClass::RealEstate => Venues::Locations(venues),
            _ => Venues::Markets(venues),
        };

        Self {
            amount,
            platforms: profile.platforms.iter().map(ToString::to_string).collect(),
            venues,
            note: profile.note.resolve(language).to_string(),
            fees: profile.fees.resolve(language).to_string(),
            horizon: profile.horizon.resolve(language).to_string(),
            tip: profile.tip.resolve(language).to_string(),
        }
    }
}

/// The complete recommendation for one request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceDocument {
    pub inputs: InputEcho,
    #[serde(with = "number::per_asset")]
    pub allocations: Allocations,
    pub recommendations: PerAsset<Recommendation>,
    pub expected_returns: String,
    pub currency: String,
    pub currency_symbol: String,
    pub diversification_tips: Vec<String>,
}

impl AdviceDocument {
    /// Sum of all per-class amounts (may differ slightly from the budget).
    /// Saturates at the `Decimal` range.
    pub fn total_allocated(&self) -> Decimal {
        self.allocations
            .iter()
            .fold(Decimal::ZERO, |total, (_, amount)| total.saturating_add(*amount))
    }
}

/// Build the advice document for a request.
///
/// Pure and total: the same request always yields the same document, and
/// malformed fields fall back to their defaults instead of failing.
pub fn assemble(request: &AdviceRequest) -> AdviceDocument {
    let goals = text_field(&request.goals, "");
    let monthly_budget = coerce_budget(&request.budget);
    let (profile, mix) = resolve(&text_field(&request.risk, RiskProfile::Medium.as_str()));
    let language_tag = text_field(&request.language, Language::En.as_str())
        .trim()
        .to_lowercase();
    let language = Language::from_tag(&language_tag);
    let currency = Currency::resolve(&text_field(&request.currency, Currency::DEFAULT_CODE));

    let allocations = allocate(monthly_budget, &mix);
    let recommendations =
        PerAsset::from_fn(|class| Recommendation::build(class, *allocations.get(class), language));

    let diversification_tips = DIVERSIFICATION_TIPS
        .iter()
        .map(|tip| tip.resolve(language).to_string())
        .collect();

    tracing::debug!(
        risk = %profile,
        language = language.as_str(),
        currency = %currency.code,
        budget = %monthly_budget,
        "Assembled advice"
    );

    AdviceDocument {
        inputs: InputEcho {
            goals,
            monthly_budget,
            risk: profile,
            language: language_tag,
        },
        allocations,
        recommendations,
        expected_returns: profile.expected_returns().to_string(),
        currency: currency.code,
        currency_symbol: currency.symbol.to_string(),
        diversification_tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::locale::Phrase;

    fn narrative(doc: &AdviceDocument) -> Vec<&str> {
        let mut fields = Vec::new();
        for (_, rec) in doc.recommendations.iter() {
            fields.extend([rec.note.as_str(), rec.fees.as_str(), rec.horizon.as_str(), rec.tip.as_str()]);
        }
        fields.extend(doc.diversification_tips.iter().map(String::as_str));
        fields
    }

    fn catalog_phrases() -> Vec<Phrase> {
        let mut phrases = Vec::new();
        for class in AssetClass::ALL {
            let p = catalog::asset_profile(class);
            phrases.extend([p.note, p.fees, p.horizon, p.tip]);
        }
        phrases.extend(DIVERSIFICATION_TIPS);
        phrases
    }

    #[test]
    fn test_high_risk_inr_hinglish() {
        let request = AdviceRequest::new(1000)
            .with_risk("high")
            .with_currency("inr")
            .with_language("hinglish");
        let doc = assemble(&request);

        assert_eq!(doc.allocations.stocks, dec!(450));
        assert_eq!(doc.allocations.crypto, dec!(150));
        assert_eq!(doc.currency, "INR");
        assert_eq!(doc.currency_symbol, "₹");
        assert_eq!(doc.expected_returns, "10-15%+/yr (volatile)");
        assert_eq!(
            doc.recommendations.stocks.tip,
            "Low-cost index pehle; sector ETFs thoda selective add karo."
        );
        assert_eq!(doc.recommendations.stocks.amount, dec!(450));
    }

    #[test]
    fn test_empty_request_uses_defaults() {
        let doc = assemble(&AdviceRequest::default());

        assert!(doc.allocations.iter().all(|(_, a)| a.is_zero()));
        assert_eq!(doc.inputs.goals, "");
        assert_eq!(doc.inputs.monthly_budget, Decimal::ZERO);
        assert_eq!(doc.inputs.risk, RiskProfile::Medium);
        assert_eq!(doc.inputs.language, "en");
        assert_eq!(doc.currency, "USD");
        assert_eq!(doc.currency_symbol, "$");
        assert_eq!(doc.expected_returns, "6-10%/yr");
    }

    #[test]
    fn test_unknown_risk_matches_medium() {
        let fuzzy = assemble(&AdviceRequest::new(777).with_risk("aggressive"));
        let medium = assemble(&AdviceRequest::new(777).with_risk("medium"));
        assert_eq!(fuzzy, medium);
        assert_eq!(fuzzy.inputs.risk, RiskProfile::Medium);

        // Language tags are echoed as given, not canonicalized
        let french = assemble(&AdviceRequest::new(777).with_language(" FR "));
        assert_eq!(french.inputs.language, "fr");
        assert_eq!(
            serde_json::to_string(&fuzzy).unwrap(),
            serde_json::to_string(&medium).unwrap()
        );
    }

    #[test]
    fn test_language_is_never_mixed() {
        let phrases = catalog_phrases();
        let cases: [(&str, fn(&Phrase) -> &'static str); 4] = [
            ("hi", |p| p.hi),
            ("HINGLISH", |p| p.hinglish),
            ("en", |p| p.en),
            ("fr", |p| p.en),
        ];

        for (tag, pick) in cases {
            let doc = assemble(&AdviceRequest::new(500).with_language(tag));
            let expected: Vec<&str> = phrases.iter().map(pick).collect();
            assert_eq!(narrative(&doc), expected, "language {tag}");
        }
    }

    #[test]
    fn test_deterministic_output() {
        let request = AdviceRequest::new("2500.75")
            .with_goals("Retire early")
            .with_risk("LOW")
            .with_currency("eur")
            .with_language("hi");
        let a = serde_json::to_vec(&assemble(&request)).unwrap();
        let b = serde_json::to_vec(&assemble(&request)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_currency_is_echoed() {
        let doc = assemble(&AdviceRequest::new(100).with_currency("xyz"));
        assert_eq!(doc.currency, "XYZ");
        assert_eq!(doc.currency_symbol, "$");
    }

    #[test]
    fn test_wire_shape() {
        let doc = assemble(&AdviceRequest::new(1000).with_goals("House"));
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["inputs"]["monthlyBudget"], json!(1000));
        assert_eq!(json["inputs"]["risk"], json!("medium"));
        assert_eq!(json["inputs"]["goals"], json!("House"));
        assert_eq!(json["allocations"]["mutualFunds"], json!(300));
        assert_eq!(json["recommendations"]["stocks"]["markets"][0], json!("US Large Cap"));
        assert!(json["recommendations"]["stocks"].get("locations").is_none());
        assert_eq!(
            json["recommendations"]["realEstate"]["locations"],
            json!(["US Sunbelt metros", "Logistics/Industrial REITs"])
        );
        assert!(json["recommendations"]["realEstate"].get("markets").is_none());
        assert_eq!(json["currencySymbol"], json!("$"));
        assert_eq!(json["diversificationTips"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_document_survives_storage() {
        let doc = assemble(&AdviceRequest::new("12.5").with_risk("high"));
        let stored = serde_json::to_string(&doc).unwrap();
        let loaded: AdviceDocument = serde_json::from_str(&stored).unwrap();
        assert_eq!(loaded, doc);
        assert_eq!(loaded.inputs.monthly_budget, dec!(12.5));
    }

    #[test]
    fn test_from_json() {
        let request = AdviceRequest::from_json(&json!({"budget": "300", "risk": "low", "extra": 1})).unwrap();
        assert_eq!(request.budget, json!("300"));
        assert_eq!(request.currency, Value::Null);

        for body in [Value::Null, json!([1, 2]), json!("1000"), json!(42), json!(true)] {
            assert_eq!(AdviceRequest::from_json(&body).unwrap(), AdviceRequest::default(), "{body}");
        }
    }

    #[test]
    fn test_non_object_body_gets_default_advice() {
        let request = AdviceRequest::from_json(&json!([{"budget": 1000}])).unwrap();
        let doc = assemble(&request);
        assert_eq!(doc, assemble(&AdviceRequest::default()));
        assert_eq!(doc.inputs.risk, RiskProfile::Medium);
        assert!(doc.total_allocated().is_zero());
    }

    #[test]
    fn test_total_allocated() {
        let doc = assemble(&AdviceRequest::new(10));
        assert_eq!(doc.total_allocated(), dec!(11));
    }

    #[test]
    fn test_huge_budget_is_split_exactly() {
        let doc = assemble(&AdviceRequest::new(json!(1e20)).with_risk("high"));
        assert_eq!(doc.allocations.stocks, dec!(45000000000000000000));
        assert_eq!(doc.allocations.mutual_funds, dec!(20000000000000000000));
        assert_eq!(doc.recommendations.crypto.amount, dec!(15000000000000000000));
        assert_eq!(doc.total_allocated(), dec!(100000000000000000000));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["allocations"]["stocks"].as_f64(), Some(4.5e19));
        assert_eq!(json["inputs"]["monthlyBudget"].as_f64(), Some(1e20));
    }

    #[test]
    fn test_largest_budget_does_not_overflow() {
        let doc = assemble(&AdviceRequest::new(Decimal::MAX.to_string()));
        assert_eq!(doc.inputs.monthly_budget, Decimal::MAX);
        assert!(doc.total_allocated() > Decimal::ZERO);
        assert!(serde_json::to_value(&doc).is_ok());
    }
}
