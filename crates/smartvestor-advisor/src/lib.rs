//! # smartvestor-advisor
//!
//! Deterministic allocation recommendation engine.
//!
//! Given a monthly budget, a risk label, a display currency and a language,
//! the engine produces a complete [`AdviceDocument`]: how much goes into
//! each asset class, where to buy it, what it costs, how long to hold it,
//! and a handful of portfolio-wide tips, all in one language.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ risk label   │──▶│  resolve()  │──▶│  allocate()  │──▶│  assemble()  │
//! │ "HIGH"       │   │ High + mix  │   │ per-class    │   │ + catalog    │
//! └──────────────┘   └─────────────┘   │ amounts      │   │ + locale     │
//!                                      └──────────────┘   └──────────────┘
//! ```
//!
//! ## Example: 1000/month, high risk
//!
//! ```text
//! stocks       ██████████████████  450 (45%)
//! mutualFunds  ████████            200 (20%)
//! etfs         ██████              150 (15%)
//! crypto       ██████              150 (15%)
//! realEstate   ██                   50 (5%)
//! ```
//!
//! Nothing in here fails on bad input: unknown risk labels are `medium`,
//! unparsable budgets are zero, unknown currencies display as `$` and
//! unknown languages are English.

pub mod advice;
pub mod catalog;
pub mod error;
pub mod locale;
pub mod model;
pub mod strategy;

pub use advice::{AdviceDocument, AdviceRequest, InputEcho, Recommendation, Venues, assemble};
pub use error::{AdvisorError, Result};
pub use locale::{Language, Phrase, text};
pub use model::{AssetClass, AssetMix, Currency, PerAsset, RiskProfile};
pub use strategy::{AllocationStrategy, Allocations, allocate, resolve};
