//! Reference Data
//!
//! Immutable per-asset-class tables: where to invest, what to buy, and the
//! trilingual disclosure text that goes with it. Nothing here is computed.

use crate::locale::Phrase;
use crate::model::AssetClass;

/// Static reference record for one asset class
#[derive(Debug)]
pub struct AssetProfile {
    /// Suggested platforms, most relevant first
    pub platforms: &'static [&'static str],

    /// Representative markets (locations for real estate)
    pub markets: &'static [&'static str],

    /// Risk disclosure
    pub note: Phrase,

    pub fees: Phrase,

    pub horizon: Phrase,

    /// Actionable tip
    pub tip: Phrase,
}

static STOCKS: AssetProfile = AssetProfile {
    platforms: &["Robinhood", "Fidelity", "Charles Schwab"],
    markets: &["US Large Cap", "US Mid Cap", "International Developed"],
    note: Phrase::new(
        "Market risk; diversify across sectors and market caps.",
        "बाज़ार जोखिम; सेक्टर और मार्केट कैप में विविधता रखें.",
        "Market risk; sectors aur market cap me diversify karo.",
    ),
    fees: Phrase::new(
        "Brokerage $0 commissions typical; bid/ask spreads apply.",
        "ब्रोकरेज शून्य; स्प्रेड लागत लागू.",
        "Brokerage zero; spread cost lagti hai.",
    ),
    horizon: Phrase::new(
        "5+ years recommended to ride market cycles.",
        "5+ साल; उतार–चढ़ाव के लिए समय दें.",
        "5+ saal; volatility ke liye time do.",
    ),
    tip: Phrase::new(
        "Favor low-cost index exposure first; add sector ETFs selectively.",
        "कम-खर्चे वाले इंडेक्स फंड पहले चुनें; सेक्टर ETFs सीमित रूप से जोड़ें.",
        "Low-cost index pehle; sector ETFs thoda selective add karo.",
    ),
};

static MUTUAL_FUNDS: AssetProfile = AssetProfile {
    platforms: &["Vanguard", "Fidelity"],
    markets: &["VTSAX (US Total Market)", "VFIAX (S&P 500)"],
    note: Phrase::new(
        "Fund management and market risk; check expense ratios.",
        "फंड व बाज़ार जोखिम; खर्च अनुपात देखें.",
        "Fund aur market risk; expense ratio check karo.",
    ),
    fees: Phrase::new(
        "Expense ratios ~0.04%-0.15% for passive funds; avoid loads.",
        "खर्च अनुपात ~0.04%-0.15%; लोड से बचें.",
        "Expense ratio ~0.04%-0.15%; load se bacho.",
    ),
    horizon: Phrase::new(
        "3-5+ years for compounding to work.",
        "3-5+ साल के लिए रखें.",
        "3-5+ saal rakhna sahi.",
    ),
    tip: Phrase::new(
        "Pick broad passive funds with expense ratios <0.10% when possible.",
        "वृहद निष्क्रिय फंड (<0.10% खर्च) चुनें.",
        "Broad passive funds (<0.10% expense) choose karo.",
    ),
};

static ETFS: AssetProfile = AssetProfile {
    platforms: &["Vanguard", "BlackRock iShares"],
    markets: &["VTI (Total Market)", "VXUS (Intl)"],
    note: Phrase::new(
        "Market risk; low fees; track broad indexes.",
        "बाज़ार जोखिम; कम खर्च, इंडेक्स ट्रैकिंग.",
        "Market risk; low fee, index tracking.",
    ),
    fees: Phrase::new(
        "Expense ratios ~0.03%-0.15%; minimal tracking error for large funds.",
        "खर्च अनुपात ~0.03%-0.15%; ट्रैकिंग त्रुटि कम.",
        "Expense ~0.03%-0.15%; tracking error kam.",
    ),
    horizon: Phrase::new(
        "3-5+ years; use core broad-market ETFs.",
        "3-5+ साल; रिबैलेंस आसान.",
        "3-5+ saal; rebalance easy.",
    ),
    tip: Phrase::new(
        "Use ETFs for tax efficiency and easy rebalancing.",
        "टैक्स दक्षता व सरल रिबैलेंस के लिए ETFs बढ़िया.",
        "Tax efficiency aur easy rebalance ke liye ETFs best.",
    ),
};

static CRYPTO: AssetProfile = AssetProfile {
    platforms: &["Coinbase", "Kraken"],
    markets: &["BTC", "ETH"],
    note: Phrase::new(
        "High volatility and regulatory risk; only invest money you can lose.",
        "उच्च उतार–चढ़ाव व विनियामक जोखिम; सावधानी से निवेश करें.",
        "High volatility aur regulatory risk; sirf utna invest jitna lose kar sako.",
    ),
    fees: Phrase::new(
        "Trading fees 0.1%-0.5%; network withdrawal fees vary.",
        "ट्रेडिंग फीस 0.1%-0.5%; नेटवर्क फीस अलग.",
        "Trading fee 0.1%-0.5%; network fee alag.",
    ),
    horizon: Phrase::new(
        "Highly speculative; only for long-term, <10-15% of portfolio.",
        "दीर्घकाल; पोर्टफोलियो में छोटा हिस्सा रखें.",
        "Long-term; portfolio ka chhota part rakho.",
    ),
    tip: Phrase::new(
        "Limit to a small slice; custody on reputable exchanges or hardware wallets.",
        "छोटा आवंटन रखें; सुरक्षित कस्टडी/हार्डवेयर वॉलेट.",
        "Chhota allocation rakho; safe custody/hardware wallet.",
    ),
};

static REAL_ESTATE: AssetProfile = AssetProfile {
    platforms: &["Fundrise", "RealtyMogul"],
    markets: &["US Sunbelt metros", "Logistics/Industrial REITs"],
    note: Phrase::new(
        "Illiquidity; local market cycles; income vacancy risk.",
        "तरलता कम; स्थानीय चक्र; किराया जोखिम.",
        "Illiquid; local cycles; income vacancy risk.",
    ),
    fees: Phrase::new(
        "Platform fees 0.15%-1.0%; check advisory and servicing fees.",
        "प्लेटफ़ॉर्म फीस 0.15%-1.0%; शर्तें देखें.",
        "Platform fee 0.15%-1.0%; terms check karo.",
    ),
    horizon: Phrase::new(
        "Illiquid; expect multi-year hold periods.",
        "मल्टी-ईयर होल्ड; आय व स्थिरता पर फोकस.",
        "Multi-year hold; income stability focus.",
    ),
    tip: Phrase::new(
        "Prefer diversified income-oriented vehicles; review distribution coverage.",
        "विविध आय-उन्मुख साधन चुनें; वितरण कवरेज देखें.",
        "Diversified income vehicles choose karo; distribution coverage dekho.",
    ),
};

/// Portfolio-wide tips: DCA, emergency fund, annual rebalance, low-fee core
pub static DIVERSIFICATION_TIPS: [Phrase; 4] = [
    Phrase::new(
        "Dollar-cost average monthly to smooth volatility.",
        "मासिक निवेश (DCA) से अस्थिरता कम करें.",
        "Monthly DCA se volatility smooth hoti hai.",
    ),
    Phrase::new(
        "Maintain an emergency fund (3-6 months expenses) before investing.",
        "3-6 महीनों का आपातकालीन फंड बनाएं.",
        "3-6 months ka emergency fund pehle banao.",
    ),
    Phrase::new(
        "Rebalance annually to target allocation.",
        "प्रति वर्ष रिबैलेंस करें.",
        "Har saal rebalance karo.",
    ),
    Phrase::new(
        "Favor low-fee index funds/ETFs for core holdings.",
        "मुख्य निवेश के लिए कम-खर्चे वाले इंडेक्स/ETF चुनें.",
        "Core ke liye low-fee index/ETF choose karo.",
    ),
];

static CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("AUD", "A$"),
    ("CAD", "C$"),
];

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

pub fn asset_profile(class: AssetClass) -> &'static AssetProfile {
    match class {
        AssetClass::Stocks => &STOCKS,
        AssetClass::MutualFunds => &MUTUAL_FUNDS,
        AssetClass::Etfs => &ETFS,
        AssetClass::Crypto => &CRYPTO,
        AssetClass::RealEstate => &REAL_ESTATE,
    }
}

/// Symbol for an uppercased currency code, `$` when unknown
pub fn currency_symbol(code: &str) -> &'static str {
    CURRENCY_SYMBOLS
        .iter()
        .find(|&&(c, _)| c == code)
        .map_or(DEFAULT_CURRENCY_SYMBOL, |&(_, symbol)| symbol)
}
