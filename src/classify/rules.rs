use crate::core::{TaxDirection, VatRate};

/// Result of classifying a freeform description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub rate: VatRate,
    pub tax_included: bool,
}

/// One entry of the rate rule table.
struct RateRule {
    /// Which supply category the rule covers, for review and debugging.
    #[allow(dead_code)]
    name: &'static str,
    rate: VatRate,
    keywords: &'static [&'static str],
}

/// Ordered rule table, first match wins. Reduced-rate supplies take
/// precedence over the zero/exempt set; an explicit "<N>% dph" marker is
/// consulted only when no keyword matches; everything else falls to the
/// 21 % standard rate. Keywords are bilingual because users write both
/// Czech and English, and the common ASCII transliterations are listed
/// alongside the diacritic forms.
const RATE_RULES: &[RateRule] = &[
    RateRule {
        name: "reduced",
        rate: VatRate::Reduced,
        keywords: &[
            // food service
            "restaurace",
            "restaurant",
            "oběd",
            "obed",
            "jídlo",
            "jidlo",
            "catering",
            "lunch",
            "meal",
            // books
            "kniha",
            "knihy",
            "book",
            // lodging
            "ubytování",
            "ubytovani",
            "hotel",
            "penzion",
            "lodging",
            "accommodation",
            // basic medicine
            "lékárna",
            "lekarna",
            "léky",
            "leky",
            "medicine",
            "pharmacy",
            // public transport
            "jízdenka",
            "jizdenka",
            "mhd",
            "vlak",
            "autobus",
            "public transport",
            "train ticket",
            "bus ticket",
        ],
    },
    RateRule {
        name: "zero",
        rate: VatRate::Zero,
        keywords: &[
            // intra-community supply / export
            "export",
            "vývoz",
            "vyvoz",
            "dodání do eu",
            "dodani do eu",
            "reverse charge",
            // medical care
            "zdravotní péče",
            "zdravotni pece",
            "ošetření",
            "osetreni",
            "medical care",
            // education
            "školení",
            "skoleni",
            "vzdělávání",
            "vzdelavani",
            "education",
            "tuition",
            // regulated financial services
            "pojištění",
            "pojisteni",
            "insurance",
            "bankovní poplatek",
            "bankovni poplatek",
            "bank fee",
            "úrok",
            "urok",
        ],
    },
];

/// Tax-name tokens that make an explicit "<N>%" marker authoritative.
const TAX_WORDS: &[&str] = &["dph", "vat", "daň", "dan", "tax"];

/// Markers forcing "amount already includes tax".
const GROSS_MARKERS: &[&str] = &[
    "včetně dph",
    "vcetne dph",
    "s dph",
    "tax included",
    "vat included",
    "gross",
    "brutto",
    "celkem",
    "total",
];

/// Markers forcing "tax comes on top".
const NET_MARKERS: &[&str] = &[
    "bez dph",
    "plus dph",
    "+ dph",
    "tax excluded",
    "plus tax",
    "plus vat",
    "+ vat",
    "netto",
    "net",
];

/// Classify a description into (rate, inclusion).
///
/// Rate rules, in order:
/// 1. Reduced-rate keyword set → 12 %
/// 2. Zero/exempt keyword set → 0 %
/// 3. Explicit "<N>% dph" / "<N>% vat" marker with N ∈ {0, 12, 21} → N %
/// 4. Standard rate 21 % (the legal default)
///
/// Inclusion: explicit gross markers force `true`, explicit net markers
/// force `false`; with no marker, purchases default to gross (retail
/// prices are quoted with tax) and sales to net (invoices are quoted
/// without, tax is added).
pub fn classify(description: &str, direction: TaxDirection) -> Classification {
    let text = description.to_lowercase();

    let rate = RATE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
        .map(|rule| rule.rate)
        .or_else(|| explicit_rate(&text))
        .unwrap_or(VatRate::Standard);

    Classification {
        rate,
        tax_included: detect_inclusion(&text, direction),
    }
}

/// Find a "<N>% <tax-name>" marker. An N outside the legal set is ignored
/// — classification must always resolve, and only structured rate inputs
/// fail loudly.
fn explicit_rate(text: &str) -> Option<VatRate> {
    for (i, _) in text.match_indices('%') {
        let digits: String = text[..i]
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            continue;
        }
        let rest = text[i + 1..].trim_start();
        if !TAX_WORDS.iter().any(|w| rest.starts_with(w)) {
            continue;
        }
        // digits were collected right-to-left; restore reading order
        let digits: String = digits.chars().rev().collect();
        let n = match digits.parse::<u32>() {
            Ok(n) => n,
            Err(_) => continue,
        };
        match n {
            21 => return Some(VatRate::Standard),
            12 => return Some(VatRate::Reduced),
            0 => return Some(VatRate::Zero),
            _ => continue,
        }
    }
    None
}

fn detect_inclusion(text: &str, direction: TaxDirection) -> bool {
    if GROSS_MARKERS.iter().any(|m| text.contains(m)) {
        return true;
    }
    if NET_MARKERS.iter().any(|m| text.contains(m)) {
        return false;
    }
    matches!(direction, TaxDirection::Purchase)
}
