//! Deterministic category rules mapping statement narrations to labels.
//!
//! Rules are evaluated top to bottom and the first rule with a keyword
//! contained in the lower-cased description wins (keywords of three
//! characters or fewer must start a word). The order of
//! [`BUILTIN_RULES`] is part of the output contract: reordering it changes
//! which category a narration such as "UPI/SWIGGY" lands in.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use statement_core::labels;

/// Built-in `(category, keywords)` table, highest priority first.
pub const BUILTIN_RULES: &[(&str, &[&str])] = &[
    (
        labels::INCOME,
        &["salary", "payroll", "stipend", "dividend", "interest earned", "cashback", "refund", "bonus"],
    ),
    (
        labels::FOOD_AND_DINING,
        &[
            "swiggy", "zomato", "dominos", "pizza", "restaurant", "cafe", "coffee", "dhaba", "food",
            "kitchen", "eatery", "dining",
        ],
    ),
    (
        labels::GROCERIES,
        &["bigbasket", "blinkit", "zepto", "grofers", "grocery", "supermarket", "kirana", "vegetable", "fruit"],
    ),
    (
        labels::SHOPPING,
        &[
            "amazon", "flipkart", "myntra", "ajio", "meesho", "nykaa", "tatacliq", "shopping", "retail",
            "store", "mall", "bazaar", "pos/", "pos ",
        ],
    ),
    (
        labels::TRANSPORTATION,
        &["uber", "ola cabs", "rapido", "irctc", "redbus", "metro", "railway", "petrol", "diesel", "fuel", "taxi"],
    ),
    (
        labels::TRAVEL,
        &["makemytrip", "goibibo", "airline", "flight", "booking", "resort", "holiday", "trip"],
    ),
    (
        labels::ENTERTAINMENT,
        &[
            "bookmyshow", "netflix", "primevideo", "hotstar", "disney", "zee5", "jiocinema", "spotify",
            "movie", "concert",
        ],
    ),
    (
        labels::BILLS_AND_UTILITIES,
        &[
            "electricity", "broadband", "recharge", "dth", "airtel", "jio", "vodafone", "bsnl",
            "water bill", "gas bill", "utility", "bill",
        ],
    ),
    (
        labels::HEALTH_AND_MEDICAL,
        &["hospital", "clinic", "pharmacy", "medical", "doctor", "medicine", "chemist", "dental", "healthcare"],
    ),
    (
        labels::EDUCATION,
        &["school", "college", "university", "tuition", "course", "education", "institute"],
    ),
    (
        labels::PERSONAL_CARE,
        &["salon", "beauty", "gym", "fitness", "parlour", "grooming"],
    ),
    (
        labels::INVESTMENTS,
        &["mutual fund", "zerodha", "groww", "demat", "stock", "equity", "investment"],
    ),
    (labels::INSURANCE, &["insurance", "premium", "policy"]),
    (
        labels::RENT,
        &["house rent", "rent paid", "rent payment", "rental", "lease", "housing", "landlord", "nobroker"],
    ),
    (
        labels::EMI_AND_LOANS,
        &["emi", "loan", "repayment", "installment", "mortgage"],
    ),
    (labels::GIFTS_AND_DONATIONS, &["donation", "charity", "gift"]),
    (labels::TAXES_AND_FEES, &["gst", "tax", "penalty", "fee", "charges"]),
    (labels::CASH, &["atm", "cash withdrawal", "cash deposit"]),
    (
        labels::TRANSFER,
        &[
            "upi", "imps", "neft", "rtgs", "transfer", "sent", "received", "phonepe", "gpay", "paytm",
            "wallet",
        ],
    ),
];

/// One `(keyword-set, category)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Keywords are lower-cased and blank ones dropped. Surrounding spaces
    /// are kept: `"pos "` must not match "deposit".
    pub fn new<I, S>(category: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            category: category.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.trim().is_empty())
                .collect(),
        }
    }

    /// `lowered` must already be lower-case.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| keyword_in(lowered, k))
    }
}

/// Keywords this short only match at the start of a word, so "emi" does not
/// fire inside "remittance".
const WORD_START_MAX_LEN: usize = 3;

fn keyword_in(haystack: &str, keyword: &str) -> bool {
    if keyword.chars().count() > WORD_START_MAX_LEN {
        return haystack.contains(keyword);
    }
    haystack.match_indices(keyword).any(|(at, _)| {
        haystack[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric())
    })
}

/// An ordered, immutable rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl RuleSet {
    /// The built-in table only.
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_RULES
                .iter()
                .map(|(category, keywords)| CategoryRule::new(*category, keywords.iter()))
                .collect(),
        }
    }

    /// Custom rules first, in the given order, then the built-in table.
    pub fn with_custom(custom: impl IntoIterator<Item = CategoryRule>) -> Self {
        let mut rules: Vec<CategoryRule> = custom
            .into_iter()
            .map(|r| CategoryRule::new(r.category, r.keywords.iter().map(|k| k.trim())))
            .filter(|r| !r.keywords.is_empty())
            .collect();
        rules.extend(Self::builtin().rules);
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// First matching rule's category, or `Others`.
    pub fn categorize(&self, description: &str) -> &str {
        let lowered = description.to_lowercase();
        if lowered.trim().is_empty() {
            return labels::OTHERS;
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.category.as_str())
            .unwrap_or(labels::OTHERS)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(RuleSet::builtin)
}

/// Categorize a description with the built-in table.
pub fn categorize(description: &str) -> &'static str {
    builtin_rules().categorize(description)
}
