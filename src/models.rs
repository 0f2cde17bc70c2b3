use serde::{Deserialize, Serialize};

/// Closed category taxonomy for government schemes.
///
/// The catalog rejects unknown categories at load time so a typo in the
/// data file fails startup instead of silently never matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Agriculture,
    Health,
    Housing,
    Education,
    Women,
    Employment,
    Senior,
}

impl Category {
    /// Parse a category from its lowercase wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "agriculture" => Some(Category::Agriculture),
            "health" => Some(Category::Health),
            "housing" => Some(Category::Housing),
            "education" => Some(Category::Education),
            "women" => Some(Category::Women),
            "employment" => Some(Category::Employment),
            "senior" => Some(Category::Senior),
            _ => None,
        }
    }
}

/// Applicable states - the catalog data carries this as either a single
/// string ("All India") or a list of state names.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StateList {
    Single(String),
    Many(Vec<String>),
}

/// Structured eligibility predicate for a scheme.
///
/// Every field is optional; an absent field means "no constraint".
/// `income_limit` is an upper bound (monthly, rupees).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Eligibility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_limit: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<StateList>,
}

/// A government welfare scheme record.
///
/// Immutable after catalog load; matching only ever reads `keywords` and
/// `eligibility`, everything else is display data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scheme {
    /// Unique stable identifier (e.g. "pm-kisan").
    pub id: String,

    /// English display name.
    pub name: String,

    /// Hindi display name.
    pub name_hindi: String,

    /// Exactly one category per scheme.
    pub category: Category,

    /// Free-text benefit description shown in replies.
    pub benefits: String,

    pub eligibility: Eligibility,

    /// Required documents, in the order they should be listed.
    pub documents: Vec<String>,

    /// Application instructions or link.
    pub application_process: String,

    /// Matching keywords; compared case-insensitively, order irrelevant.
    pub keywords: Vec<String>,
}

/// Age and income recovered from a message, if any.
///
/// Absence means "not mentioned", never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractedEntities {
    /// Valid range 0-120 inclusive.
    pub age: Option<u32>,
    /// Strictly positive, no upper bound.
    pub income: Option<u64>,
}

/// A scheme paired with its relevance score for one query. Transient.
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub scheme: &'a Scheme,
    pub score: u32,
}
