/// Keyword relevance matching and eligibility filtering
///
/// The scoring is intentionally literal - no stemming, no fuzzing, no field
/// weighting. Output parity with the deployed bot depends on the exact
/// bidirectional-substring rule and on dropping zero-score schemes BEFORE
/// the eligibility filter runs.
use crate::catalog::SchemeCatalog;
use crate::models::{MatchResult, Scheme};

/// Maximum number of schemes returned per query.
const MAX_RESULTS: usize = 3;

/// Match a query against the catalog and return up to three schemes,
/// best first.
pub fn match_schemes<'a>(
    catalog: &'a SchemeCatalog,
    query: &str,
    age: Option<u32>,
    income: Option<u64>,
) -> Vec<&'a Scheme> {
    let normalized = query.to_lowercase();
    let query_words: Vec<&str> = normalized.trim().split_whitespace().collect();

    let mut results: Vec<MatchResult<'a>> = catalog
        .schemes()
        .iter()
        .map(|scheme| MatchResult {
            scheme,
            score: calculate_score(&query_words, &scheme.keywords),
        })
        .filter(|r| r.score > 0)
        .collect();

    if age.is_some() || income.is_some() {
        results.retain(|r| passes_eligibility(r.scheme, age, income));
    }

    // Stable sort: catalog order is the tie-break.
    results.sort_by(|a, b| b.score.cmp(&a.score));

    results
        .into_iter()
        .take(MAX_RESULTS)
        .map(|r| r.scheme)
        .collect()
}

/// Sum of token/keyword hits. A token scores against a keyword when either
/// contains the other; each keyword contributes separately and the sum is
/// not capped.
fn calculate_score(query_words: &[&str], keywords: &[String]) -> u32 {
    let normalized: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut score = 0;
    for word in query_words {
        for keyword in &normalized {
            if keyword.contains(word) || word.contains(keyword.as_str()) {
                score += 1;
            }
        }
    }
    score
}

/// Age/income eligibility check. A scheme without the relevant bound always
/// passes, whatever was supplied.
fn passes_eligibility(scheme: &Scheme, age: Option<u32>, income: Option<u64>) -> bool {
    let elig = &scheme.eligibility;

    if let Some(age) = age {
        if let Some(min_age) = elig.min_age {
            if age < min_age {
                return false;
            }
        }
        if let Some(max_age) = elig.max_age {
            if age > max_age {
                return false;
            }
        }
    }

    if let (Some(income), Some(limit)) = (income, elig.income_limit) {
        if income > limit {
            return false;
        }
    }

    true
}
