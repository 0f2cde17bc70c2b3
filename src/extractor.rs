/// Entity extraction for incoming messages
///
/// Recovers an optional age and optional income from free text using fixed,
/// ordered pattern lists covering English and Hindi phrasings. Extraction
/// never fails: anything that does not match, or matches with an invalid
/// value, simply leaves the field absent.
use crate::models::ExtractedEntities;
use regex::Regex;
use std::sync::LazyLock;

// Captures are ASCII-digit only ([0-9]) so Devanagari or other Unicode
// digits are treated as non-matches rather than parsed.
static AGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)age\s+([0-9]+)",          // "age 35"
        r"(?i)([0-9]+)\s+years?\s+old", // "35 years old"
        r"(?i)([0-9]+)\s+years?",       // "35 years"
        r"(?i)i\s+am\s+([0-9]+)",       // "I am 45"
        r"मैं\s+([0-9]+)\s+साल",        // "मैं 35 साल"
        r"उम्र\s+([0-9]+)",             // "उम्र 35"
        r"([0-9]+)\s+साल",              // "35 साल"
    ]
    .iter()
    .map(|p| Regex::new(p).expect("age pattern must compile"))
    .collect()
});

static INCOME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)income\s+([0-9]+)",  // "income 15000"
        r"₹\s*([0-9]+)",           // "₹15000" or "₹ 15000"
        r"(?i)rs\.?\s*([0-9]+)",   // "Rs 15000" or "Rs. 15000"
        r"(?i)earning\s+([0-9]+)", // "earning 20000"
        r"(?i)earn\s+([0-9]+)",    // "earn 20000"
        r"(?i)([0-9]+)\s+rupees?", // "15000 rupees"
        r"(?i)salary\s+([0-9]+)",  // "salary 15000"
        r"आय\s+([0-9]+)",          // "आय 15000"
        r"कमाई\s+([0-9]+)",        // "कमाई 15000"
    ]
    .iter()
    .map(|p| Regex::new(p).expect("income pattern must compile"))
    .collect()
});

/// Extract age and income entities from a user message.
///
/// The two extractions are independent; a message may yield neither,
/// either, or both.
pub fn extract_entities(message: &str) -> ExtractedEntities {
    ExtractedEntities {
        age: extract_age(message),
        income: extract_income(message),
    }
}

/// Extract an age in [0, 120] from the message.
///
/// Patterns are tried in list order; the first one that matches AND whose
/// captured value validates wins. A pattern whose captured value is out of
/// range is rejected outright and the next pattern is tried - the value is
/// never reused.
pub fn extract_age(message: &str) -> Option<u32> {
    for pattern in AGE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(message) {
            if let Some(m) = caps.get(1) {
                // Overflow parses as a non-match, same as unparseable digits
                if let Ok(age) = m.as_str().parse::<u32>() {
                    if age <= 120 {
                        return Some(age);
                    }
                }
            }
        }
    }
    None
}

/// Extract a strictly positive income from the message.
///
/// Same first-matching-first-valid policy as [`extract_age`]; no upper
/// bound is enforced. A leading minus sign is never captured by the
/// digit-only patterns, so negative amounts are naturally excluded.
pub fn extract_income(message: &str) -> Option<u64> {
    for pattern in INCOME_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(message) {
            if let Some(m) = caps.get(1) {
                if let Ok(income) = m.as_str().parse::<u64>() {
                    if income > 0 {
                        return Some(income);
                    }
                }
            }
        }
    }
    None
}
