/// Language detection by Unicode script presence
///
/// Classifies a message by checking, in fixed priority order, whether it
/// contains at least one character from each supported script range. This is
/// a presence test, not a majority test: a single Devanagari character
/// anywhere classifies the whole message as Hindi.
///
/// Known limitation: Marathi shares the Devanagari script with Hindi and is
/// reported as "hi".

/// Script ranges checked in priority order, mapped to internal codes.
const SCRIPT_RANGES: &[(char, char, &str)] = &[
    ('\u{0900}', '\u{097F}', "hi"), // Devanagari (Hindi, Marathi)
    ('\u{0B80}', '\u{0BFF}', "ta"), // Tamil
    ('\u{0C00}', '\u{0C7F}', "te"), // Telugu
    ('\u{0980}', '\u{09FF}', "bn"), // Bengali
    ('\u{0A80}', '\u{0AFF}', "gu"), // Gujarati
    ('\u{0C80}', '\u{0CFF}', "kn"), // Kannada
    ('\u{0D00}', '\u{0D7F}', "ml"), // Malayalam
    ('\u{0A00}', '\u{0A7F}', "pa"), // Gurmukhi (Punjabi)
    ('\u{0B00}', '\u{0B7F}', "or"), // Odia
];

/// Code used when no supported non-Latin script is present.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Detect the language code of a message from its dominant script.
pub fn detect_language(text: &str) -> &'static str {
    for &(start, end, code) in SCRIPT_RANGES {
        if text.chars().any(|c| c >= start && c <= end) {
            return code;
        }
    }
    DEFAULT_LANGUAGE
}
