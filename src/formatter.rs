/// Reply rendering for matched schemes
///
/// Two built-in renderings exist: English (the default) and Hindi. Every
/// other target language is reached by translating the English rendering,
/// never by native formatting. The literal strings here are part of the
/// observable contract with existing users - do not reword them.
use crate::models::Scheme;

const ORDINAL_EMOJI: [&str; 3] = ["1\u{fe0f}\u{20e3}", "2\u{fe0f}\u{20e3}", "3\u{fe0f}\u{20e3}"];

/// Render a ranked scheme list (or the no-match message) as reply text.
pub fn format_response(schemes: &[&Scheme], language: &str) -> String {
    let hindi = language == "hi";

    if schemes.is_empty() {
        return if hindi {
            "क्षमा करें, कोई योजना नहीं मिली। कृपया प्रयास करें: खेती, स्वास्थ्य, आवास, शिक्षा"
                .to_string()
        } else {
            "Sorry, no schemes found. Try: farming, health, housing, education, employment"
                .to_string()
        };
    }

    let header = if hindi {
        format!("आपके लिए {} योजनाएं मिलीं:\n\n", schemes.len())
    } else {
        format!("Found {} scheme(s) for you:\n\n", schemes.len())
    };

    let schemes_list = schemes
        .iter()
        .enumerate()
        .map(|(idx, scheme)| {
            let marker = ORDINAL_EMOJI
                .get(idx)
                .map(|e| e.to_string())
                .unwrap_or_else(|| format!("{}.", idx + 1));
            let name = if hindi {
                &scheme.name_hindi
            } else {
                &scheme.name
            };

            format!(
                "{} *{}*\n💰 {}\n✅ {}\n📄 {}\n🔗 {}",
                marker,
                name,
                scheme.benefits,
                format_eligibility(scheme, hindi),
                scheme
                    .documents
                    .iter()
                    .take(2)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
                scheme.application_process
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let footer = if hindi {
        "\n\nअधिक जानकारी के लिए नंबर भेजें (1, 2, 3)"
    } else {
        "\n\nReply with number for more details (1, 2, 3)"
    };

    format!("{}{}{}", header, schemes_list, footer)
}

/// One-line eligibility summary: age floor, first occupation, income
/// ceiling - or the "all citizens" phrase when none apply.
fn format_eligibility(scheme: &Scheme, hindi: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    let elig = &scheme.eligibility;

    if let Some(min_age) = elig.min_age {
        parts.push(if hindi {
            format!("उम्र: {}+", min_age)
        } else {
            format!("Age: {}+", min_age)
        });
    }

    if let Some(occupations) = &elig.occupation {
        if let Some(first) = occupations.first() {
            parts.push(first.clone());
        }
    }

    if let Some(limit) = elig.income_limit {
        parts.push(format!("Income < ₹{}", limit));
    }

    if parts.is_empty() {
        return if hindi {
            "सभी नागरिक".to_string()
        } else {
            "All citizens".to_string()
        };
    }

    parts.join(", ")
}
