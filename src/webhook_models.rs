use serde::Deserialize;

/// Inbound Twilio WhatsApp message, delivered as form data.
///
/// Twilio sends many more fields; only the ones the pipeline reads are
/// modeled, the rest are ignored by the form deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioMessage {
    /// Message text. Absent or blank when the user sent media only.
    #[serde(rename = "Body", default)]
    pub body: Option<String>,

    /// Sender, e.g. "whatsapp:+919876543210".
    #[serde(rename = "From", default)]
    pub from: Option<String>,

    /// Receiving bot number.
    #[serde(rename = "To", default)]
    pub to: Option<String>,
}

/// Render a reply message as a TwiML envelope.
///
/// Twilio treats anything other than well-formed TwiML as a delivery
/// failure, so every reply path must go through here.
pub fn twiml_response(message: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        escape_xml(message)
    )
}

/// Escape XML metacharacters in message text.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
