/// WhatsApp Webhook Handler
///
/// Receives Twilio WhatsApp messages, runs the matching pipeline and replies
/// with TwiML. Every failure path returns HTTP 200 with an apology reply:
/// a non-2xx or malformed body would make Twilio treat the message as
/// undeliverable, which is worse for the user than a canned apology.
use crate::extractor::extract_entities;
use crate::formatter::format_response;
use crate::handlers::AppState;
use crate::language::{detect_language, DEFAULT_LANGUAGE};
use crate::matcher::match_schemes;
use crate::webhook_models::{twiml_response, TwilioMessage};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use std::sync::Arc;

const MISSING_BODY_REPLY: &str = "Sorry, I didn't receive your message. Please try again.";
const INTERNAL_ERROR_REPLY: &str = "Sorry, something went wrong. Please try again later.";

/// POST /api/v1/webhooks/whatsapp
pub async fn whatsapp_webhook(
    State(state): State<Arc<AppState>>,
    Form(message): Form<TwilioMessage>,
) -> Response {
    let body = match message.body.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            tracing::warn!(from = ?message.from, "Webhook call without message body");
            return twiml(MISSING_BODY_REPLY);
        }
    };

    tracing::info!(from = ?message.from, to = ?message.to, "Received message: {}", body);

    let reply = handle_message(&state, &body).await;
    twiml(&reply)
}

/// Run the full pipeline for one message. Infallible: any unexpected
/// failure degrades to the generic apology text.
async fn handle_message(state: &Arc<AppState>, body: &str) -> String {
    match run_pipeline(state, body).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Webhook pipeline failed: {}", e);
            INTERNAL_ERROR_REPLY.to_string()
        }
    }
}

async fn run_pipeline(state: &Arc<AppState>, body: &str) -> anyhow::Result<String> {
    // Entity extraction and language detection are independent reads of the
    // same text.
    let entities = extract_entities(body);
    tracing::info!(
        "Extracted entities - age: {:?}, income: {:?}",
        entities.age,
        entities.income
    );

    let language = detect_language(body);
    tracing::info!("Detected language: {}", language);

    let schemes = match_schemes(&state.catalog, body, entities.age, entities.income);
    tracing::info!("Found {} matching schemes", schemes.len());

    // Always format in English first; other languages are reached by
    // translating this rendering.
    let english = format_response(&schemes, DEFAULT_LANGUAGE);

    if language == DEFAULT_LANGUAGE {
        return Ok(english);
    }

    // Best-effort translation: deliver the English text if it fails.
    match state.translator.translate(&english, language).await {
        Ok(translated) => Ok(translated),
        Err(e) => {
            tracing::warn!("Translation to {} failed, replying in English: {}", language, e);
            Ok(english)
        }
    }
}

fn twiml(message: &str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml")],
        twiml_response(message),
    )
        .into_response()
}
