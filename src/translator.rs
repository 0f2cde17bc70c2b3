/// Sarvam.ai translation client
///
/// Translation is strictly best-effort: the caller falls back to the English
/// rendering on any error here, so nothing in this module may block message
/// delivery beyond the configured request timeout.
use crate::config::Config;
use crate::errors::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Capability seam for the external translation provider, so the webhook
/// pipeline can be tested against a stub without HTTP.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate English text to the target internal language code.
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, AppError>;
}

/// Map internal language codes to Sarvam.ai codes. Unknown codes fall back
/// to Hindi, the dominant user language.
fn sarvam_lang_code(lang: &str) -> &'static str {
    match lang {
        "hi" => "hi-IN",
        "ta" => "ta-IN",
        "te" => "te-IN",
        "bn" => "bn-IN",
        "mr" => "mr-IN",
        "gu" => "gu-IN",
        "kn" => "kn-IN",
        "ml" => "ml-IN",
        "pa" => "pa-IN",
        "or" => "od-IN", // Sarvam uses od-IN for Odia
        "as" => "as-IN",
        "ur" => "ur-IN",
        _ => "hi-IN",
    }
}

#[derive(Debug, Deserialize)]
struct SarvamResponse {
    translated_text: Option<String>,
}

pub struct SarvamClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl SarvamClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.translate_timeout_secs))
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.sarvam_base_url.clone(),
            api_key: config.sarvam_api_key.clone(),
        })
    }
}

#[async_trait]
impl Translator for SarvamClient {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, AppError> {
        // English is the formatting language; no call needed.
        if target_lang == "en" {
            return Ok(text.to_string());
        }

        let Some(ref api_key) = self.api_key else {
            return Err(AppError::ExternalApiError(
                "Translation disabled: SARVAM_AI key not configured".to_string(),
            ));
        };

        let target_code = sarvam_lang_code(target_lang);
        tracing::debug!("Translating reply to {} ({})", target_lang, target_code);

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .header("api-subscription-key", api_key)
            .json(&json!({
                "input": text,
                "source_language_code": "en-IN",
                "target_language_code": target_code,
                "speaker_gender": "Male",
                "mode": "formal",
                "model": "mayura:v1",
                "enable_preprocessing": true,
            }))
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalApiError(format!("Sarvam request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Sarvam API returned status {}: {}",
                status, error_text
            )));
        }

        let body: SarvamResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse Sarvam response: {}", e))
        })?;

        match body.translated_text {
            Some(translated) => Ok(translated),
            // Mirror the upstream contract: a 200 without the field means
            // keep the original text.
            None => Ok(text.to_string()),
        }
    }
}
