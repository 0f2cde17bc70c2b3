//! Scheme Bot API Library
//!
//! Core functionality for the WhatsApp government-scheme bot: entity
//! extraction, language detection, scheme matching, reply formatting and
//! best-effort translation, plus the HTTP surface that ties them together.
//!
//! # Modules
//!
//! - `catalog`: Scheme catalog loading and validation.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `extractor`: Age/income entity extraction.
//! - `formatter`: Localized reply rendering.
//! - `handlers`: HTTP request handlers and shared state.
//! - `language`: Script-based language detection.
//! - `matcher`: Keyword scoring and eligibility filtering.
//! - `models`: Core data models.
//! - `translator`: Sarvam.ai translation client.
//! - `webhook_handler`: Twilio WhatsApp webhook handler.
//! - `webhook_models`: Webhook payload and TwiML models.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod formatter;
pub mod handlers;
pub mod language;
pub mod matcher;
pub mod models;
pub mod translator;
pub mod webhook_handler;
pub mod webhook_models;
