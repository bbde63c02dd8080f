//! Environment-based configuration for [`TermiiClient`](super::TermiiClient).

use crate::domain::{ApiKey, SenderId};

use super::{TermiiClientBuilder, TermiiError};

/// Required: Termii API key.
pub const API_KEY_ENV: &str = "TERMII_API_KEY";
/// Optional: default sender id applied to messages that do not set `from`.
pub const SENDER_ID_ENV: &str = "TERMII_SENDER_ID";
/// Optional: base URL override (staging hosts, stub servers).
pub const BASE_URL_ENV: &str = "TERMII_BASE_URL";

pub(super) fn builder_from_lookup<F>(lookup: F) -> Result<TermiiClientBuilder, TermiiError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = lookup(API_KEY_ENV)
        .filter(|value| !value.trim().is_empty())
        .ok_or(TermiiError::MissingEnv { name: API_KEY_ENV })?;

    let mut builder = TermiiClientBuilder::new(ApiKey::new(api_key)?);

    if let Some(sender_id) = lookup(SENDER_ID_ENV).filter(|value| !value.trim().is_empty()) {
        builder = builder.sender_id(SenderId::new(sender_id)?);
    }
    if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
        builder = builder.base_url(base_url.trim());
    }

    Ok(builder)
}
