//! Roadmap report sign-ups.
//!
//! A lead is always appended to local storage under [`LEADS_KEY`]. When a webhook is configured
//! the lead is also POSTed there; delivery failures are logged and otherwise ignored.

use crate::catalog::LevelId;
use crate::config::SpectrumConfig;
use crate::store::Storage;
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const LEADS_KEY: &str = "roadmap_leads";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCaptureData {
    pub email: String,
    pub current_level: LevelId,
    pub target_level: LevelId,
    pub captured_at: String,
}

/// Something non-blank, an `@`, then a dotted domain; no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Validates `email`, delivers the lead, and returns what was recorded.
///
/// At the terminal level pass the same id for `current` and `target`.
pub fn capture_lead(
    storage: &dyn Storage,
    config: &SpectrumConfig,
    email: &str,
    current: LevelId,
    target: LevelId,
) -> Result<LeadCaptureData> {
    if !is_valid_email(email) {
        return Err(Error::InvalidEmail);
    }

    let lead = LeadCaptureData {
        email: email.to_string(),
        current_level: current,
        target_level: target,
        captured_at: crate::time::now_rfc3339(),
    };

    if let Some(url) = config.lead_webhook_url() {
        post_webhook(&url, &lead);
    }

    if let Err(err) = append_lead(storage, &lead) {
        tracing::warn!(error = %err, "failed to record lead locally");
    }

    Ok(lead)
}

/// Every lead recorded so far, oldest first. Unreadable storage reads as empty.
pub fn stored_leads(storage: &dyn Storage) -> Vec<LeadCaptureData> {
    let raw = match storage.get_item(LEADS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to read stored leads");
            return Vec::new();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "discarding unreadable stored leads");
        Vec::new()
    })
}

fn append_lead(storage: &dyn Storage, lead: &LeadCaptureData) -> Result<()> {
    let mut leads = stored_leads(storage);
    leads.push(lead.clone());
    let json = serde_json::to_string(&leads)?;
    storage.set_item(LEADS_KEY, &json)
}

#[cfg(feature = "webhook")]
fn post_webhook(url: &str, lead: &LeadCaptureData) {
    use std::time::Duration;

    let client = match reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(2))
        .timeout(Duration::from_secs(10))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(error = %err, "failed to build lead webhook client");
            return;
        }
    };

    match client.post(url).json(lead).send() {
        Ok(resp) if resp.status().is_success() => {
            tracing::debug!(status = %resp.status(), "lead webhook delivered");
        }
        Ok(resp) => {
            tracing::warn!(status = %resp.status(), "lead webhook rejected");
        }
        Err(err) => {
            tracing::warn!(error = %err, "lead webhook failed");
        }
    }
}

#[cfg(not(feature = "webhook"))]
fn post_webhook(url: &str, _lead: &LeadCaptureData) {
    tracing::debug!(url, "webhook support not compiled in; lead kept locally");
}
