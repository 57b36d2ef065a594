#![forbid(unsafe_code)]

//! Page configuration.
//!
//! The host passes a JSON object; every key is optional and falls back to
//! the defaults below. `""` and `"{}"` both yield the default config.

use folio_core::{FolioError, Result};
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// CSS selectors used to bind elements once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_link: String,
    pub anchor: String,
    pub submit_button: String,
    pub image: String,
    /// Suffix appended to a field id to find its error slot
    /// (`"name"` + `"-error"` → `#name-error`).
    pub error_slot_suffix: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: ".header".into(),
            nav_toggle: ".hamburger".into(),
            nav_menu: ".nav-menu".into(),
            nav_link: ".nav-link".into(),
            anchor: "a[href^=\"#\"]".into(),
            submit_button: "#contact-form button[type=\"submit\"]".into(),
            image: "img".into(),
            error_slot_suffix: "-error".into(),
        }
    }
}

/// Tunables for the page controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Header switches to the scrolled tier above this offset.
    pub scroll_threshold_px: f64,
    /// Quiet period before a scroll burst restyles the header.
    pub scroll_debounce_ms: u64,
    /// Simulated submission latency.
    pub submit_delay_ms: u64,
    /// Submit control label while a submission is pending.
    pub busy_label: String,
    /// Alert shown after a successful submission.
    pub success_message: String,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 100.0,
            scroll_debounce_ms: 10,
            submit_delay_ms: 2000,
            busy_label: "Sending...".into(),
            success_message: "Thank you for your message! I'll get back to you soon.".into(),
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = if json.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str(json)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(FolioError::invalid_config(format!(
                "scroll_threshold_px must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }
        if self.busy_label.trim().is_empty() {
            return Err(FolioError::invalid_config("busy_label must not be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}
