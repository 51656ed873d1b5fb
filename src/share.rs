use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use url::Url;
use webbrowser::Browser;

use crate::category::Category;

/// Where a result gets shared to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShareTarget {
    #[default]
    Warpcast,
    Twitter,
}

impl ShareTarget {
    pub fn compose_url(&self) -> &'static str {
        match self {
            ShareTarget::Warpcast => "https://warpcast.com/~/compose",
            ShareTarget::Twitter => "https://twitter.com/intent/tweet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Opened,
    BrowserUnavailable,
}

pub fn share_text(result: Category, url: &str) -> String {
    format!("I'm a {result}! {url}")
}

/// Compose URL for `target` with `text` pre-filled
pub fn share_intent_url(target: ShareTarget, text: &str) -> String {
    match Url::parse_with_params(target.compose_url(), &[("text", text)]) {
        Ok(url) => url.into(),
        Err(_) => format!(
            "{}?text={}",
            target.compose_url(),
            url::form_urlencoded::byte_serialize(text.as_bytes()).collect::<String>()
        ),
    }
}

/// Opens the share intent in the system browser, if there is one
pub fn open_share(target: ShareTarget, text: &str) -> std::io::Result<ShareOutcome> {
    if !Browser::is_available() {
        log::warn!("no browser available, not sharing");
        return Ok(ShareOutcome::BrowserUnavailable);
    }
    let intent = share_intent_url(target, text);
    log::info!("opening share intent {intent}");
    webbrowser::open(&intent)?;
    Ok(ShareOutcome::Opened)
}
