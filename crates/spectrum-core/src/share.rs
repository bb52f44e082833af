use crate::{Error, Result};
use url::Url;
use url::form_urlencoded::byte_serialize;

pub const SHARE_TEXT: &str = "Check out this AI Maturity Spectrum visualization!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    X,
    Facebook,
}

impl SharePlatform {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "x" | "twitter" => Some(Self::X),
            "facebook" | "fb" => Some(Self::Facebook),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Facebook => "facebook",
        }
    }
}

/// Builds the platform's share-intent link for `page_url`.
pub fn share_url(platform: SharePlatform, page_url: &str) -> Result<String> {
    let page = Url::parse(page_url).map_err(|err| Error::InvalidShareUrl {
        message: format!("{page_url}: {err}"),
    })?;
    let page = encode_uri_component(page.as_str());

    Ok(match platform {
        SharePlatform::X => format!(
            "https://twitter.com/intent/tweet?text={}&url={page}",
            encode_uri_component(SHARE_TEXT)
        ),
        SharePlatform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={page}"),
    })
}

/// Percent-encodes `value` for a query component, leaving `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
/// intact and encoding spaces as `%20`.
pub fn encode_uri_component(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .map(|chunk| match chunk {
            "+" => "%20",
            "%21" => "!",
            "%27" => "'",
            "%28" => "(",
            "%29" => ")",
            "%7E" => "~",
            other => other,
        })
        .collect()
}
