//! Theme selection and the per-request page context
//!
//! The dark/light choice lives in a `theme` cookie and is threaded into every
//! template through `PageContext`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::content::{self, NavItem, ShareLink};

pub const THEME_COOKIE: &str = "theme";

/// One year
pub const THEME_COOKIE_MAX_AGE: u64 = 31_536_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Class applied to the root element
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Pull the theme out of a raw `Cookie` header value.
    ///
    /// Returns `None` when the cookie is absent or holds an unknown value.
    pub fn from_cookie_header(header: &str) -> Option<Theme> {
        header
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| name.trim() == THEME_COOKIE)
            .and_then(|(_, value)| value.trim().parse().ok())
    }

    pub fn set_cookie_value(&self) -> String {
        format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            THEME_COOKIE,
            self.as_str(),
            THEME_COOKIE_MAX_AGE
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected light or dark)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// A `return_to` target is honoured only if it stays on this site and can be
/// sent back verbatim in a `Location` header (printable ASCII, no spaces).
pub fn safe_return_path(candidate: Option<&str>) -> &str {
    match candidate {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && path.bytes().all(|b| b.is_ascii_graphic()) =>
        {
            path
        }
        _ => "/",
    }
}

// ============================================================================
// Page Context
// ============================================================================

/// Chrome shared by every page: brand, theme, navigation state, share menu
#[derive(Debug, Clone)]
pub struct PageContext {
    pub site_name: String,
    pub theme: Theme,
    pub current_path: String,
    pub nav: &'static [NavItem],
    pub share_links: Vec<ShareLink>,
}

impl PageContext {
    pub fn new(site_name: &str, theme: Theme, current_path: &str, public_url: &str) -> Self {
        Self {
            site_name: site_name.to_string(),
            theme,
            current_path: current_path.to_string(),
            nav: content::NAV_ITEMS,
            share_links: content::share_links(public_url),
        }
    }

    /// Whether a nav entry should be highlighted for the current path
    pub fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            self.current_path == "/"
        } else {
            self.current_path == href || self.current_path.starts_with(&format!("{}/", href))
        }
    }

    /// Active if any dropdown child matches
    pub fn is_section_active(&self, item: &NavItem) -> bool {
        item.dropdown.iter().any(|link| self.is_active(link.href))
    }

    /// Link that flips the theme and comes back here
    pub fn toggle_href(&self) -> String {
        format!(
            "/theme/toggle?return_to={}",
            urlencoding::encode(&self.current_path)
        )
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.theme {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}
