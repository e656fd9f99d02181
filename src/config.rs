//! Server configuration from environment variables

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::theme::Theme;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub site_name: String,
    /// Canonical URL advertised by the share menu
    pub public_url: String,
    /// Form relay endpoint. Contact submissions fail when unset.
    pub contact_relay_url: Option<String>,
    pub default_theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            static_dir: PathBuf::from("static"),
            site_name: "EcoTech".to_string(),
            public_url: "http://localhost:3000".to_string(),
            contact_relay_url: None,
            default_theme: Theme::Light,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => v.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "PORT",
                value: v.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        let bind_addr = match get("BIND_ADDR") {
            Some(v) => v.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "BIND_ADDR",
                value: v.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.bind_addr,
        };

        let default_theme = match get("DEFAULT_THEME") {
            Some(v) => v.parse().map_err(|e: crate::theme::UnknownTheme| ConfigError::Invalid {
                var: "DEFAULT_THEME",
                value: v.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.default_theme,
        };

        Ok(Self {
            bind_addr,
            port,
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            site_name: get("SITE_NAME").unwrap_or(defaults.site_name),
            public_url: get("PUBLIC_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.public_url),
            contact_relay_url: get("CONTACT_RELAY_URL"),
            default_theme,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
