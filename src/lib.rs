//! EcoTech renewable-energy site
//!
//! A small Axum server for a renewable-energy brand: landing and topic pages,
//! a carbon footprint calculator, and a contact form relayed to a third-party
//! form endpoint.
//!
//! - `footprint`: the estimator (emission factors, status, recommendations)
//! - `chart`: SVG pie of the per-category contributions
//! - `content`: static page copy and navigation
//! - `theme`: light/dark selection and the per-request page context
//! - `contact`: form validation and the relay client
//! - `config`: environment configuration
//! - `api_server` / `web`: router, JSON API and HTML pages (feature `api`)

pub mod chart;
pub mod config;
pub mod contact;
pub mod content;
pub mod footprint;
pub mod theme;

#[cfg(feature = "api")]
pub mod api_server;

#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use config::{ConfigError, SiteConfig};
pub use footprint::{estimate, FootprintInput, FootprintResult, FootprintStatus, TransportMode};
pub use theme::{PageContext, Theme};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState, FootprintReport};
