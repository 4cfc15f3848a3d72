//! Terminal client for a running player directory service
//!
//! - `http`: reqwest wrapper over the six endpoints
//! - `display`: table and one-line text rendering
//! - `menu`: the interactive loop

pub mod display;
pub mod http;
pub mod menu;

pub use http::{resolve_service_url, PlayerApiClient, DEFAULT_SERVICE_URL};
pub use menu::Menu;
