//! HTTP surface of the point supplier.
//!
//! - [`Config`] — Command line and environment settings
//! - [`Server`] — actix-web server wiring
//! - [`Loader`] — Maps JavaScript loader with the API key injected
//! - [`handlers`] — Route handlers
mod config;
mod loader;
mod server;

pub mod handlers;

pub use config::*;
pub use loader::*;
pub use server::*;
