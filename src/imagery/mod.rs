//! Street View metadata oracle.
//!
//! - [`StreetView`] — [`crate::acquire::Oracle`] backed by the metadata endpoint
//! - [`Signer`] — HMAC-SHA1 URL signatures for authenticated requests
//! - [`Metadata`] — Decoded metadata response
mod metadata;
mod signer;
mod streetview;

pub use metadata::*;
pub use signer::*;
pub use streetview::*;
