//! Rejection sampling of viewable points.
//!
//! - [`Oracle`] — Pluggable "is there imagery here" check
//! - [`Budget`] — Attempt cap and deadline for one acquisition
//! - [`Acquirer`] — Samples regions until enough candidates pass the oracle
mod acquirer;
mod budget;
mod error;
mod oracle;

pub use acquirer::*;
pub use budget::*;
pub use error::*;
pub use oracle::*;
