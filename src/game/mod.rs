//! Client-side game session.
//!
//! The session is a finite-state machine independent of any renderer.
//! Every transition is a pure function from one [`Game`] value to the next;
//! the browser shell only feeds it inputs and draws the resulting [`Screen`].
//!
//! ## States
//!
//! - [`Phase::NotStarted`] — Waiting for the player to press start
//! - [`Phase::Loading`] — Points requested from the [`Supplier`]
//! - [`Phase::Presenting`] — A panorama is shown, no judgment yet
//! - [`Phase::Judged`] — A judgment is recorded and may still be toggled
//! - [`Phase::Ended`] — Summary shown until restart
mod alert;
mod controller;
mod input;
mod judgment;
mod phase;
mod screen;
mod session;
mod supplier;

pub use alert::*;
pub use controller::*;
pub use input::*;
pub use judgment::*;
pub use phase::*;
pub use screen::*;
pub use session::*;
pub use supplier::*;
