//! Browser shell.
//!
//! A thin leptos layer over [`crate::game`]: it feeds clicks and the
//! point fetch into [`Game`](crate::game::Game) transitions and renders
//! the resulting [`Screen`](crate::game::Screen). The panorama itself is
//! drawn by the Maps JavaScript API through a page-provided hook.
//! Log records go to the browser console.
mod app;
mod console;
mod panorama;
mod remote;

pub use app::*;
pub use console::init as console;
pub use panorama::*;
pub use remote::*;
