//! Street View litter-spotting game.
//!
//! The server hands out a handful of coordinates that are known to have
//! street-level imagery; the browser shows each one as a panorama, asks
//! whether litter is visible, and keeps score.
//!
//! ## Modules
//!
//! - [`geo`] — Points and bounding regions
//! - [`acquire`] — Rejection sampling of viewable points under a budget
//! - [`game`] — Client session state machine and its render projection
//! - [`imagery`] — Street View metadata oracle and URL signing (server)
//! - [`hosting`] — HTTP server, routes, and configuration (server)
//! - [`client`] — Browser shell (client)
pub mod acquire;
pub mod game;
pub mod geo;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "server")]
pub mod hosting;
#[cfg(feature = "server")]
pub mod imagery;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Latitude or longitude in decimal degrees.
pub type Degrees = f64;
/// Points scored in one playthrough.
pub type Score = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// ACQUISITION PARAMETERS
// ============================================================================
/// Points handed to the client per game.
pub const POINTS_PER_GAME: usize = 10;
/// Oracle calls allowed per acquisition before giving up.
pub const MAX_ATTEMPTS: usize = 500;
/// Wall-clock bound on one acquisition.
pub const ACQUISITION_DEADLINE: std::time::Duration = std::time::Duration::from_secs(120);
/// Timeout for a single metadata request.
pub const ORACLE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

// ============================================================================
// HOSTING PARAMETERS
// ============================================================================
/// Listen address when BIND_ADDR is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
/// Imagery provider host.
pub const DEFAULT_IMAGERY_URL: &str = "https://maps.googleapis.com";
/// JavaScript callback invoked once the Maps API has loaded.
pub const DEFAULT_MAPS_CALLBACK: &str = "initializeMap";

// ============================================================================
// PROCESS SETUP
// ============================================================================
/// Initialize logging: Info to the terminal, Debug to a timestamped file.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
/// In-flight acquisitions are abandoned; nothing is persisted.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
