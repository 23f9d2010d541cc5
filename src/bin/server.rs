//! Point supplier binary.
//!
//! Serves validated Street View points over HTTP.
//! Configuration comes from flags or the environment; see `--help`.

use clap::Parser;
use litterview::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    hosting::Server::run(hosting::Config::parse()).await
}
