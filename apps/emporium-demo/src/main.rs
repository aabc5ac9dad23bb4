//! # Emporium Driver
//!
//! ```bash
//! # Original wiring: prints "... $135.0"
//! cargo run -p emporium-demo
//!
//! # Decorate before adding, 20% off, with a JSON summary
//! EMPORIUM_SCENARIO=decorated EMPORIUM_STRATEGY=twenty EMPORIUM_SUMMARY=true \
//!     cargo run -p emporium-demo
//! ```

use emporium_demo::config::DemoConfig;
use emporium_demo::{init_tracing, scenario};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DemoConfig::from_env()?;
    info!(?config, "Configuration loaded");

    let cart = scenario::run(&config);
    println!("{}", scenario::total_line(cart.total()));

    if config.print_summary {
        println!("{}", serde_json::to_string_pretty(&cart.summary())?);
    }

    Ok(())
}
