use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the `log` macros used by the tables.
///
/// Only errors are shown by default. `RUST_LOG=debug` adds every placement and
/// `RUST_LOG=trace` adds each occupied slot passed while probing.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Error)
            .filter_module("hashlab", LevelFilter::Error)
            .format_timestamp_millis()
            .parse_default_env();

        // Tests may have installed a logger already.
        let _ = builder.try_init();
    });
}
