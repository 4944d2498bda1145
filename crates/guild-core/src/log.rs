//! Optional logging initializer for adapters, mirroring `rbp-core`'s
//! `#[cfg(feature = "server")] pub fn log()`. The engine never calls this
//! itself — it only emits `log::*` calls — so a library consumer that
//! embeds the engine without a terminal/console front end pays nothing
//! for it and is free to install its own subscriber instead.

/// Initializes terminal logging at `Info` level. Intended for adapters
/// (a CLI, a test harness) that want simple stderr output; the engine's
/// own debug/trace logging is independent of whether this is called.
pub fn init_logging() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let _ = simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
}
