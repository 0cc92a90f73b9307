//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Shapeboard");

    let config = match std::env::args().nth(1) {
        Some(path) => match shapeboard_app::AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => shapeboard_app::AppConfig::default(),
    };

    match shapeboard_app::run(config) {
        Ok(summary) => log::info!(
            "Done: {} events, {} selected, frame at {}",
            summary.events,
            summary.selected,
            summary.output.display()
        ),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
