use log::LevelFilter;

/// Инициализировать `env_logger`.
///
/// `RUST_LOG` имеет приоритет над `default_level`. Повторный вызов
/// ничего не делает.
pub fn init(default_level: &str) {
    let level = default_level.parse().unwrap_or(LevelFilter::Info);
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .try_init();
}
