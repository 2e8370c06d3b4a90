use super::Config;

/// Configuration written on first run.
pub fn defaults() -> Config {
    Config::default()
}
