mod initialize;
pub use initialize::Initializer;

mod config;
pub use config::Config;

pub const DEFAULT_CONFIG_PATH: &str = "./files/config.yaml";
