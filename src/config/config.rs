use serde::Deserialize;

use crate::core;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub authenticator: core::Config,
}
