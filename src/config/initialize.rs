use std::fs;
use std::path::Path;

use crate::common::{debug, Result};
use crate::config::Config;
use crate::core::{Authenticator, ConfiguredVerifier, TracingAudit};

#[derive(Debug)]
pub struct Initializer {
    pub config: Config,
}

impl Initializer {
    pub fn load_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Load config file {}", path.display());

        let f = fs::File::open(path)?;
        let config = serde_yaml::from_reader::<_, Config>(f)?;

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn authenticator(&self) -> Authenticator<ConfiguredVerifier, TracingAudit> {
        Authenticator::with_verifier(self.config.authenticator.build_verifier())
    }
}
