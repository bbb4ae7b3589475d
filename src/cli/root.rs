use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::{authenticate, classify, decode};
use crate::config::{Config, Initializer};
use crate::Result;

/// Principal command
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct PrincipalCommand {
    /// Global options
    #[command(flatten)]
    pub options: GlobalOptions,
    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Global options
#[derive(Args, Debug)]
pub struct GlobalOptions {
    /// Configuration file path, every credential is accepted when omitted
    #[arg(long, short = 'C', env = "PRINCIPAL_CONFIG_PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate a principal
    Authenticate(authenticate::AuthenticateCommand),
    /// Decode an external system document
    Decode(decode::DecodeCommand),
    /// Classify a weekday label
    Day(classify::DayCommand),
    /// Describe the kind of a json value
    Kind(classify::KindCommand),
}

impl GlobalOptions {
    pub fn initializer(&self) -> Result<Initializer> {
        match &self.config {
            Some(path) => Initializer::load_config_file(path),
            None => Ok(Initializer::from_config(Config::default())),
        }
    }
}

impl PrincipalCommand {
    pub fn run(self) -> Result<()> {
        let PrincipalCommand { options, command } = self;

        match command {
            Command::Authenticate(auth) => auth.run(options.initializer()?),
            Command::Decode(decode) => decode.run(),
            Command::Day(day) => day.run(),
            Command::Kind(kind) => kind.run(),
        }
    }
}

/// Parse command line args
pub fn parse() -> PrincipalCommand {
    PrincipalCommand::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_command() {
        PrincipalCommand::command().debug_assert();
    }

    #[test]
    fn parse_authenticate_system() {
        let command = PrincipalCommand::try_parse_from([
            "principal",
            "authenticate",
            "--kind",
            "system",
            "--name",
            "ext",
            "--secret",
            "12345678",
            "--owner-name",
            "admin",
            "--owner-credentials",
            "abcdef",
        ])
        .unwrap();

        assert!(matches!(command.command, Command::Authenticate(_)));
        assert!(command.options.config.is_none());
    }

    #[test]
    fn system_requires_owner() {
        let result = PrincipalCommand::try_parse_from([
            "principal",
            "authenticate",
            "--kind",
            "system",
            "--name",
            "ext",
            "--secret",
            "12345678",
        ]);
        assert!(result.is_err());
    }
}
