use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::common::debug;
use crate::config::Initializer;
use crate::core::{Admin, ExternalSystem, Principal, RegisteredUser};
use crate::protocol::interchange;
use crate::Result;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrincipalArg {
    Anonymous,
    Registered,
    Admin,
    System,
}

/// Authenticate a principal built from flags or decoded from a document
#[derive(Args, Debug)]
pub struct AuthenticateCommand {
    /// Principal variant
    #[arg(long, value_enum, default_value_t = PrincipalArg::Anonymous)]
    kind: PrincipalArg,
    /// Username, admin name or system name
    #[arg(
        long,
        required_if_eq_any([("kind", "registered"), ("kind", "admin"), ("kind", "system")])
    )]
    name: Option<String>,
    /// Password, admin credentials or system key
    #[arg(
        long,
        env = "PRINCIPAL_SECRET",
        hide_env_values = true,
        required_if_eq_any([("kind", "registered"), ("kind", "admin"), ("kind", "system")])
    )]
    secret: Option<String>,
    /// Name of the admin owning the system
    #[arg(long, required_if_eq("kind", "system"))]
    owner_name: Option<String>,
    /// Credentials of the admin owning the system
    #[arg(long, required_if_eq("kind", "system"))]
    owner_credentials: Option<String>,
    /// External system document, overrides the flags above
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,
    /// Only report whether the principal is an authenticated admin
    #[arg(long)]
    admin_only: bool,
}

impl AuthenticateCommand {
    pub fn run(self, initializer: Initializer) -> Result<()> {
        let admin_only = self.admin_only;
        let principal = self.principal()?;
        debug!(?principal, "Authenticate command");

        let authenticator = initializer.authenticator();
        let result = if admin_only {
            authenticator.is_authenticated_admin(&principal)
        } else {
            authenticator.authenticate(&principal)
        };
        let authenticated = result.unwrap_or_else(|never| match never {});

        println!("Authenticated: {}", authenticated);

        Ok(())
    }

    fn principal(self) -> Result<Principal> {
        let AuthenticateCommand {
            kind,
            name,
            secret,
            owner_name,
            owner_credentials,
            file,
            ..
        } = self;

        if let Some(file) = file {
            let text = fs::read_to_string(file)?;
            return Ok(interchange::decode(&text)?.into());
        }

        let name = name.unwrap_or_default();
        let secret = secret.unwrap_or_default();

        let principal = match kind {
            PrincipalArg::Anonymous => Principal::anonymous(),
            PrincipalArg::Registered => RegisteredUser::new(name, secret).into(),
            PrincipalArg::Admin => Admin::new(name, secret).into(),
            PrincipalArg::System => ExternalSystem::new(
                name,
                secret,
                Admin::new(
                    owner_name.unwrap_or_default(),
                    owner_credentials.unwrap_or_default(),
                ),
            )
            .into(),
        };

        Ok(principal)
    }
}
