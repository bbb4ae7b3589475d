pub mod authenticate;
pub mod classify;
pub mod decode;
mod root;

pub use root::{parse, Command, GlobalOptions, PrincipalCommand};
