use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::protocol::interchange;
use crate::Result;

/// Decode an external system document and encode it back
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// External system document path
    #[arg(value_name = "FILE")]
    file: PathBuf,
    /// Indent the re-encoded document
    #[arg(long)]
    pretty: bool,
}

impl DecodeCommand {
    pub fn run(self) -> Result<()> {
        let text = fs::read_to_string(&self.file)?;
        let system = interchange::decode(&text)?;

        println!("System: {}", system.name());
        println!("Owner: {:?}", system.owner());

        let encoded = if self.pretty {
            interchange::encode_pretty(&system)?
        } else {
            interchange::encode(&system)?
        };
        println!("System JSON: {}", encoded);

        Ok(())
    }
}
