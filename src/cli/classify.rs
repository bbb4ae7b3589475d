use clap::Args;

use crate::classify::{self, Kind};
use crate::Result;

/// Classify a weekday label (MON, TUE, WED, THUR, FRI, SAT, SUN)
#[derive(Args, Debug)]
pub struct DayCommand {
    /// Weekday label
    #[arg(value_name = "LABEL")]
    label: String,
}

impl DayCommand {
    pub fn run(self) -> Result<()> {
        println!("{}", classify::day_type(&self.label)?);
        Ok(())
    }
}

/// Describe the kind of a value, input that is not json is taken as text
#[derive(Args, Debug)]
pub struct KindCommand {
    /// Json value
    #[arg(value_name = "VALUE")]
    value: String,
}

impl KindCommand {
    pub fn run(self) -> Result<()> {
        let kind = match serde_json::from_str::<serde_json::Value>(&self.value) {
            Ok(value) => Kind::from(value),
            Err(_) => Kind::from(self.value),
        };
        println!("{}", classify::describe(&kind));
        Ok(())
    }
}
