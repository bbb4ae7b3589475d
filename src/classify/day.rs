use std::fmt;
use std::str::FromStr;

use crate::common::debug;
use crate::error::UnknownCategory;

pub const WORK_DAY: &str = "Work day";
pub const WEEKEND_DAY: &str = "Weekend day";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thur,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thur,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thur => "THUR",
            Day::Fri => "FRI",
            Day::Sat => "SAT",
            Day::Sun => "SUN",
        }
    }

    pub fn day_type(&self) -> &'static str {
        match self {
            Day::Mon | Day::Tue | Day::Wed | Day::Thur | Day::Fri => {
                debug!(day = %self, "Checking Week Day");
                WORK_DAY
            }
            Day::Sat | Day::Sun => WEEKEND_DAY,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MON" => Ok(Day::Mon),
            "TUE" => Ok(Day::Tue),
            "WED" => Ok(Day::Wed),
            "THUR" => Ok(Day::Thur),
            "FRI" => Ok(Day::Fri),
            "SAT" => Ok(Day::Sat),
            "SUN" => Ok(Day::Sun),
            _ => Err(UnknownCategory {
                label: s.to_owned(),
            }),
        }
    }
}

/// Classify a weekday label as a work day or a weekend day.
pub fn day_type(label: &str) -> Result<&'static str, UnknownCategory> {
    label.parse::<Day>().map(|day| day.day_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(day_type("MON"), Ok("Work day"));
        assert_eq!(day_type("THUR"), Ok("Work day"));
        assert_eq!(day_type("SAT"), Ok("Weekend day"));
        assert_eq!(day_type("SUN"), Ok("Weekend day"));
    }

    #[test]
    fn unknown_label() {
        for label in ["XYZ", "", "mon", "THU"] {
            assert_eq!(
                day_type(label),
                Err(UnknownCategory {
                    label: label.to_owned()
                })
            );
        }
    }

    #[test]
    fn labels_round_trip() {
        for day in Day::ALL {
            assert_eq!(day.as_str().parse::<Day>(), Ok(day));
        }
        let weekend = Day::ALL
            .iter()
            .filter(|day| day.day_type() == WEEKEND_DAY)
            .count();
        assert_eq!(weekend, 2);
    }
}
