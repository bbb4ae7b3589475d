//! Two flavours of closed-set dispatch.
//!
//! [`day_type`] classifies a label from a fixed set and treats anything else as an
//! [`UnknownCategory`](crate::UnknownCategory) error. [`describe`] classifies an arbitrary
//! value and falls back to a generic description for kinds it does not know.

mod day;
pub use self::day::{day_type, Day};

mod kind;
pub use self::kind::{describe, Kind};
