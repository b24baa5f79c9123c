#![cfg_attr(not(test), no_std)]

//! Shared logic for boards that cycle relays on a fixed ON/OFF schedule.
//!
//! Everything in here is hardware agnostic, boards hand in their pins, a
//! millisecond [`Clock`], a delay and a [`Report`] sink.

pub mod channel;
pub mod clock;
pub mod driver;
pub mod report;

pub use channel::{Channel, ChannelConfig, Polarity, State, Timing, Transition};
pub use clock::{Clock, Millis};
pub use driver::Driver;
pub use report::{Report, SerialReport, Tenths};

#[cfg(test)]
pub(crate) mod testing;
