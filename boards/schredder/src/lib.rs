#![no_std]
#![feature(abi_avr_interrupt)]

use relay_common::{ChannelConfig, Clock, Millis, Polarity, Timing};

pub mod millis;

// Uno D13 also drives the onboard "L" LED, D14 is A0.
pub const RELAY_1_PIN: u8 = 13;
pub const RELAY_2_PIN: u8 = 14;

#[cfg(not(feature = "quick-cycle"))]
pub const ON_TIME_MS: Millis = 600 * 1000;
#[cfg(feature = "quick-cycle")]
pub const ON_TIME_MS: Millis = 30 * 1000;
pub const OFF_TIME_MS: Millis = 2 * 1000;

/// Relay module inputs are active LOW.
pub const POLARITY: Polarity = Polarity::ActiveLow;

pub const POLL_INTERVAL_MS: u32 = 10;
pub const SERIAL_BAUD: u32 = 57600;
/// Time for the serial monitor to attach after a reset.
pub const STARTUP_SETTLE_MS: u32 = 1000;

pub const RELAY_1: ChannelConfig = ChannelConfig {
	label: "RELAY 1",
	pin_id: RELAY_1_PIN,
	timing: Timing::new(ON_TIME_MS, OFF_TIME_MS),
	polarity: POLARITY,
};
pub const RELAY_2: ChannelConfig = ChannelConfig {
	label: "RELAY 2",
	pin_id: RELAY_2_PIN,
	timing: Timing::new(ON_TIME_MS, OFF_TIME_MS),
	polarity: POLARITY,
};

/// [`millis::millis`] as a [`Clock`], only valid after `millis_init` and
/// with interrupts enabled.
pub struct MillisClock;

impl Clock for MillisClock {
	fn now(&mut self) -> Millis {
		millis::millis()
	}
}
