//! Fakes shared by the unit tests.

use core::convert::Infallible;

use embedded_hal::{
	delay::DelayNs,
	digital::{ErrorType, OutputPin, PinState},
};
use heapless::Vec;

use crate::{
	channel::{ChannelConfig, Polarity, Timing, Transition},
	clock::{Clock, Millis},
	report::Report,
};

pub fn config(label: &'static str, on_ms: Millis, off_ms: Millis) -> ChannelConfig {
	ChannelConfig {
		label,
		pin_id: 0,
		timing: Timing::new(on_ms, off_ms),
		polarity: Polarity::ActiveLow,
	}
}

/// Remembers the last level written and how many writes happened.
#[derive(Default)]
pub struct FakePin {
	level: Option<PinState>,
	writes: usize,
}

impl FakePin {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn level(&self) -> Option<PinState> {
		self.level
	}
	pub fn writes(&self) -> usize {
		self.writes
	}
}

impl ErrorType for FakePin {
	type Error = Infallible;
}

impl OutputPin for FakePin {
	fn set_low(&mut self) -> Result<(), Self::Error> {
		self.level = Some(PinState::Low);
		self.writes += 1;
		Ok(())
	}
	fn set_high(&mut self) -> Result<(), Self::Error> {
		self.level = Some(PinState::High);
		self.writes += 1;
		Ok(())
	}
}

/// Pin that accepts a fixed number of writes and fails after that.
pub struct FlakyPin {
	writes_left: usize,
}

impl FlakyPin {
	pub fn new(writes_left: usize) -> Self {
		Self { writes_left }
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct Broken;

impl embedded_hal::digital::Error for Broken {
	fn kind(&self) -> embedded_hal::digital::ErrorKind {
		embedded_hal::digital::ErrorKind::Other
	}
}

impl ErrorType for FlakyPin {
	type Error = Broken;
}

impl FlakyPin {
	fn write(&mut self) -> Result<(), Broken> {
		match self.writes_left.checked_sub(1) {
			Some(left) => {
				self.writes_left = left;
				Ok(())
			}
			None => Err(Broken),
		}
	}
}

impl OutputPin for FlakyPin {
	fn set_low(&mut self) -> Result<(), Self::Error> {
		self.write()
	}
	fn set_high(&mut self) -> Result<(), Self::Error> {
		self.write()
	}
}

/// Clock that only moves when told to.
pub struct ManualClock {
	pub now: Millis,
	pub reads: usize,
}

impl ManualClock {
	pub fn at(now: Millis) -> Self {
		Self { now, reads: 0 }
	}
	pub fn set(&mut self, now: Millis) {
		self.now = now;
	}
}

impl Clock for ManualClock {
	fn now(&mut self) -> Millis {
		self.reads += 1;
		self.now
	}
}

/// Records every event instead of printing it.
#[derive(Default)]
pub struct Recorder {
	pub events: Vec<(&'static str, Transition), 256>,
	pub banners: usize,
	pub configs: Vec<&'static str, 4>,
	pub initialized: usize,
}

impl Recorder {
	pub fn take(&mut self) -> Vec<(&'static str, Transition), 256> {
		core::mem::take(&mut self.events)
	}
}

impl Report for Recorder {
	fn banner(&mut self, first: &ChannelConfig, second: &ChannelConfig) {
		self.banners += 1;
		self.configs.push(first.label).unwrap();
		self.configs.push(second.label).unwrap();
	}
	fn initialized(&mut self) {
		self.initialized += 1;
	}
	fn transition(&mut self, label: &'static str, transition: Transition) {
		self.events.push((label, transition)).unwrap();
	}
}

/// Counts requested sleep time.
#[derive(Default)]
pub struct CountingDelay {
	pub total_ns: u64,
}

impl DelayNs for CountingDelay {
	fn delay_ns(&mut self, ns: u32) {
		self.total_ns += ns as u64;
	}
}
