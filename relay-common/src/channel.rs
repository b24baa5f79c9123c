use embedded_hal::digital::{OutputPin, PinState};

use crate::clock::{elapsed, Millis};

/// Which logic level energizes the relay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
	/// Most cheap relay modules, IN pulled low turns the coil on.
	ActiveLow,
	ActiveHigh,
}

impl Polarity {
	pub fn active_level(self) -> PinState {
		match self {
			Polarity::ActiveLow => PinState::Low,
			Polarity::ActiveHigh => PinState::High,
		}
	}
	pub fn inactive_level(self) -> PinState {
		!self.active_level()
	}
}

/// How long a channel stays in each state, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
	pub on_ms: Millis,
	pub off_ms: Millis,
}

impl Timing {
	pub const fn new(on_ms: Millis, off_ms: Millis) -> Self {
		Self { on_ms, off_ms }
	}
	/// A full ON + OFF cycle.
	pub const fn period_ms(&self) -> u64 {
		self.on_ms as u64 + self.off_ms as u64
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelConfig {
	/// Printed in front of every diagnostic line, ex. "RELAY 1".
	pub label: &'static str,
	/// GPIO number, only used for diagnostics.
	pub pin_id: u8,
	pub timing: Timing,
	pub polarity: Polarity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
	Engaged,
	Disengaged,
}

/// A state change performed by [`Channel::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
	On,
	Off,
}

impl Transition {
	pub fn as_str(self) -> &'static str {
		match self {
			Transition::On => "ON",
			Transition::Off => "OFF",
		}
	}
}

/// One relay output with its own ON/OFF timer.
///
/// The pin level always follows `engaged`, every write goes through
/// `set`.
pub struct Channel<P> {
	pin: P,
	config: ChannelConfig,
	engaged: bool,
	last_transition: Millis,
}

impl<P: OutputPin> Channel<P> {
	/// Takes the pin and drives it to the inactive level.
	pub fn new(pin: P, config: ChannelConfig) -> Result<Self, P::Error> {
		let mut channel = Channel {
			pin,
			config,
			engaged: false,
			last_transition: 0,
		};
		channel.write_level()?;
		Ok(channel)
	}

	pub fn engage(&mut self, now: Millis) -> Result<(), P::Error> {
		self.set(true, now)
	}

	/// Advances the timer, returns the transition if one happened.
	///
	/// At most one transition per call, a poll that comes in late only
	/// delays the next edge, it never skips a state.
	pub fn poll(&mut self, now: Millis) -> Result<Option<Transition>, P::Error> {
		let elapsed = self.elapsed(now);
		if self.engaged {
			if elapsed >= self.config.timing.on_ms {
				self.set(false, now)?;
				return Ok(Some(Transition::Off));
			}
		} else if elapsed >= self.config.timing.off_ms {
			self.set(true, now)?;
			return Ok(Some(Transition::On));
		}
		Ok(None)
	}

	fn set(&mut self, engaged: bool, now: Millis) -> Result<(), P::Error> {
		self.engaged = engaged;
		self.last_transition = now;
		self.write_level()
	}

	fn write_level(&mut self) -> Result<(), P::Error> {
		let level = if self.engaged {
			self.config.polarity.active_level()
		} else {
			self.config.polarity.inactive_level()
		};
		self.pin.set_state(level)
	}
}

impl<P> Channel<P> {
	pub fn is_engaged(&self) -> bool {
		self.engaged
	}
	pub fn state(&self) -> State {
		if self.engaged {
			State::Engaged
		} else {
			State::Disengaged
		}
	}
	pub fn last_transition(&self) -> Millis {
		self.last_transition
	}
	pub fn elapsed(&self, now: Millis) -> Millis {
		elapsed(now, self.last_transition)
	}
	pub fn config(&self) -> &ChannelConfig {
		&self.config
	}
	pub fn label(&self) -> &'static str {
		self.config.label
	}
	pub fn pin(&self) -> &P {
		&self.pin
	}
	/// Gives the pin back, leaving it at whatever level it was.
	pub fn release(self) -> P {
		self.pin
	}
}
