use core::convert::Infallible;

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
	channel::{Channel, Transition},
	clock::Clock,
	report::Report,
};

/// Pause between two polls. Only keeps the CPU from spinning, transitions
/// may land up to this late.
pub const POLL_INTERVAL_MS: u32 = 10;

/// Two independently timed relay channels.
///
/// Channel 1 is always polled before channel 2, which only shows in the
/// order of the diagnostic lines.
pub struct Driver<P> {
	channels: [Channel<P>; 2],
	poll_interval_ms: u32,
}

impl<P: OutputPin> Driver<P> {
	/// Channels are expected fresh from [`Channel::new`], sitting at their
	/// inactive level.
	pub fn new(first: Channel<P>, second: Channel<P>) -> Self {
		Self {
			channels: [first, second],
			poll_interval_ms: POLL_INTERVAL_MS,
		}
	}

	pub fn with_poll_interval(mut self, ms: u32) -> Self {
		self.poll_interval_ms = ms;
		self
	}

	/// Prints the startup block and turns both relays ON, both stamped with
	/// the same clock reading.
	pub fn start<C: Clock, R: Report>(&mut self, clock: &mut C, report: &mut R) -> Result<(), P::Error> {
		let [first, second] = &self.channels;
		report.banner(first.config(), second.config());
		report.initialized();

		let now = clock.now();
		for channel in self.channels.iter_mut() {
			channel.engage(now)?;
			report.transition(channel.label(), Transition::On);
		}
		Ok(())
	}

	/// One pass over both channels.
	pub fn poll<C: Clock, R: Report>(&mut self, clock: &mut C, report: &mut R) -> Result<(), P::Error> {
		for channel in self.channels.iter_mut() {
			let now = clock.now();
			if let Some(transition) = channel.poll(now)? {
				report.transition(channel.label(), transition);
			}
		}
		Ok(())
	}

	/// Polls forever. Only returns if a pin write fails, which can't happen
	/// with infallible pins.
	pub fn run<C, D, R>(&mut self, clock: &mut C, delay: &mut D, report: &mut R) -> Result<Infallible, P::Error>
	where
		C: Clock,
		D: DelayNs,
		R: Report,
	{
		loop {
			self.poll(clock, report)?;
			delay.delay_ms(self.poll_interval_ms);
		}
	}
}

impl<P> Driver<P> {
	pub fn channels(&self) -> &[Channel<P>; 2] {
		&self.channels
	}
	pub fn channel(&self, index: usize) -> Option<&Channel<P>> {
		self.channels.get(index)
	}
	pub fn poll_interval_ms(&self) -> u32 {
		self.poll_interval_ms
	}
	pub fn into_channels(self) -> [Channel<P>; 2] {
		self.channels
	}
}
