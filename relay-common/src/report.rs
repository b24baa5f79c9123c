use ufmt::{uDisplay, uWrite, uwrite, uwriteln, Formatter};

use crate::channel::{ChannelConfig, Transition};
use crate::clock::Millis;

/// Where the driver sends its diagnostics.
///
/// Purely informational, nothing the driver does depends on it.
pub trait Report {
	/// Title plus the pin and timing of both channels.
	fn banner(&mut self, first: &ChannelConfig, second: &ChannelConfig);
	/// Both outputs sit at their inactive level, the cycle is about to start.
	fn initialized(&mut self);
	fn transition(&mut self, label: &'static str, transition: Transition);
}

/// Milliseconds shown as seconds with one decimal, ex. `1950` -> `2.0`.
pub struct Tenths(pub Millis);

impl uDisplay for Tenths {
	fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
	where
		W: uWrite + ?Sized,
	{
		// rounded half up
		let tenths = (self.0 as u64 + 50) / 100;
		uwrite!(f, "{}.{}", tenths / 10, (tenths % 10) as u8)
	}
}

const RULE: &str = "=================================";

/// Plain text diagnostics over anything `ufmt` can write to, usually the
/// board's USART.
///
/// Write errors are dropped, a missing console must not stall the relays.
pub struct SerialReport<W> {
	serial: W,
}

impl<W: uWrite> SerialReport<W> {
	pub fn new(serial: W) -> Self {
		Self { serial }
	}
	pub fn serial(&mut self) -> &mut W {
		&mut self.serial
	}
	pub fn into_inner(self) -> W {
		self.serial
	}

	fn timing(&mut self, config: &ChannelConfig) {
		let t = config.timing;
		uwriteln!(&mut self.serial, "{} ON Time: {} ms ({} seconds)\r", config.label, t.on_ms, Tenths(t.on_ms)).ok();
		uwriteln!(&mut self.serial, "{} OFF Time: {} ms ({} seconds)\r", config.label, t.off_ms, Tenths(t.off_ms)).ok();
	}
}

impl<W: uWrite> Report for SerialReport<W> {
	fn banner(&mut self, first: &ChannelConfig, second: &ChannelConfig) {
		uwriteln!(&mut self.serial, "\r\n\r\n{}\r", RULE).ok();
		uwriteln!(&mut self.serial, "Dual Relay Controller\r").ok();
		uwriteln!(&mut self.serial, "{}\r", RULE).ok();
		for config in [first, second] {
			uwriteln!(&mut self.serial, "{} Pin: GPIO {}\r", config.label, config.pin_id).ok();
		}
		self.timing(first);
		self.timing(second);
		uwriteln!(&mut self.serial, "{}\r\n\r", RULE).ok();
	}

	fn initialized(&mut self) {
		uwriteln!(&mut self.serial, "Relays initialized to OFF state\r").ok();
		uwriteln!(&mut self.serial, "Starting relay control cycle...\r\n\r").ok();
	}

	fn transition(&mut self, label: &'static str, transition: Transition) {
		uwriteln!(&mut self.serial, "{}: {}\r", label, transition.as_str()).ok();
	}
}
