/*!
 * Cycles two relays forever, each ON for ON_TIME_MS then OFF for OFF_TIME_MS.
 */
#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use embedded_hal::delay::DelayNs;
use panic_halt as _;
use relay_common::{Channel, Driver, SerialReport};
use schredder::{millis::millis_init, MillisClock, POLL_INTERVAL_MS, RELAY_1, RELAY_2, SERIAL_BAUD, STARTUP_SETTLE_MS};

#[arduino_hal::entry]
fn main() -> ! {
	let dp = arduino_hal::Peripherals::take().unwrap();
	let pins = arduino_hal::pins!(dp);
	let serial = arduino_hal::default_serial!(dp, pins, SERIAL_BAUD);
	let mut report = SerialReport::new(serial);
	let mut delay = arduino_hal::Delay::new();

	millis_init(dp.TC0);
	unsafe { avr_device::interrupt::enable() };

	delay.delay_ms(STARTUP_SETTLE_MS);

	// Both outputs go to their inactive level here, before anything is printed
	let relay_1 = Channel::new(pins.d13.into_output().downgrade(), RELAY_1).unwrap_infallible();
	let relay_2 = Channel::new(pins.a0.into_output().downgrade(), RELAY_2).unwrap_infallible();

	let mut driver = Driver::new(relay_1, relay_2).with_poll_interval(POLL_INTERVAL_MS);
	let mut clock = MillisClock;
	driver.start(&mut clock, &mut report).unwrap_infallible();

	match driver.run(&mut clock, &mut delay, &mut report).unwrap_infallible() {}
}
