//! Arduino style `millis()` on TC0.

use core::cell;

use avr_device::interrupt::{self, Mutex};

// With a clock of 16MHz a prescaler of 64 and a count of 250
// This will run every `1 / (16_000_000 / 64 / 250)` = `1ms`
const PRESCALER: u32 = 64;
const TIMER_COUNTS: u32 = 250;
const MILLIS_INCREMENT: u32 = PRESCALER * TIMER_COUNTS / 16_000;

/// Rolls over after ~49.7 days, readers only ever subtract.
static MILLIS_COUNTER: Mutex<cell::Cell<u32>> = Mutex::new(cell::Cell::new(0));

pub fn millis_init(tc0: arduino_hal::pac::TC0) {
	// Configure the timer for the above interval (in CTC mode)
	// and enable its interrupt.
	tc0.tccr0a().write(|w| w.wgm0().ctc());
	tc0.ocr0a().write(|w| w.set(TIMER_COUNTS as u8 - 1));
	tc0.tccr0b().write(|w| match PRESCALER {
		8 => w.cs0().prescale_8(),
		64 => w.cs0().prescale_64(),
		256 => w.cs0().prescale_256(),
		1024 => w.cs0().prescale_1024(),
		_ => panic!(),
	});
	tc0.timsk0().write(|w| w.ocie0a().set_bit());

	// Reset the global millisecond counter
	interrupt::free(|cs| {
		MILLIS_COUNTER.borrow(cs).set(0);
	});
}

#[avr_device::interrupt(atmega328p)]
fn TIMER0_COMPA() {
	interrupt::free(|cs| {
		let counter_cell = MILLIS_COUNTER.borrow(cs);
		let counter = counter_cell.get();
		counter_cell.set(counter.wrapping_add(MILLIS_INCREMENT));
	})
}

pub fn millis() -> u32 {
	interrupt::free(|cs| MILLIS_COUNTER.borrow(cs).get())
}
