/// Milliseconds since boot, as read from a free running 32 bit counter.
///
/// The counter rolls over after ~49.7 days, only ever compare readings
/// with [`elapsed`].
pub type Millis = u32;

/// Monotonic millisecond time source.
pub trait Clock {
	fn now(&mut self) -> Millis;
}

impl<F: FnMut() -> Millis> Clock for F {
	fn now(&mut self) -> Millis {
		self()
	}
}

/// Time from `since` to `now`, correct across a single counter rollover.
#[inline]
pub fn elapsed(now: Millis, since: Millis) -> Millis {
	now.wrapping_sub(since)
}
