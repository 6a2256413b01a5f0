use std::cell::Cell;
use std::rc::Rc;

/// Generation counter shared by every request issued from one view.
///
/// Each request takes a token when it starts; its response is only applied
/// if no newer request was issued in the meantime.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
	latest: Rc<Cell<u64>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestTracker {
	/// Starts a new generation, superseding every earlier token.
	pub fn issue(&self) -> RequestToken {
		let next = self.latest.get().wrapping_add(1);
		self.latest.set(next);
		RequestToken(next)
	}

	pub fn is_current(&self, token: RequestToken) -> bool {
		self.latest.get() == token.0
	}
}
