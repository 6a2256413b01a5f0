//! Value-to-pixel scales.

/// Maps a value domain linearly onto an output range, clamping at the ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	domain: (f64, f64),
	range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	/// Scale whose domain spans the given values (empty input → `(0, 0)`).
	pub fn fit(values: impl IntoIterator<Item = f64>, range: (f64, f64)) -> Self {
		let domain = values
			.into_iter()
			.filter(|v| v.is_finite())
			.fold(None, |acc: Option<(f64, f64)>, v| match acc {
				None => Some((v, v)),
				Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
			})
			.unwrap_or((0.0, 0.0));
		Self::new(domain, range)
	}

	/// A flat domain maps everything onto the start of the range.
	pub fn apply(&self, value: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		let span = d1 - d0;
		if span <= 0.0 || !value.is_finite() {
			return r0;
		}
		let t = ((value - d0) / span).clamp(0.0, 1.0);
		r0 + t * (r1 - r0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn maps_and_clamps() {
		let scale = LinearScale::new((0.0, 10.0), (1.0, 3.0));
		assert_eq!(scale.apply(5.0), 2.0);
		assert_eq!(scale.apply(-4.0), 1.0);
		assert_eq!(scale.apply(40.0), 3.0);
	}

	#[test]
	fn flat_or_empty_domain() {
		let flat = LinearScale::fit([2.0, 2.0], (1.0, 4.0));
		assert_eq!(flat.apply(2.0), 1.0);
		let empty = LinearScale::fit([], (1.0, 4.0));
		assert_eq!(empty.apply(7.0), 1.0);
	}

	#[test]
	fn fit_spans_the_input() {
		let scale = LinearScale::fit([3.0, 1.0, f64::NAN, 5.0], (0.0, 1.0));
		assert_eq!(scale.apply(3.0), 0.5);
	}
}
