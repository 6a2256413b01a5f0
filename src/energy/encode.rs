//! Visual encoding of graph nodes: depth tier, marker size and colors.

use serde::Serialize;

/// Radius of the synthetic root marker.
pub const ROOT_RADIUS: f64 = 40.0;
/// Radius for any non-root node without a positive value.
pub const FALLBACK_RADIUS: f64 = 6.0;

/// EU palette used across the charts.
pub mod palette {
	pub const BLUE: &str = "#004494";
	pub const YELLOW: &str = "#FFC617";
	pub const DARK_BLUE: &str = "#0e47cb";
	pub const LIGHT_BLUE: &str = "#5bc0de";
	pub const GREY: &str = "#404040";
	pub const WHITE: &str = "#FFFFFF";
	pub const NO_DATA: &str = "#bdc3c7";
	pub const SUB_BORDER: &str = "rgba(0, 55, 118, 0.3)";
}

/// Where a node sits in the visual hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthTier {
	Root,
	MainCategory,
	/// Second level, or a first-level node outside the main categories.
	Branch,
	/// Third level and below.
	Detail,
}

impl DepthTier {
	pub fn classify(depth: usize, is_main_category: bool) -> Self {
		match depth {
			0 => DepthTier::Root,
			_ if is_main_category => DepthTier::MainCategory,
			1 | 2 => DepthTier::Branch,
			_ => DepthTier::Detail,
		}
	}
}

/// Min/max over the strictly positive values of one graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
	pub min: f64,
	pub max: f64,
}

impl ValueRange {
	/// `None` when no value is strictly positive.
	pub fn of_positive(values: impl IntoIterator<Item = f64>) -> Option<Self> {
		values
			.into_iter()
			.filter(|v| *v > 0.0)
			.fold(None, |range, v| match range {
				None => Some(ValueRange { min: v, max: v }),
				Some(r) => Some(ValueRange {
					min: r.min.min(v),
					max: r.max.max(v),
				}),
			})
	}

	/// Position of `value` in the range, 0 when the range has no width.
	pub fn normalize(&self, value: f64) -> f64 {
		let span = self.max - self.min;
		if span > 0.0 {
			(value - self.min) / span
		} else {
			0.0
		}
	}
}

/// Marker radius for a node of the given tier and value.
pub fn marker_radius(tier: DepthTier, value: f64, range: Option<ValueRange>) -> f64 {
	if tier == DepthTier::Root {
		return ROOT_RADIUS;
	}
	let Some(range) = range.filter(|_| value > 0.0) else {
		return FALLBACK_RADIUS;
	};
	let n = range.normalize(value);
	match tier {
		DepthTier::Root => ROOT_RADIUS,
		DepthTier::MainCategory => 15.0 + n * 25.0,
		DepthTier::Branch => (6.0 + n * 18.0).max(4.0),
		DepthTier::Detail => (4.0 + n * 12.0).max(3.0),
	}
}

/// Fill and border of a node marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
	pub fill: &'static str,
	pub stroke: &'static str,
	pub stroke_width: u8,
}

pub fn node_style(tier: DepthTier, value: f64) -> NodeStyle {
	match tier {
		DepthTier::Root => NodeStyle {
			fill: palette::WHITE,
			stroke: palette::BLUE,
			stroke_width: 4,
		},
		DepthTier::MainCategory => NodeStyle {
			fill: palette::YELLOW,
			stroke: palette::GREY,
			stroke_width: 2,
		},
		_ if value <= 0.0 => NodeStyle {
			fill: palette::NO_DATA,
			stroke: palette::SUB_BORDER,
			stroke_width: 1,
		},
		_ => NodeStyle {
			fill: palette::DARK_BLUE,
			stroke: palette::SUB_BORDER,
			stroke_width: 2,
		},
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(0, false, DepthTier::Root)]
	#[case(0, true, DepthTier::Root)]
	#[case(1, true, DepthTier::MainCategory)]
	#[case(1, false, DepthTier::Branch)]
	#[case(2, false, DepthTier::Branch)]
	#[case(3, false, DepthTier::Detail)]
	#[case(5, false, DepthTier::Detail)]
	fn tiers(#[case] depth: usize, #[case] main: bool, #[case] expected: DepthTier) {
		assert_eq!(DepthTier::classify(depth, main), expected);
	}

	#[test]
	fn range_ignores_non_positive_values() {
		let range = ValueRange::of_positive([0.0, -3.0, 2.0, 8.0]).unwrap();
		assert_eq!(range, ValueRange { min: 2.0, max: 8.0 });
		assert_eq!(ValueRange::of_positive([0.0, -1.0]), None);
	}

	#[test]
	fn flat_range_normalizes_to_zero() {
		let range = ValueRange::of_positive([5.0, 5.0]).unwrap();
		assert_eq!(range.normalize(5.0), 0.0);
		let radius = marker_radius(DepthTier::MainCategory, 5.0, Some(range));
		assert_eq!(radius, 15.0);
	}

	#[test]
	fn bands_shrink_with_depth() {
		let range = Some(ValueRange { min: 0.0, max: 10.0 });
		let main = marker_radius(DepthTier::MainCategory, 10.0, range);
		let branch = marker_radius(DepthTier::Branch, 10.0, range);
		let detail = marker_radius(DepthTier::Detail, 10.0, range);
		assert_eq!(main, 40.0);
		assert_eq!(branch, 24.0);
		assert_eq!(detail, 16.0);
		assert!(main > branch && branch > detail);
	}

	#[test]
	fn root_and_fallback_are_fixed() {
		assert_eq!(marker_radius(DepthTier::Root, -1.0, None), ROOT_RADIUS);
		assert_eq!(marker_radius(DepthTier::Branch, 0.0, None), FALLBACK_RADIUS);
		let range = Some(ValueRange { min: 1.0, max: 2.0 });
		assert_eq!(marker_radius(DepthTier::Detail, -7.0, range), FALLBACK_RADIUS);
	}

	#[test]
	fn styles_follow_tier_and_data() {
		assert_eq!(node_style(DepthTier::Root, 0.0).fill, palette::WHITE);
		assert_eq!(node_style(DepthTier::MainCategory, 0.0).fill, palette::YELLOW);
		assert_eq!(node_style(DepthTier::Detail, 0.0).fill, palette::NO_DATA);
		assert_eq!(node_style(DepthTier::Detail, 1.0).fill, palette::DARK_BLUE);
	}
}
