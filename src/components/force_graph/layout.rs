use std::f64::consts::PI;

use crate::energy::GraphNode;

/// Starting point of a node before the simulation runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
	pub x: f32,
	pub y: f32,
	/// Anchored nodes are not moved by the simulation.
	pub anchored: bool,
}

/// Initial positions, in graph space centered on the origin.
///
/// The root is pinned at the origin, main categories are spread evenly on a
/// ring around it and every other node starts scattered near the center.
pub fn radial_seed(nodes: &[GraphNode], width: f64, height: f64) -> Vec<Placement> {
	let extent = width.min(height);
	let (ring, spread) = (extent * 0.1, extent * 0.15);
	let mains = nodes.iter().filter(|n| n.is_main_category).count().max(1);
	let step = 2.0 * PI / mains as f64;

	let mut main_index = 0;
	nodes
		.iter()
		.enumerate()
		.map(|(i, node)| {
			if node.is_root() {
				Placement {
					x: 0.0,
					y: 0.0,
					anchored: true,
				}
			} else if node.is_main_category {
				let angle = main_index as f64 * step;
				main_index += 1;
				Placement {
					x: (ring * angle.cos()) as f32,
					y: (ring * angle.sin()) as f32,
					anchored: false,
				}
			} else {
				Placement {
					x: ((rand_simple(i) - 0.5) * spread) as f32,
					y: ((rand_simple(i * 7 + 3) - 0.5) * spread) as f32,
					anchored: false,
				}
			}
		})
		.collect()
}

/// Simple pseudo-random number in `[0, 1)` (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}
