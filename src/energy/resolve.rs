//! Per-node values for the taxonomy.
//!
//! A direct observation always wins. Aggregates without one take the sum of
//! their children, and products without one are worth zero.

use std::collections::HashMap;

use log::debug;

use super::taxonomy::{TOTAL_ID, TaxonomyNode};

/// Sparse observations keyed by SIEC code, as decoded from the dataset.
pub type ValueBySiec = HashMap<String, f64>;

/// A value for every node of a taxonomy forest, plus the synthetic root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedValues {
	values: HashMap<&'static str, f64>,
}

impl ResolvedValues {
	pub fn get(&self, id: &str) -> Option<f64> {
		self.values.get(id).copied()
	}

	/// Value for `id`, zero when the id is not part of the taxonomy.
	pub fn value_of(&self, id: &str) -> f64 {
		self.get(id).unwrap_or(0.0)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
		self.values.iter().map(|(id, v)| (*id, *v))
	}
}

/// Resolves a value for every node of `forest` and for [`TOTAL_ID`].
///
/// Codes in `observations` that are not part of the taxonomy are ignored.
/// Negative observations are carried through as-is.
pub fn resolve(forest: &[TaxonomyNode], observations: &ValueBySiec) -> ResolvedValues {
	let mut values = HashMap::new();
	if forest.is_empty() {
		return ResolvedValues { values };
	}

	let children_sum = forest
		.iter()
		.fold(0.0, |acc, node| acc + resolve_into(node, observations, &mut values));
	let total = observations.get(TOTAL_ID).copied().unwrap_or(children_sum);
	values.insert(TOTAL_ID, total);

	debug!(
		"resolved {} nodes from {} observations (total {})",
		values.len(),
		observations.len(),
		total
	);
	ResolvedValues { values }
}

// Post-order: children are written before their parent, each node exactly once.
fn resolve_into(
	node: &TaxonomyNode,
	observations: &ValueBySiec,
	values: &mut HashMap<&'static str, f64>,
) -> f64 {
	if let Some(&cached) = values.get(node.id) {
		return cached;
	}

	let children_sum = node
		.children
		.iter()
		.fold(0.0, |acc, child| acc + resolve_into(child, observations, values));
	let value = observations.get(node.id).copied().unwrap_or(children_sum);

	values.insert(node.id, value);
	value
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::energy::taxonomy::FUEL_FAMILIES;

	const FOREST: &[TaxonomyNode] = &[TaxonomyNode {
		id: "ROOT",
		name: "Root",
		children: &[
			TaxonomyNode {
				id: "P",
				name: "Parent",
				children: &[
					TaxonomyNode {
						id: "A",
						name: "A",
						children: &[],
					},
					TaxonomyNode {
						id: "B",
						name: "B",
						children: &[],
					},
				],
			},
			TaxonomyNode {
				id: "Q",
				name: "Empty aggregate",
				children: &[TaxonomyNode {
					id: "C",
					name: "C",
					children: &[],
				}],
			},
		],
	}];

	fn observations(pairs: &[(&str, f64)]) -> ValueBySiec {
		pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
	}

	fn check_sums(forest: &[TaxonomyNode], obs: &ValueBySiec, resolved: &ResolvedValues) {
		for node in forest {
			let value = resolved.value_of(node.id);
			if !obs.contains_key(node.id) {
				let sum: f64 = node.children.iter().map(|c| resolved.value_of(c.id)).sum();
				assert_eq!(value, sum, "{} should be the sum of its children", node.id);
			}
			check_sums(node.children, obs, resolved);
		}
	}

	#[test]
	fn sibling_without_observation_counts_as_zero() {
		let resolved = resolve(FOREST, &observations(&[("A", 10.0)]));
		assert_eq!(resolved.get("P"), Some(10.0));
		assert_eq!(resolved.get("B"), Some(0.0));
	}

	#[test]
	fn sums_propagate_through_every_level() {
		let resolved = resolve(FOREST, &observations(&[("A", 3.0), ("B", 7.0)]));
		assert_eq!(resolved.get("P"), Some(10.0));
		assert_eq!(resolved.get("ROOT"), Some(10.0));
		assert_eq!(resolved.get(TOTAL_ID), Some(10.0));
	}

	#[test]
	fn direct_observation_beats_children() {
		let resolved = resolve(
			FOREST,
			&observations(&[("A", 3.0), ("B", 7.0), ("P", 0.0)]),
		);
		assert_eq!(resolved.get("P"), Some(0.0));
		assert_eq!(resolved.get("A"), Some(3.0));
		assert_eq!(resolved.get("ROOT"), Some(0.0));
	}

	#[test]
	fn total_observation_is_used_for_the_root() {
		let resolved = resolve(FOREST, &observations(&[("A", 3.0), (TOTAL_ID, 42.0)]));
		assert_eq!(resolved.get(TOTAL_ID), Some(42.0));
		assert_eq!(resolved.get("ROOT"), Some(3.0));
	}

	#[test]
	fn negative_values_are_not_clamped() {
		let resolved = resolve(FOREST, &observations(&[("A", -4.5), ("B", 1.5)]));
		assert_eq!(resolved.get("P"), Some(-3.0));
	}

	#[test]
	fn unknown_codes_are_ignored() {
		let resolved = resolve(FOREST, &observations(&[("ZZZ", 99.0), ("A", 1.0)]));
		assert_eq!(resolved.get("ZZZ"), None);
		assert_eq!(resolved.len(), 7);
	}

	#[test]
	fn empty_forest_resolves_to_nothing() {
		let resolved = resolve(&[], &observations(&[("A", 1.0)]));
		assert!(resolved.is_empty());
	}

	#[rstest]
	#[case(&[])]
	#[case(&[("A", 10.0)])]
	#[case(&[("C", 2.0), ("B", -1.0)])]
	#[case(&[("Q", 5.0), ("C", 2.0)])]
	fn resolution_is_idempotent_and_consistent(#[case] pairs: &[(&str, f64)]) {
		let obs = observations(pairs);
		let first = resolve(FOREST, &obs);
		assert_eq!(first, resolve(FOREST, &obs));
		check_sums(FOREST, &obs, &first);
		for leaf in ["A", "B", "C"] {
			if !obs.contains_key(leaf) {
				assert_eq!(first.get(leaf), Some(0.0));
			}
		}
	}

	#[test]
	fn full_taxonomy_sums_without_observations() {
		let obs = observations(&[("C0110", 12.0), ("RA300", 30.0), ("E7000", -2.0)]);
		let resolved = resolve(FUEL_FAMILIES, &obs);
		check_sums(FUEL_FAMILIES, &obs, &resolved);
		assert_eq!(resolved.get("FE"), Some(12.0));
		assert_eq!(resolved.get("RA000"), Some(30.0));
		assert_eq!(resolved.get(TOTAL_ID), Some(40.0));
	}
}
