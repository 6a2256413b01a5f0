//! JSON-stat dataset as returned by the Eurostat dissemination API.
//!
//! Only the product (`siec`) dimension is read. Everything here is lenient:
//! an unexpected shape turns into an empty set of observations, never an
//! error, so the rest of the pipeline can still run.

use std::collections::HashMap;

use log::{debug, error, warn};
use serde::Deserialize;

use crate::energy::ValueBySiec;

/// Name of the product-code dimension.
pub const PRODUCT_DIMENSION: &str = "siec";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawDataset {
	#[serde(default)]
	pub value: Values,
	#[serde(default)]
	pub dimension: HashMap<String, Dimension>,
	/// Dimension order, for decoding linear indices.
	#[serde(default)]
	pub id: Vec<String>,
	/// Category count per dimension, same order as `id`.
	#[serde(default)]
	pub size: Vec<usize>,
}

/// Observations: either sparse (`{"3": 1.5}`) or dense (`[null, 1.5]`).
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Values {
	Sparse(HashMap<String, Option<f64>>),
	Dense(Vec<Option<f64>>),
}

impl Default for Values {
	fn default() -> Self {
		Values::Sparse(HashMap::new())
	}
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Dimension {
	#[serde(default)]
	pub category: Category,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Category {
	#[serde(default)]
	pub index: CategoryIndex,
}

/// Code positions: `{"C0110": 0}` or the codes in order.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryIndex {
	Positions(HashMap<String, usize>),
	Ordered(Vec<String>),
}

impl Default for CategoryIndex {
	fn default() -> Self {
		CategoryIndex::Positions(HashMap::new())
	}
}

impl CategoryIndex {
	fn codes_by_position(&self) -> HashMap<usize, &str> {
		match self {
			CategoryIndex::Positions(map) => {
				map.iter().map(|(code, pos)| (*pos, code.as_str())).collect()
			}
			CategoryIndex::Ordered(codes) => {
				codes.iter().enumerate().map(|(pos, code)| (pos, code.as_str())).collect()
			}
		}
	}
}

impl RawDataset {
	/// Decodes a parsed response, falling back to an empty dataset.
	pub fn from_json(json: serde_json::Value) -> Self {
		match serde_json::from_value(json) {
			Ok(dataset) => dataset,
			Err(err) => {
				error!("unexpected dataset shape: {err}");
				Self::default()
			}
		}
	}

	fn observations(&self) -> Vec<(usize, f64)> {
		match &self.value {
			Values::Sparse(map) => map
				.iter()
				.filter_map(|(key, value)| match (key.parse::<usize>(), value) {
					(Ok(index), Some(v)) => Some((index, *v)),
					(Err(_), _) => {
						warn!("skipping observation with index {key:?}");
						None
					}
					(Ok(_), None) => None,
				})
				.collect(),
			Values::Dense(values) => values
				.iter()
				.enumerate()
				.filter_map(|(index, value)| value.map(|v| (index, v)))
				.collect(),
		}
	}

	/// Maps every observation to its product code.
	///
	/// When `id`/`size` describe the cube, the linear index is decoded
	/// row-major and only the first category of every other dimension is
	/// kept. Without them the linear index is the product position itself.
	pub fn value_by_siec(&self) -> ValueBySiec {
		let Some(siec) = self.dimension.get(PRODUCT_DIMENSION) else {
			error!("No SIEC dimension found");
			return ValueBySiec::new();
		};
		let codes = siec.category.index.codes_by_position();
		let layout = match CubeLayout::new(&self.id, &self.size, PRODUCT_DIMENSION) {
			Ok(layout) => layout,
			Err(reason) => {
				error!("unusable dataset layout: {reason}");
				return ValueBySiec::new();
			}
		};

		let mut values = ValueBySiec::new();
		for (index, value) in self.observations() {
			let position = match &layout {
				Some(layout) => match layout.product_position(index) {
					Some(p) => p,
					None => continue,
				},
				None => index,
			};
			if let Some(code) = codes.get(&position) {
				values.insert((*code).to_string(), value);
			}
		}

		debug!("parsed {} values by SIEC", values.len());
		values
	}
}

/// Row-major layout of a JSON-stat cube around the product dimension.
struct CubeLayout {
	strides: Vec<usize>,
	sizes: Vec<usize>,
	product_axis: usize,
}

impl CubeLayout {
	/// `Ok(None)` when `ids`/`sizes` do not describe a cube around `product`.
	fn new(ids: &[String], sizes: &[usize], product: &str) -> Result<Option<Self>, &'static str> {
		if ids.is_empty() || ids.len() != sizes.len() {
			return Ok(None);
		}
		let Some(product_axis) = ids.iter().position(|id| id == product) else {
			return Ok(None);
		};
		if sizes.contains(&0) {
			return Err("a dimension has no categories");
		}

		let mut strides = vec![1usize; sizes.len()];
		for axis in (0..sizes.len() - 1).rev() {
			strides[axis] = strides[axis + 1]
				.checked_mul(sizes[axis + 1])
				.ok_or("dimension sizes overflow")?;
		}
		if sizes
			.iter()
			.enumerate()
			.any(|(axis, size)| axis != product_axis && *size > 1)
		{
			warn!("dataset has several categories outside {product}, keeping the first of each");
		}

		Ok(Some(Self {
			strides,
			sizes: sizes.to_vec(),
			product_axis,
		}))
	}

	// sizes and strides are never zero once the layout is built
	fn coordinate(&self, index: usize, axis: usize) -> usize {
		(index / self.strides[axis]) % self.sizes[axis]
	}

	fn product_position(&self, index: usize) -> Option<usize> {
		let off_product = (0..self.sizes.len())
			.filter(|axis| *axis != self.product_axis)
			.any(|axis| self.coordinate(index, axis) != 0);
		(!off_product).then(|| self.coordinate(index, self.product_axis))
	}
}
