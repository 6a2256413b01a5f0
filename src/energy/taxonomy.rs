//! Static SIEC product hierarchy used to shape the energy network.
//!
//! The hierarchy follows the Eurostat `nrg_bal_c` product structure: the
//! synthetic [`TOTAL_ID`] root sits above six first-level families, which
//! break down into aggregates and individual products.

/// Id of the synthetic root joining every top-level family.
pub const TOTAL_ID: &str = "TOTAL";

/// Ids promoted to "main category" in the graph.
///
/// Hand-maintained: it has to be kept in step with the first level of
/// [`FUEL_FAMILIES`]. The graph builder warns when an id listed here is not
/// found at depth 1.
pub const MAIN_CATEGORIES: &[&str] = &["FE", "RA000", "N900H", "E7000", "H8000", "W6100_6220"];

/// A product code in the SIEC hierarchy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaxonomyNode {
	pub id: &'static str,
	pub name: &'static str,
	pub children: &'static [TaxonomyNode],
}

impl TaxonomyNode {
	/// Leaf nodes are individual products; everything else is an aggregate.
	pub const fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}
}

/// Returns true if `id` is one of the configured main categories.
pub fn is_main_category(id: &str) -> bool {
	MAIN_CATEGORIES.contains(&id)
}

/// Number of nodes in a forest, not counting the synthetic root.
pub fn node_count(forest: &[TaxonomyNode]) -> usize {
	forest.iter().map(|n| 1 + node_count(n.children)).sum()
}

/// Builds a [`TaxonomyNode`] literal: `node!(id, name)` for a product,
/// `node!(id, name, [children..])` for an aggregate.
macro_rules! node {
	($id:literal, $name:literal) => {
		TaxonomyNode {
			id: $id,
			name: $name,
			children: &[],
		}
	};
	($id:literal, $name:literal, [$($child:expr),* $(,)?]) => {
		TaxonomyNode {
			id: $id,
			name: $name,
			children: &[$($child),*],
		}
	};
}

/// The fuel families, in display order.
pub static FUEL_FAMILIES: &[TaxonomyNode] = &[
	node!("FE", "Fossil Energy", [
		node!("C0000X0350-0370", "Solid Fossil Fuels", [
			node!("C0110", "Anthracite"),
			node!("C0121", "Coking Coal"),
			node!("C0129", "Other Bituminous Coal"),
			node!("C0210", "Sub-bituminous Coal"),
			node!("C0220", "Lignite"),
			node!("C0311", "Coke Oven Coke"),
			node!("C0312", "Gas Coke"),
			node!("C0320", "Patent Fuel"),
			node!("C0330", "Brown Coal Briquettes"),
			node!("C0340", "Coal Tar"),
			node!("C0350-0370", "Manufactured Gases", [
				node!("C0350", "Coke Oven Gas"),
				node!("C0360", "Gas Works Gas"),
				node!("C0371", "Blast Furnace Gas"),
				node!("C0379", "Other Recovered Gases"),
			]),
		]),
		node!("P1000", "Peat & Peat Products", [
			node!("P1100", "Peat"),
			node!("P1200", "Peat Products"),
		]),
		node!("S2000", "Oil Shale & Oil Sands"),
		node!("G3000", "Natural Gas"),
		node!("O4000XBIO", "Oil & Petroleum Products", [
			node!("O4100_TOT", "Crude Oil"),
			node!("O4200", "Natural Gas Liquids"),
			node!("O4300", "Refinery Feedstocks"),
			node!("O4400X4410", "Additives & Oxygenates"),
			node!("O4500", "Other Hydrocarbons"),
			node!("O4610", "Refinery Gas"),
			node!("O4620", "Ethane"),
			node!("O4630", "Liquefied Petroleum Gases"),
			node!("O4640", "Naphtha"),
			node!("O4651", "Aviation Gasoline"),
			node!("O4652XR5210B", "Motor Gasoline"),
			node!("O4653", "Gasoline-type Jet Fuel"),
			node!("O4661XR5230B", "Kerosene-type Jet Fuel"),
			node!("O4669", "Other Kerosene"),
			node!("O4671XR5220B", "Gas Oil & Diesel Oil"),
			node!("O4680", "Fuel Oil"),
			node!("O4691", "White Spirit & SBP Spirits"),
			node!("O4692", "Lubricants"),
			node!("O4693", "Paraffin Waxes"),
			node!("O4694", "Petroleum Coke"),
			node!("O4695", "Bitumen"),
			node!("O4699", "Other Oil Products"),
		]),
	]),
	node!("RA000", "Renewables & Biofuels", [
		node!("RA100", "Hydro"),
		node!("RA200", "Geothermal"),
		node!("RA300", "Wind"),
		node!("RA410", "Solar Thermal"),
		node!("RA420", "Solar Photovoltaic"),
		node!("RA500", "Tide, Wave, Ocean"),
		node!("RA600", "Ambient Heat (Heat Pumps)"),
		node!("BIOE", "Bioenergy", [
			node!("R5110-5150_W6000RI", "Primary Solid Biofuels"),
			node!("R5160", "Charcoal"),
			node!("R5210P", "Pure Biogasoline"),
			node!("R5210B", "Blended Biogasoline"),
			node!("R5220P", "Pure Biodiesels"),
			node!("R5220B", "Blended Biodiesels"),
			node!("R5230P", "Pure Bio Jet Kerosene"),
			node!("R5230B", "Blended Bio Jet Kerosene"),
			node!("R5290", "Other Liquid Biofuels"),
			node!("R5300", "Biogases"),
		]),
	]),
	node!("W6100_6220", "Non-Renewable Waste", [
		node!("W6100", "Industrial Waste"),
		node!("W6210", "Renewable Municipal Waste"),
		node!("W6220", "Non-renewable Municipal Waste"),
	]),
	node!("N900H", "Nuclear Heat"),
	node!("E7000", "Electricity"),
	node!("H8000", "Heat"),
];
