//! Accepted values for the `nrg_bal_c` query dimensions.

/// Code and display label of a dimension value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
	pub code: &'static str,
	pub label: &'static str,
}

const fn choice(code: &'static str, label: &'static str) -> Choice {
	Choice { code, label }
}

pub const COUNTRIES: &[Choice] = &[
	choice("EU27_2020", "EU 27"),
	choice("EA20", "Euro area - 20"),
	choice("AT", "Austria"),
	choice("BE", "Belgium"),
	choice("BG", "Bulgaria"),
	choice("CY", "Cyprus"),
	choice("CZ", "Czechia"),
	choice("DE", "Germany"),
	choice("DK", "Denmark"),
	choice("EE", "Estonia"),
	choice("EL", "Greece"),
	choice("ES", "Spain"),
	choice("FI", "Finland"),
	choice("FR", "France"),
	choice("HR", "Croatia"),
	choice("HU", "Hungary"),
	choice("IE", "Ireland"),
	choice("IT", "Italy"),
	choice("LT", "Lithuania"),
	choice("LU", "Luxembourg"),
	choice("LV", "Latvia"),
	choice("MT", "Malta"),
	choice("NL", "Netherlands"),
	choice("PL", "Poland"),
	choice("PT", "Portugal"),
	choice("RO", "Romania"),
	choice("SE", "Sweden"),
	choice("SI", "Slovenia"),
	choice("SK", "Slovakia"),
];

pub const UNITS: &[Choice] = &[
	choice("KTOE", "KTOE (Thousand tonnes of oil equivalent)"),
	choice("TJ", "TJ (Terajoule)"),
	choice("GWH", "GWh (Gigawatt hour)"),
];

/// Energy balance items, used for the query and to name the root node.
pub const BALANCE_CODES: &[Choice] = &[
	choice("PPRD", "Primary production"),
	choice("RCV_RCY", "Recovered and recycled products"),
	choice("IMP", "Imports"),
	choice("EXP", "Exports"),
	choice("STK_CHG", "Change in stock"),
	choice("GAE", "Gross available energy"),
	choice("INTMARB", "International maritime bunkers"),
	choice("GIC", "Gross inland consumption"),
	choice("INTAVI", "International aviation"),
	choice("NRGSUP", "Total energy supply"),
	choice("GIC2020-2030", "Gross inland consumption (Europe 2020-2030)"),
	choice("PEC2020-2030", "Primary energy consumption (Europe 2020-2030)"),
	choice("FEC2020-2030", "Final energy consumption (Europe 2020-2030)"),
	choice("TI_E", "Transformation input - energy use"),
	choice("TO", "Transformation output"),
	choice("NRG_E", "Energy sector - energy use"),
	choice("DL", "Distribution losses"),
	choice("AFC", "Available for final consumption"),
	choice("FC_NE", "Final consumption - non-energy use"),
	choice("FC_E", "Final consumption - energy use"),
	choice("FC_IND_E", "Final consumption - industry sector - energy use"),
	choice("FC_TRA_E", "Final consumption - transport sector - energy use"),
	choice("FC_OTH_E", "Final consumption - other sectors - energy use"),
	choice("FC_OTH_HH_E", "Final consumption - households - energy use"),
	choice("FC_OTH_CP_E", "Final consumption - commercial and public services - energy use"),
	choice("FC_OTH_AF_E", "Final consumption - agriculture and forestry - energy use"),
	choice("STATDIFF", "Statistical differences"),
	choice("GEP", "Gross electricity production"),
	choice("GHP", "Gross heat production"),
];

/// Annual data is the only frequency published for `nrg_bal_c`.
pub const FREQUENCIES: &[Choice] = &[choice("A", "Annual")];

pub const FIRST_YEAR: u16 = 1990;
pub const LAST_YEAR: u16 = 2023;
pub const MAX_DECIMALS: u8 = 3;

pub fn find<'a>(choices: &'a [Choice], code: &str) -> Option<&'a Choice> {
	choices.iter().find(|c| c.code == code)
}

/// Human-readable name of an energy balance code.
pub fn balance_label(code: &str) -> Option<&'static str> {
	find(BALANCE_CODES, code).map(|c| c.label)
}

/// Years with published data, newest first.
pub fn years() -> impl Iterator<Item = u16> {
	(FIRST_YEAR..=LAST_YEAR).rev()
}
