//! Query parameters for one `nrg_bal_c` request.

use log::warn;
use serde::Serialize;

use super::catalog::{
	BALANCE_CODES, COUNTRIES, Choice, FIRST_YEAR, FREQUENCIES, LAST_YEAR, MAX_DECIMALS, UNITS,
	balance_label, find,
};
use crate::energy::DEFAULT_ROOT_LABEL;

/// One set of dataset filters. `decimals` only affects display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryConfig {
	pub geo: String,
	pub time: String,
	pub unit: String,
	pub nrg_bal: String,
	pub freq: String,
	pub decimals: u8,
}

impl Default for QueryConfig {
	fn default() -> Self {
		Self {
			geo: "EU27_2020".into(),
			time: LAST_YEAR.to_string(),
			unit: "KTOE".into(),
			nrg_bal: "NRGSUP".into(),
			freq: "A".into(),
			decimals: 1,
		}
	}
}

impl QueryConfig {
	/// Builds a config from named parameters, e.g. the page query string.
	///
	/// Missing parameters keep their default; invalid ones are logged and
	/// replaced by the default.
	pub fn from_params(param: impl Fn(&str) -> Option<String>) -> Self {
		let defaults = Self::default();
		let pick = |key: &str, choices: &[Choice], default: String| match param(key) {
			Some(v) if find(choices, &v).is_some() => v,
			Some(v) => {
				warn!("ignoring unknown {key}={v:?}, using {default}");
				default
			}
			None => default,
		};

		let time = match param("time") {
			Some(v) if is_valid_year(&v) => v,
			Some(v) => {
				warn!("ignoring time={v:?}, using {}", defaults.time);
				defaults.time
			}
			None => defaults.time,
		};
		let decimals = match param("decimals").map(|v| v.parse::<u8>()) {
			Some(Ok(d)) if d <= MAX_DECIMALS => d,
			Some(_) => {
				warn!("ignoring decimals, using {}", defaults.decimals);
				defaults.decimals
			}
			None => defaults.decimals,
		};

		Self {
			geo: pick("geo", COUNTRIES, defaults.geo),
			time,
			unit: pick("unit", UNITS, defaults.unit),
			nrg_bal: pick("nrg_bal", BALANCE_CODES, defaults.nrg_bal),
			freq: pick("freq", FREQUENCIES, defaults.freq),
			decimals,
		}
	}

	/// Parameters sent to the API.
	pub fn request_params(&self) -> [(&'static str, &str); 5] {
		[
			("time", self.time.as_str()),
			("geo", self.geo.as_str()),
			("unit", self.unit.as_str()),
			("nrg_bal", self.nrg_bal.as_str()),
			("freq", self.freq.as_str()),
		]
	}

	/// Label for the graph root: the balance name, or a generic label.
	pub fn root_label(&self) -> &'static str {
		balance_label(&self.nrg_bal).unwrap_or(DEFAULT_ROOT_LABEL)
	}

	pub fn subtitle(&self) -> String {
		format!("{} • {} • {} ({})", self.geo, self.time, self.unit, self.nrg_bal)
	}

	pub fn format_value(&self, value: f64) -> String {
		format!("{:.*} {}", self.decimals as usize, value, self.unit)
	}
}

fn is_valid_year(value: &str) -> bool {
	value.len() == 4
		&& value
			.parse::<u16>()
			.is_ok_and(|y| (FIRST_YEAR..=LAST_YEAR).contains(&y))
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use rstest::rstest;

	use super::*;

	fn from_pairs(pairs: &[(&str, &str)]) -> QueryConfig {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		QueryConfig::from_params(|key| map.get(key).cloned())
	}

	#[test]
	fn no_params_gives_defaults() {
		assert_eq!(from_pairs(&[]), QueryConfig::default());
	}

	#[test]
	fn valid_params_are_taken() {
		let config = from_pairs(&[
			("geo", "DE"),
			("time", "2021"),
			("unit", "GWH"),
			("nrg_bal", "GIC"),
			("decimals", "3"),
		]);
		assert_eq!(config.geo, "DE");
		assert_eq!(config.time, "2021");
		assert_eq!(config.unit, "GWH");
		assert_eq!(config.nrg_bal, "GIC");
		assert_eq!(config.decimals, 3);
		assert_eq!(config.root_label(), "Gross inland consumption");
	}

	#[rstest]
	#[case("geo", "XX")]
	#[case("time", "1989")]
	#[case("time", "20231")]
	#[case("unit", "MWH")]
	#[case("nrg_bal", "NOPE")]
	#[case("freq", "M")]
	#[case("decimals", "9")]
	#[case("decimals", "-1")]
	fn invalid_params_fall_back(#[case] key: &str, #[case] value: &str) {
		assert_eq!(from_pairs(&[(key, value)]), QueryConfig::default());
	}

	#[test]
	fn decimals_are_not_sent() {
		let config = QueryConfig::default();
		let keys: Vec<_> = config.request_params().iter().map(|(k, _)| *k).collect();
		assert_eq!(keys, ["time", "geo", "unit", "nrg_bal", "freq"]);
	}

	#[test]
	fn display_helpers() {
		let config = QueryConfig::default();
		assert_eq!(config.subtitle(), "EU27_2020 • 2023 • KTOE (NRGSUP)");
		assert_eq!(config.format_value(1234.56), "1234.6 KTOE");
		assert_eq!(config.root_label(), "Total energy supply");
	}
}
