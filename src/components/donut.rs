//! Monochrome-blue donut chart, rendered as inline SVG.

use std::f64::consts::PI;
use std::fmt::Write;

use leptos::prelude::*;

use crate::energy::EnergyGraph;
use crate::energy::encode::palette;

#[derive(Clone, Debug, PartialEq)]
pub struct DonutItem {
	pub id: String,
	pub name: String,
	pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonutOptions {
	pub size: f64,
	/// Inner (hole) radius before padding.
	pub inner: f64,
	pub pad: f64,
	/// Id or name of the slice to pull out.
	pub highlight: Option<String>,
	pub decimals: u8,
}

impl Default for DonutOptions {
	fn default() -> Self {
		Self {
			size: 100.0,
			inner: 38.0,
			pad: 6.0,
			highlight: None,
			decimals: 0,
		}
	}
}

/// Main categories with data, one slice each.
pub fn main_category_shares(graph: &EnergyGraph) -> Vec<DonutItem> {
	graph
		.main_categories()
		.map(|n| DonutItem {
			id: n.id.to_string(),
			name: n.name.clone(),
			value: n.value,
		})
		.collect()
}

fn hex_to_rgb(hex: &str) -> [u8; 3] {
	let hex = hex.trim_start_matches('#');
	let channel = |i: usize| {
		hex.get(i..i + 2)
			.and_then(|h| u8::from_str_radix(h, 16).ok())
			.unwrap_or(0)
	};
	[channel(0), channel(2), channel(4)]
}

/// `count` shades from light to dark blue.
pub fn blue_shades(count: usize) -> Vec<String> {
	if count <= 1 {
		return vec![palette::DARK_BLUE.to_string()];
	}
	let (start, end) = (hex_to_rgb(palette::LIGHT_BLUE), hex_to_rgb(palette::DARK_BLUE));
	(0..count)
		.map(|i| {
			let t = i as f64 / (count - 1) as f64;
			let mix = |c: usize| (start[c] as f64 + (end[c] as f64 - start[c] as f64) * t).round() as u8;
			format!("#{:02x}{:02x}{:02x}", mix(0), mix(1), mix(2))
		})
		.collect()
}

fn is_highlighted(item: &DonutItem, highlight: Option<&str>) -> bool {
	highlight.is_some_and(|h| item.id == h || item.name == h)
}

/// Renders the donut as a standalone SVG document.
pub fn donut_svg(items: &[DonutItem], options: &DonutOptions) -> String {
	let size = options.size;
	let (cx, cy) = (size / 2.0, size / 2.0);
	let pad = options.pad.max(2.0);
	let r = size / 2.0 - pad;
	let mut r_inner = (options.inner - (pad / 2.0).round()).max(0.0);
	if r_inner >= r {
		r_inner = (r - 3.0).floor().max(0.0);
	}
	let total: f64 = items.iter().map(|it| it.value).sum();

	let mut svg = format!(
		r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
	);
	if items.is_empty() || total == 0.0 {
		let radius = if r_inner > 0.0 { r_inner } else { r };
		let _ = write!(
			svg,
			r##"<circle cx="{cx}" cy="{cy}" r="{radius}" fill="#f7fbff" stroke="#e6eefc"/></svg>"##
		);
		return svg;
	}

	let highlight = options.highlight.as_deref();
	let colors = blue_shades(items.len());
	let mut angle = -PI / 2.0;
	for (idx, item) in items.iter().enumerate() {
		let span = (item.value / total * 2.0 * PI).max(0.0001);
		let (start, end) = (angle, angle + span);
		angle = end;
		let large_arc = u8::from(span > PI);

		let active = is_highlighted(item, highlight);
		let mid = (start + end) / 2.0;
		let offset = if active { 6.0 } else { 1.0 };
		let (dx, dy) = (offset * mid.cos(), offset * mid.sin());
		let point = |radius: f64, a: f64| (cx + radius * a.cos() + dx, cy + radius * a.sin() + dy);
		let ((x1, y1), (x2, y2)) = (point(r, start), point(r, end));
		let ((xi1, yi1), (xi2, yi2)) = (point(r_inner, end), point(r_inner, start));

		let (stroke, stroke_width, opacity) = if active {
			(palette::DARK_BLUE, 1.8, 1.0)
		} else {
			("#ffffff", 0.8, 0.96)
		};
		let _ = write!(
			svg,
			r#"<path d="M {x1:.2} {y1:.2} A {r} {r} 0 {large_arc} 1 {x2:.2} {y2:.2} L {xi1:.2} {yi1:.2} A {r_inner} {r_inner} 0 {large_arc} 0 {xi2:.2} {yi2:.2} Z" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}" fill-opacity="{opacity}"/>"#,
			fill = colors[idx % colors.len()],
		);
	}

	if let Some(item) = items.iter().find(|it| is_highlighted(it, highlight)) {
		let pct = item.value / total * 100.0;
		let _ = write!(
			svg,
			r#"<text x="{cx}" y="{cy}" text-anchor="middle" alignment-baseline="central" font-size="10" font-weight="700" fill="{fill}">{pct:.prec$}%</text>"#,
			fill = palette::BLUE,
			prec = options.decimals as usize,
		);
	}

	svg.push_str("</svg>");
	svg
}

/// Donut chart with title and legend.
#[component]
pub fn DonutChart(
	#[prop(into)] items: Signal<Vec<DonutItem>>,
	#[prop(into, optional)] title: String,
	#[prop(into, optional)] subtitle: String,
	#[prop(default = 220.0)] size: f64,
	#[prop(optional)] highlight: Option<String>,
	#[prop(default = 0)] decimals: u8,
) -> impl IntoView {
	let options = DonutOptions {
		size,
		inner: size * 0.2,
		highlight,
		decimals,
		..DonutOptions::default()
	};

	view! {
		<div class="donut-chart">
			<h3 class="donut-title">{title}</h3>
			<p class="donut-subtitle">{subtitle}</p>
			{move || {
				let items = items.get();
				if items.is_empty() {
					return view! { <div class="donut-empty">"No data available for pie chart"</div> }
						.into_any();
				}
				let svg = donut_svg(&items, &options);
				let legend = items
					.iter()
					.zip(blue_shades(items.len()))
					.map(|(item, color)| {
						view! {
							<li>
								<span class="donut-swatch" style=format!("background: {color}")></span>
								{item.name.clone()}
							</li>
						}
					})
					.collect_view();
				view! {
					<div class="donut-svg" inner_html=svg></div>
					<ul class="donut-legend">{legend}</ul>
				}
					.into_any()
			}}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: &str, value: f64) -> DonutItem {
		DonutItem {
			id: id.to_string(),
			name: format!("{id} name"),
			value,
		}
	}

	#[test]
	fn shades_run_light_to_dark() {
		assert_eq!(blue_shades(0), ["#0e47cb"]);
		assert_eq!(blue_shades(1), ["#0e47cb"]);
		assert_eq!(blue_shades(3), ["#5bc0de", "#3584d5", "#0e47cb"]);
	}

	#[test]
	fn empty_or_zero_total_draws_a_placeholder() {
		let options = DonutOptions::default();
		for items in [vec![], vec![item("A", 0.0)]] {
			let svg = donut_svg(&items, &options);
			assert!(svg.contains("<circle"));
			assert!(!svg.contains("<path"));
			assert!(svg.ends_with("</svg>"));
		}
	}

	#[test]
	fn one_path_per_slice() {
		let svg = donut_svg(&[item("A", 1.0), item("B", 3.0)], &DonutOptions::default());
		assert_eq!(svg.matches("<path").count(), 2);
		assert!(!svg.contains("<text"));
		// the bigger slice spans more than half the circle
		assert!(svg.contains(" 0 1 1 "));
	}

	#[test]
	fn highlight_adds_a_percentage() {
		let options = DonutOptions {
			highlight: Some("B name".into()),
			decimals: 1,
			..DonutOptions::default()
		};
		let svg = donut_svg(&[item("A", 1.0), item("B", 3.0)], &options);
		assert!(svg.contains(">75.0%</text>"));
		assert!(svg.contains(r##"stroke="#0e47cb""##));
	}

	#[test]
	fn oversized_hole_is_shrunk() {
		let options = DonutOptions {
			size: 40.0,
			inner: 100.0,
			..DonutOptions::default()
		};
		// r = 14, hole clamped to 11
		let svg = donut_svg(&[item("A", 1.0), item("B", 1.0)], &options);
		assert!(svg.contains("A 11 11 "));
	}
}
