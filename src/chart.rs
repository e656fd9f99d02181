//! Footprint distribution chart
//!
//! Renders the four category contributions as an inline SVG pie with a
//! legend underneath. Wedges are traced as polylines (one segment per degree)
//! so the output is stable across renderers.

use serde::Serialize;
use std::f64::consts::PI;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Rectangle, Text};
use svg::Document;

use crate::footprint::{FootprintCategory, FootprintResult};

const SIZE: f64 = 300.0;
const RADIUS: f64 = 120.0;
const LEGEND_ROW: f64 = 22.0;
const EMPTY_FILL: &str = "#e5e7eb";

/// One wedge of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub category: FootprintCategory,
    pub label: &'static str,
    pub value: f64,
    /// Fraction of the positive total (0.0 - 1.0)
    pub share: f64,
    pub color: &'static str,
    pub border_color: &'static str,
}

impl ChartSlice {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.share * 100.0)
    }
}

fn colors(category: FootprintCategory) -> (&'static str, &'static str) {
    match category {
        FootprintCategory::Transport => ("#3b82f6", "#2563eb"),
        FootprintCategory::Electricity => ("#ef4444", "#dc2626"),
        FootprintCategory::Waste => ("#f59e0b", "#d97706"),
        FootprintCategory::Diet => ("#10b981", "#059669"),
    }
}

/// Slices in display order. Negative contributions count as zero.
pub fn slices(result: &FootprintResult) -> Vec<ChartSlice> {
    let categories = result.breakdown.categories();
    let positive_total: f64 = categories.iter().map(|(_, v)| v.max(0.0)).sum();

    categories
        .iter()
        .map(|&(category, value)| {
            let share = if positive_total > 0.0 {
                value.max(0.0) / positive_total
            } else {
                0.0
            };
            let (color, border_color) = colors(category);
            ChartSlice {
                category,
                label: category.label(),
                value,
                share,
                color,
                border_color,
            }
        })
        .collect()
}

fn point_on_circle(cx: f64, cy: f64, angle: f64) -> (f64, f64) {
    // Angle 0 points up, increasing clockwise
    (cx + RADIUS * angle.sin(), cy - RADIUS * angle.cos())
}

fn wedge(cx: f64, cy: f64, start: f64, end: f64) -> Data {
    let steps = (((end - start) * 180.0 / PI).ceil() as usize).max(2);
    let mut data = Data::new()
        .move_to((cx, cy))
        .line_to(point_on_circle(cx, cy, start));
    for i in 1..=steps {
        let angle = start + (end - start) * i as f64 / steps as f64;
        data = data.line_to(point_on_circle(cx, cy, angle));
    }
    data.close()
}

/// Render the pie chart as a standalone SVG document string.
pub fn pie_chart(result: &FootprintResult) -> String {
    let slices = slices(result);
    let cx = SIZE / 2.0;
    let cy = SIZE / 2.0;

    let mut pie = Group::new().set("class", "chart-pie");
    let drawn: Vec<&ChartSlice> = slices.iter().filter(|s| s.share > 0.0).collect();

    if drawn.is_empty() {
        pie = pie.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", RADIUS)
                .set("fill", EMPTY_FILL),
        );
    } else if drawn.len() == 1 {
        let only = drawn[0];
        pie = pie.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", RADIUS)
                .set("fill", only.color)
                .set("stroke", only.border_color)
                .set("stroke-width", 1),
        );
    } else {
        let mut start = 0.0;
        for slice in drawn {
            let end = start + slice.share * 2.0 * PI;
            pie = pie.add(
                Path::new()
                    .set("fill", slice.color)
                    .set("stroke", slice.border_color)
                    .set("stroke-width", 1)
                    .set("d", wedge(cx, cy, start, end)),
            );
            start = end;
        }
    }

    let legend = slices
        .iter()
        .enumerate()
        .fold(Group::new().set("class", "chart-legend"), |group, (i, slice)| {
            let y = SIZE + 10.0 + i as f64 * LEGEND_ROW;
            group
                .add(
                    Rectangle::new()
                        .set("x", 60.0)
                        .set("y", y)
                        .set("width", 14)
                        .set("height", 14)
                        .set("fill", slice.color),
                )
                .add(
                    Text::new()
                        .set("x", 82.0)
                        .set("y", y + 12.0)
                        .set("font-size", 13)
                        .set("fill", "currentColor")
                        .add(svg::node::Text::new(format!(
                            "{} ({})",
                            slice.label,
                            slice.percent_label()
                        ))),
                )
        });

    let height = SIZE + 20.0 + slices.len() as f64 * LEGEND_ROW;
    Document::new()
        .set("viewBox", (0.0, 0.0, SIZE, height))
        .set("role", "img")
        .set("aria-label", "Carbon footprint distribution")
        .add(pie)
        .add(legend)
        .to_string()
}
