use super::node::{el, Node};
use crate::format::format_number;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

/// Named series for a proportion chart, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub columns: Vec<(String, f64)>,
    pub groups: Vec<Vec<String>>,
}

impl ChartData {
    /// A two-slice used/available chart.
    pub fn used_available(used: f64, available: f64) -> Self {
        Self {
            columns: vec![("Used".to_string(), used), ("Available".to_string(), available)],
            groups: vec![vec!["used".to_string(), "available".to_string()]],
        }
    }

    /// Share of the first series in the total, clamped to `[0, 1]` for drawing.
    pub fn first_fraction(&self) -> f64 {
        let total: f64 = self.columns.iter().map(|(_, v)| v.max(0.0)).sum();
        match self.columns.first() {
            Some((_, first)) if total > 0.0 => (first / total).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub data: ChartData,
    pub size: ChartSize,
    /// Ring thickness in pixels.
    pub width: u32,
    pub tooltip_text: String,
    pub primary_title: String,
    pub secondary_title: String,
    pub caption: String,
}

impl DonutChart {
    pub fn render(&self) -> Node {
        let cx = f64::from(self.size.width) / 2.0;
        let cy = f64::from(self.size.height) / 2.0;
        let radius = (cx.min(cy) - f64::from(self.width)).max(1.0);
        let circumference = 2.0 * std::f64::consts::PI * radius;
        let used = circumference * self.data.first_fraction();

        let ring = |class: &str, dash: String| {
            el("circle")
                .class(class.to_string())
                .attr("cx", format_number(cx))
                .attr("cy", format_number(cy))
                .attr("r", format!("{:.2}", radius))
                .attr("fill", "none")
                .attr("stroke-width", self.width.to_string())
                .attr("stroke-dasharray", dash)
        };

        let svg = el("svg")
            .attr("width", self.size.width.to_string())
            .attr("height", self.size.height.to_string())
            .child(ring("donut-available", format!("{:.2} 0", circumference)))
            .child(ring(
                "donut-used",
                format!("{:.2} {:.2}", used, circumference - used),
            ))
            .child(
                el("text")
                    .class("donut-title")
                    .attr("x", format_number(cx))
                    .attr("y", format_number(cy))
                    .child(el("tspan").class("donut-title-big").text(self.primary_title.clone()))
                    .child(el("tspan").class("donut-title-small").text(self.secondary_title.clone())),
            );

        let data = serde_json::to_string(&self.data).unwrap_or_default();

        el("div")
            .class("usage-donut")
            .attr("title", self.tooltip_text.clone())
            .attr("data-chart", data)
            .child(svg)
            .child(el("div").class("usage-donut-caption").text(self.caption.clone()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(used: f64, available: f64) -> DonutChart {
        DonutChart {
            data: ChartData::used_available(used, available),
            size: ChartSize { width: 220, height: 170 },
            width: 8,
            tooltip_text: " ".to_string(),
            primary_title: format_number(used),
            secondary_title: "%".to_string(),
            caption: "used from 2 vCPUs".to_string(),
        }
    }

    #[test]
    fn test_fraction() {
        assert_eq!(ChartData::used_available(25.0, 75.0).first_fraction(), 0.25);
        assert_eq!(ChartData::used_available(0.0, 0.0).first_fraction(), 0.0);
        assert_eq!(ChartData::used_available(130.0, -30.0).first_fraction(), 1.0);
    }

    #[test]
    fn test_render_carries_titles_and_caption() {
        let node = chart(12.5, 87.5).render();
        let text = node.text_content();

        assert!(text.contains("12.5"));
        assert!(text.contains("%"));
        assert!(text.contains("used from 2 vCPUs"));

        let root = node.as_element().unwrap();
        assert_eq!(
            root.get_attr("data-chart"),
            Some(r#"{"columns":[["Used",12.5],["Available",87.5]],"groups":[["used","available"]]}"#)
        );
    }
}
