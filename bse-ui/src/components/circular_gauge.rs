//! Circular score gauge.
//!
//! Maps a 0-100 value to a proportional SVG arc sweep via
//! stroke-dasharray/-dashoffset; no hidden state.

use std::f64::consts::PI;

use dioxus::prelude::*;

const RADIUS: f64 = 60.0;
const STROKE: f64 = 10.0;

fn ring_radius() -> f64 {
    RADIUS - STROKE * 2.0
}

fn circumference() -> f64 {
    ring_radius() * 2.0 * PI
}

/// Dash offset for a 0-100 value: 0 leaves the ring empty, 100 closes it.
fn arc_offset(value: u8) -> f64 {
    let clamped = f64::from(value.min(100));
    circumference() - clamped / 100.0 * circumference()
}

/// Props for CircularGauge
#[derive(Props, Clone, PartialEq)]
pub struct CircularGaugeProps {
    /// Score to display, 0-100
    pub value: u8,
    /// Caption under the gauge
    #[props(default = String::new())]
    pub label: String,
    /// Small uppercase label under the centered value
    pub sub_label: String,
    /// Arc color
    #[props(default = String::from("#10b981"))]
    pub color: String,
}

#[component]
pub fn CircularGauge(props: CircularGaugeProps) -> Element {
    let size = RADIUS * 2.0;
    let ring = ring_radius();
    let circ = circumference();
    let offset = arc_offset(props.value);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 16px 0;",
            div {
                style: "position: relative; width: {size}px; height: {size}px;",
                svg {
                    width: "{size}",
                    height: "{size}",
                    style: "transform: rotate(-90deg);",
                    circle {
                        cx: "{RADIUS}",
                        cy: "{RADIUS}",
                        r: "{ring}",
                        stroke: "#f3f4f6",
                        stroke_width: "{STROKE}",
                        fill: "transparent",
                    }
                    circle {
                        cx: "{RADIUS}",
                        cy: "{RADIUS}",
                        r: "{ring}",
                        stroke: "{props.color}",
                        stroke_width: "{STROKE}",
                        stroke_dasharray: "{circ} {circ}",
                        stroke_dashoffset: "{offset}",
                        stroke_linecap: "round",
                        fill: "transparent",
                    }
                }
                div {
                    style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center;",
                    span {
                        style: "font-size: 36px; font-weight: 700; color: #1e293b;",
                        "{props.value}%"
                    }
                    span {
                        style: "font-size: 11px; font-weight: 600; color: #94a3b8; text-transform: uppercase; letter-spacing: 0.05em;",
                        "{props.sub_label}"
                    }
                }
            }
            if !props.label.is_empty() {
                div {
                    style: "margin-top: 8px; text-align: center; font-weight: 500; color: #475569;",
                    "{props.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_offset_extremes() {
        assert_eq!(arc_offset(0), circumference());
        assert!(arc_offset(100).abs() < 1e-9);
    }

    #[test]
    fn test_arc_offset_proportional() {
        let half = arc_offset(50);
        assert!((half - circumference() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_arc_offset_clamps_above_100() {
        assert_eq!(arc_offset(250), arc_offset(100));
    }
}
