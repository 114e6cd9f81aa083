//! Thin progress bar at the top of the questionnaire.

use dioxus::prelude::*;

/// Props for StepProgressBar
#[derive(Props, Clone, PartialEq)]
pub struct StepProgressBarProps {
    /// Completion percentage, 0-100
    pub percent: f64,
}

#[component]
pub fn StepProgressBar(props: StepProgressBarProps) -> Element {
    let width = props.percent.clamp(0.0, 100.0);

    rsx! {
        div {
            style: "width: 100%; background: #e5e7eb; height: 6px; border-radius: 9999px; margin-bottom: 32px;",
            div {
                style: "width: {width}%; background: #6366f1; height: 6px; border-radius: 9999px; transition: width 0.5s ease-out;",
            }
        }
    }
}
