//! Screen header with title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for a funnel section showing title and optional subtitle.
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 24px; padding: 0 8px;",
            h1 {
                style: "margin: 0; font-size: 30px; font-weight: 700; color: #0f172a; letter-spacing: -0.02em;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; color: #64748b; font-weight: 500;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
