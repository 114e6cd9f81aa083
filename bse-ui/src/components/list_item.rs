//! Labeled row with an icon bubble, used by the dashboard analysis list.

use dioxus::prelude::*;

/// Props for ListItem
#[derive(Props, Clone, PartialEq)]
pub struct ListItemProps {
    /// Icon glyph shown inside the colored bubble
    pub icon: String,
    /// Bubble background color
    #[props(default = String::from("#dbeafe"))]
    pub color: String,
    pub label: String,
    pub value: String,
    #[props(default = String::new())]
    pub sub_value: String,
}

#[component]
pub fn ListItem(props: ListItemProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid #f9fafb;",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                div {
                    style: "width: 40px; height: 40px; border-radius: 9999px; background: {props.color}; display: flex; align-items: center; justify-content: center; font-size: 18px;",
                    "{props.icon}"
                }
                div {
                    style: "display: flex; flex-direction: column;",
                    span {
                        style: "font-weight: 600; color: #1e293b;",
                        "{props.label}"
                    }
                    if !props.sub_value.is_empty() {
                        span {
                            style: "font-size: 11px; color: #94a3b8;",
                            "{props.sub_value}"
                        }
                    }
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span {
                    style: "font-weight: 700; color: #334155;",
                    "{props.value}"
                }
                span {
                    style: "color: #d1d5db;",
                    "›"
                }
            }
        }
    }
}
