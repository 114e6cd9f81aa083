//! Rounded white card, the basic surface of every screen.

use dioxus::prelude::*;

/// Props for Card
#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Extra inline style appended after the base card style
    #[props(default = String::new())]
    pub style: String,
    /// Optional tap handler; cards with one get a pointer cursor
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

/// A rounded card surface, tappable when given an `onclick`.
#[component]
pub fn Card(props: CardProps) -> Element {
    let CardProps {
        style,
        onclick,
        children,
    } = props;

    let cursor = if onclick.is_some() {
        "cursor: pointer;"
    } else {
        ""
    };
    let full_style = format!(
        "background: #fff; border-radius: 24px; padding: 20px; \
         box-shadow: 0 4px 20px rgba(0,0,0,0.03); \
         border: 1px solid rgba(255,255,255,0.5); {cursor} {style}"
    );

    rsx! {
        div {
            style: "{full_style}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
