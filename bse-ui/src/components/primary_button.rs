//! Full-width pill button used as the single advance action per screen.

use dioxus::prelude::*;

/// Props for PrimaryButton
#[derive(Props, Clone, PartialEq)]
pub struct PrimaryButtonProps {
    pub onclick: EventHandler<MouseEvent>,
    /// When set, the button is greyed out and the callback is suppressed
    #[props(default = false)]
    pub disabled: bool,
    pub children: Element,
}

/// The funnel's primary call-to-action button.
#[component]
pub fn PrimaryButton(props: PrimaryButtonProps) -> Element {
    let PrimaryButtonProps {
        onclick,
        disabled,
        children,
    } = props;

    let style = if disabled {
        "width: 100%; padding: 16px 0; border-radius: 9999px; border: none; \
         font-weight: 600; font-size: 17px; background: #e5e7eb; color: #9ca3af; \
         cursor: not-allowed;"
    } else {
        "width: 100%; padding: 16px 0; border-radius: 9999px; border: none; \
         font-weight: 600; font-size: 17px; background: #0f172a; color: #fff; \
         box-shadow: 0 10px 15px rgba(0,0,0,0.15); cursor: pointer;"
    };

    rsx! {
        button {
            style: "{style}",
            disabled: disabled,
            onclick: move |evt| {
                if !disabled {
                    onclick.call(evt);
                }
            },
            {children}
        }
    }
}
