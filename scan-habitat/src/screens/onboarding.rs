//! Landing screen: pitch and the "start scan" action.

use bse_ui::components::PrimaryButton;
use bse_ui::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn OnboardingScreen() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%; justify-content: space-between; padding: 48px 24px 24px;",
            div {
                style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center;",
                div {
                    style: "width: 96px; height: 96px; background: #fff; border-radius: 24px; box-shadow: 0 20px 25px rgba(0,0,0,0.1); display: flex; align-items: center; justify-content: center; margin-bottom: 32px; transform: rotate(3deg); font-size: 44px;",
                    "🌤"
                }
                h1 {
                    style: "margin: 0 0 16px 0; font-size: 36px; font-weight: 700; color: #0f172a; letter-spacing: -0.02em; line-height: 1.1;",
                    "Bilan Sante"
                    br {}
                    "Energetique"
                }
                p {
                    style: "margin: 0; font-size: 17px; color: #64748b; max-width: 280px; line-height: 1.6;",
                    "Analysez le metabolisme de votre maison. Identifiez les pertes. Optimisez votre budget."
                }
            }
            PrimaryButton {
                onclick: move |_| state.wizard.write().start(),
                "Lancer le Scan"
            }
        }
    }
}
