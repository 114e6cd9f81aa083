//! Bilan Sante Energetique
//!
//! Mobile-styled marketing funnel for an energy-efficiency home health
//! check: onboarding, a 4-question scan, a fake progress animation, a
//! results dashboard, and a lead-capture paywall.
//!
//! Flow:
//! 1. `AppState` (one `Wizard` signal) is provided at the root.
//! 2. `App` matches on the wizard stage and renders one screen per
//!    variant inside a fixed phone frame.
//! 3. The savings chart renders through the D3.js bridge in `bse-ui`.

mod screens;

use bse_core::stage::Stage;
use bse_ui::js_bridge;
use bse_ui::state::AppState;
use dioxus::prelude::*;
use screens::{
    CalculatingScreen, DashboardScreen, LeadCaptureScreen, OnboardingScreen, QuestionnaireScreen,
};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("scan-habitat-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Install the D3 chart script once; the dashboard renders into it later.
    use_effect(|| js_bridge::init_charts());

    let stage = state.wizard.read().stage();

    rsx! {
        div {
            style: "min-height: 100vh; background: #000; display: flex; align-items: center; justify-content: center; font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "width: 100%; max-width: 400px; height: 100vh; max-height: 800px; background: #f2f2f7; border-radius: 40px; box-shadow: 0 25px 50px rgba(0,0,0,0.25); overflow: hidden; position: relative;",
                {
                    match stage {
                        Stage::Onboarding => rsx! { OnboardingScreen {} },
                        Stage::Questionnaire => rsx! { QuestionnaireScreen {} },
                        Stage::Calculating => rsx! { CalculatingScreen {} },
                        Stage::Dashboard => rsx! { DashboardScreen {} },
                        Stage::LeadCapture => rsx! { LeadCaptureScreen {} },
                    }
                }
            }
        }
    }
}
