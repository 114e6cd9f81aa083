//! Fake scanning stage: progress ring and timer-driven ticks.

use bse_core::stage::Stage;
use bse_core::wizard::TICK_MS;
use bse_ui::components::CircularGauge;
use bse_ui::state::AppState;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

#[component]
pub fn CalculatingScreen() -> Element {
    let mut state = use_context::<AppState>();

    // Drive the scan: one tick every TICK_MS until the wizard leaves the
    // Calculating stage. The loop exits on the stage change and the task
    // dies with this screen, so the interval cannot outlive the stage it
    // animates.
    use_effect(move || {
        spawn(async move {
            loop {
                TimeoutFuture::new(TICK_MS).await;
                let mut wizard = state.wizard.write();
                wizard.tick();
                if wizard.stage() != Stage::Calculating {
                    break;
                }
            }
            log::debug!("scan animation finished");
        });
    });

    let progress = state.wizard.read().scan_progress();
    let postal = state.wizard.read().user_data().postal_code.clone();
    let zone = if postal.is_empty() {
        "votre region".to_string()
    } else {
        postal
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%; align-items: center; justify-content: center; padding: 0 32px; text-align: center; background: #fff;",
            CircularGauge {
                value: progress,
                sub_label: "Scan".to_string(),
                color: "#6366f1".to_string(),
            }
            h2 {
                style: "margin: 24px 0 8px 0; font-size: 24px; font-weight: 700; color: #0f172a;",
                "Analyse du Bati"
            }
            p {
                style: "margin: 0; color: #64748b;",
                "Analyse climatique de {zone} et calcul du potentiel solaire..."
            }
        }
    }
}
