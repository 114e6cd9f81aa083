//! Results dashboard: score gauge, projection chart, aid tiles and the
//! unlock action.

use bse_ui::components::{Card, ChartContainer, CircularGauge, ListItem, PrimaryButton};
use bse_ui::format::euros;
use bse_ui::js_bridge;
use bse_ui::state::AppState;
use dioxus::prelude::*;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "savings-chart";

/// Energy scores above this read as a good rating.
const GOOD_SCORE: u8 = 60;

#[component]
pub fn DashboardScreen() -> Element {
    let mut state = use_context::<AppState>();

    // Render the savings chart once the result is on screen.
    use_effect(move || {
        let wizard = state.wizard.read();
        if let Some(result) = wizard.result() {
            let data_json = serde_json::to_string(&result.chart_data).unwrap_or_default();
            let config_json = serde_json::json!({
                "currentColor": "#ef4444",
                "optimizedColor": "#10b981",
                "height": 190,
            })
            .to_string();
            js_bridge::render_savings_chart(CHART_CONTAINER_ID, &data_json, &config_json);
        }
    });

    let wizard = state.wizard.read();
    // tick() only reaches the dashboard with a computed result
    let Some(result) = wizard.result().cloned() else {
        return rsx! { div {} };
    };
    let heating = wizard
        .user_data()
        .heating_type
        .map(|h| h.label().to_string())
        .unwrap_or_else(|| "-".to_string());
    let postal = wizard.user_data().postal_code.clone();
    drop(wizard);

    let good = result.energy_score > GOOD_SCORE;
    let badge_text = if good { "BON" } else { "AMELIORABLE" };
    let badge_style = if good {
        "padding: 4px 8px; border-radius: 8px; font-size: 11px; font-weight: 700; background: #dcfce7; color: #15803d;"
    } else {
        "padding: 4px 8px; border-radius: 8px; font-size: 11px; font-weight: 700; background: #ffedd5; color: #c2410c;"
    };
    let gauge_color = if good { "#10b981" } else { "#fb923c" };
    let callout_style = if good {
        "margin-top: 16px; padding: 16px; border-radius: 16px; background: #f0fdf4; border: 1px solid #dcfce7;"
    } else {
        "margin-top: 16px; padding: 16px; border-radius: 16px; background: #fff7ed; border: 1px solid #ffedd5;"
    };
    let cumulative = result.cumulative_savings();

    rsx! {
        div {
            style: "position: relative; height: 100%;",
            div {
                style: "height: 100%; overflow-y: auto; background: #f2f2f7; padding-bottom: 96px;",

                // ─── Sticky header ───
                div {
                    style: "position: sticky; top: 0; z-index: 10; background: rgba(242,242,247,0.95); backdrop-filter: blur(8px); padding: 48px 24px 16px; border-bottom: 1px solid rgba(229,231,235,0.5);",
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center;",
                        div {
                            h1 {
                                style: "margin: 0; font-size: 30px; font-weight: 700; color: #0f172a;",
                                "Synthese"
                            }
                            p {
                                style: "margin: 0; color: #64748b; font-weight: 500;",
                                "Base sur votre profil"
                            }
                        }
                        div {
                            style: "width: 40px; height: 40px; background: #fff; border-radius: 9999px; box-shadow: 0 1px 2px rgba(0,0,0,0.05); display: flex; align-items: center; justify-content: center; font-size: 18px;",
                            "🌤"
                        }
                    }
                }

                div {
                    style: "padding: 16px; display: flex; flex-direction: column; gap: 16px;",

                    // ─── Energy score ───
                    Card {
                        div {
                            style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 8px;",
                            span {
                                style: "font-weight: 600; color: #64748b;",
                                "Score Energetique"
                            }
                            div { style: "{badge_style}", "{badge_text}" }
                        }
                        CircularGauge {
                            value: result.energy_score,
                            label: "Efficacite Estimee".to_string(),
                            sub_label: "Score".to_string(),
                            color: gauge_color.to_string(),
                        }
                        div {
                            style: "{callout_style}",
                            div {
                                style: "display: flex; gap: 12px;",
                                span { style: "font-size: 18px;", "🌡" }
                                p {
                                    style: "margin: 0; font-size: 13px; color: #334155; line-height: 1.4;",
                                    strong { "{result.analysis_short} " }
                                    "{result.analysis_long}"
                                }
                            }
                        }
                    }

                    // ─── Cash-flow projection ───
                    Card {
                        div {
                            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                            span {
                                style: "font-weight: 600; color: #0f172a;",
                                "💶 Projection Cash-Flow"
                            }
                            span {
                                style: "font-size: 11px; font-weight: 500; color: #94a3b8;",
                                "10 ANS"
                            }
                        }
                        div {
                            style: "display: flex; align-items: flex-end; gap: 8px; margin-bottom: 8px;",
                            span {
                                style: "font-size: 28px; font-weight: 700; color: #0f172a;",
                                "+{euros(cumulative)}"
                            }
                            span {
                                style: "font-size: 13px; font-weight: 600; color: #059669; margin-bottom: 4px;",
                                "d'economies cumulees"
                            }
                        }
                        ChartContainer { id: CHART_CONTAINER_ID.to_string() }
                        p {
                            style: "margin: 16px 0 0 0; font-size: 11px; color: #94a3b8; text-align: center;",
                            "Comparatif cumule : Depenses actuelles (Rouge) vs. Apres renovation (Vert)"
                        }
                    }

                    // ─── Aid / autonomy tiles ───
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                        Card {
                            div {
                                style: "display: flex; flex-direction: column; align-items: center; padding: 12px 0;",
                                div {
                                    style: "width: 40px; height: 40px; background: #dbeafe; border-radius: 9999px; display: flex; align-items: center; justify-content: center; margin-bottom: 8px;",
                                    "✅"
                                }
                                span {
                                    style: "font-size: 22px; font-weight: 700; color: #0f172a;",
                                    "{euros(result.aid_amount)}"
                                }
                                span {
                                    style: "font-size: 11px; font-weight: 500; color: #94a3b8; margin-top: 4px;",
                                    "Aides Estimees*"
                                }
                            }
                        }
                        Card {
                            div {
                                style: "display: flex; flex-direction: column; align-items: center; padding: 12px 0;",
                                div {
                                    style: "width: 40px; height: 40px; background: #f3e8ff; border-radius: 9999px; display: flex; align-items: center; justify-content: center; margin-bottom: 8px;",
                                    "⚡"
                                }
                                span {
                                    style: "font-size: 22px; font-weight: 700; color: #0f172a;",
                                    "{result.autonomy_score}%"
                                }
                                span {
                                    style: "font-size: 11px; font-weight: 500; color: #94a3b8; margin-top: 4px;",
                                    "Autonomie"
                                }
                            }
                        }
                    }

                    // ─── Detailed analysis ───
                    Card {
                        h3 {
                            style: "margin: 0 0 16px 0; font-size: 16px; font-weight: 600; color: #0f172a;",
                            "Analyse Detaillee"
                        }
                        ListItem {
                            icon: "🔥".to_string(),
                            color: "#ffedd5".to_string(),
                            label: "Chauffage Actuel".to_string(),
                            value: heating,
                            sub_value: "Impact majeur sur le score".to_string(),
                        }
                        ListItem {
                            icon: "🏠".to_string(),
                            color: "#e0e7ff".to_string(),
                            label: "Zone Climatique".to_string(),
                            value: postal,
                            sub_value: "Donnee prise en compte".to_string(),
                        }
                        ListItem {
                            icon: "🌤".to_string(),
                            color: "#fef9c3".to_string(),
                            label: "Gisement Solaire".to_string(),
                            value: "Analyse".to_string(),
                            sub_value: "Potentiel identifie".to_string(),
                        }
                    }
                }
            }

            // ─── Unlock ───
            div {
                style: "position: absolute; bottom: 24px; left: 24px; right: 24px; z-index: 20;",
                PrimaryButton {
                    onclick: move |_| state.wizard.write().unlock(),
                    "Debloquer mon rapport complet"
                }
            }
        }
    }
}
