//! Lead-capture paywall: blurred dashboard ghost behind a slide-up
//! sheet with an inert contact form.

use bse_ui::components::PrimaryButton;
use bse_ui::format::euros;
use bse_ui::state::AppState;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

#[component]
pub fn LeadCaptureScreen() -> Element {
    let mut state = use_context::<AppState>();

    let wizard = state.wizard.read();
    let aid = wizard.result().map(|r| r.aid_amount).unwrap_or(8_500);
    let sent = wizard.lead_sent();
    drop(wizard);

    let email = (state.lead_email)();
    let phone = (state.lead_phone)();

    rsx! {
        div {
            style: "position: relative; height: 100%; background: #f2f2f7;",

            // Blurred dashboard ghost
            div {
                style: "position: absolute; inset: 0; filter: blur(4px); opacity: 0.5; pointer-events: none; padding: 24px;",
                div { style: "background: #fff; height: 256px; border-radius: 24px; margin-bottom: 16px;" }
                div { style: "background: #fff; height: 192px; border-radius: 24px;" }
            }

            // Slide-up sheet
            div {
                style: "position: relative; z-index: 10; display: flex; flex-direction: column; height: 100%; justify-content: flex-end;",
                div {
                    style: "background: #fff; border-radius: 32px 32px 0 0; padding: 32px; box-shadow: 0 -10px 40px rgba(0,0,0,0.1);",
                    div {
                        style: "width: 48px; height: 4px; background: #e5e7eb; border-radius: 9999px; margin: 0 auto 32px;",
                    }
                    div {
                        style: "display: flex; justify-content: center; margin-bottom: 24px;",
                        div {
                            style: "width: 64px; height: 64px; background: #0f172a; border-radius: 16px; display: flex; align-items: center; justify-content: center; transform: rotate(-6deg); font-size: 28px; box-shadow: 0 10px 15px rgba(0,0,0,0.2);",
                            "🔒"
                        }
                    }
                    h2 {
                        style: "margin: 0 0 12px 0; font-size: 28px; font-weight: 700; text-align: center; color: #0f172a;",
                        "Rapport Premium"
                    }
                    p {
                        style: "margin: 0 0 32px 0; text-align: center; color: #64748b; line-height: 1.5;",
                        "Pour recevoir votre etude detaillee (PDF) et verifier votre eligibilite aux {euros(aid)} d'aides, finalisez votre profil."
                    }

                    if sent {
                        div {
                            style: "padding: 24px 0; text-align: center;",
                            p {
                                style: "margin: 0; font-size: 17px; font-weight: 600; color: #059669;",
                                "Lead envoye !"
                            }
                            p {
                                style: "margin: 8px 0 0 0; font-size: 13px; color: #64748b;",
                                "Votre rapport complet arrive par email."
                            }
                        }
                    } else {
                        div {
                            style: "display: flex; flex-direction: column; gap: 16px; margin-bottom: 24px;",
                            div {
                                label {
                                    style: "display: block; font-size: 13px; font-weight: 600; color: #334155; margin: 0 0 8px 4px;",
                                    "Email"
                                }
                                input {
                                    r#type: "email",
                                    placeholder: "exemple@email.com",
                                    value: "{email}",
                                    style: "width: 100%; padding: 16px 20px; background: #f9fafb; border-radius: 16px; border: none; font-size: 15px; font-weight: 500; color: #0f172a; outline: none; box-sizing: border-box;",
                                    oninput: move |evt: Event<FormData>| state.lead_email.set(evt.value()),
                                }
                            }
                            div {
                                label {
                                    style: "display: block; font-size: 13px; font-weight: 600; color: #334155; margin: 0 0 8px 4px;",
                                    "Telephone"
                                }
                                input {
                                    r#type: "tel",
                                    placeholder: "06 12 34 56 78",
                                    value: "{phone}",
                                    style: "width: 100%; padding: 16px 20px; background: #f9fafb; border-radius: 16px; border: none; font-size: 15px; font-weight: 500; color: #0f172a; outline: none; box-sizing: border-box;",
                                    oninput: move |evt: Event<FormData>| state.lead_phone.set(evt.value()),
                                }
                            }
                        }
                        PrimaryButton {
                            onclick: move |_| {
                                // Stub acknowledgment; no transport is wired.
                                info!("lead captured");
                                state.wizard.write().submit_lead();
                            },
                            "Voir mes resultats"
                        }
                    }

                    p {
                        style: "margin: 16px 0 0 0; text-align: center; font-size: 11px; color: #9ca3af;",
                        "Gratuit & Sans engagement. Vos donnees sont securisees."
                    }
                }
            }
        }
    }
}
