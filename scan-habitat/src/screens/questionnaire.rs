//! Questionnaire: one question on screen at a time, three input
//! affordances (option cards, postal input, bill slider).

use bse_core::questionnaire::{QuestionId, QuestionKind, POSTAL_PLACEHOLDER};
use bse_core::user_data::{HeatingType, OwnerStatus, BILL_MAX, BILL_MIN, BILL_STEP};
use bse_core::wizard::Answer;
use bse_ui::components::{Card, PrimaryButton, SectionHeader, StepProgressBar};
use bse_ui::state::AppState;
use dioxus::prelude::*;

fn owner_icon(status: OwnerStatus) -> &'static str {
    match status {
        OwnerStatus::Owner => "🏠",
        OwnerStatus::Tenant => "🔑",
    }
}

fn heating_icon(heating: HeatingType) -> &'static str {
    match heating {
        HeatingType::Electric => "⚡",
        HeatingType::Gas => "🔥",
        HeatingType::Oil => "💧",
        HeatingType::Wood => "🪵",
    }
}

#[component]
pub fn QuestionnaireScreen() -> Element {
    let mut state = use_context::<AppState>();

    let (question, progress, can_continue) = {
        let wizard = state.wizard.read();
        (
            *wizard.current_question(),
            wizard.questionnaire_progress(),
            wizard.can_continue(),
        )
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%; padding: 32px 24px 24px;",
            StepProgressBar { percent: progress }
            SectionHeader {
                title: question.title.to_string(),
                subtitle: question.subtitle.to_string(),
            }
            div {
                style: "flex: 1; overflow-y: auto; padding: 16px 0;",
                {
                    match question.id {
                        QuestionId::Owner => rsx! { OwnerOptions {} },
                        QuestionId::Postal => rsx! { PostalInput {} },
                        QuestionId::Heating => rsx! { HeatingOptions {} },
                        QuestionId::Bill => rsx! { BillSlider {} },
                    }
                }
            }
            if question.kind == QuestionKind::Slider {
                PrimaryButton {
                    onclick: move |_| {
                        let mut wizard = state.wizard.write();
                        let bill = wizard.user_data().monthly_bill;
                        wizard.submit_answer(Answer::Bill(bill));
                    },
                    "Valider"
                }
            }
            if question.kind == QuestionKind::Input {
                PrimaryButton {
                    disabled: !can_continue,
                    onclick: move |_| {
                        let mut wizard = state.wizard.write();
                        let code = wizard.user_data().postal_code.clone();
                        wizard.submit_answer(Answer::Postal(code));
                    },
                    "Continuer"
                }
            }
        }
    }
}

/// Single-choice cards for the occupancy question.
#[component]
fn OwnerOptions() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",
            for status in OwnerStatus::ALL {
                Card {
                    onclick: move |_| state.wizard.write().submit_answer(Answer::Owner(status)),
                    div {
                        style: "display: flex; align-items: center; gap: 16px;",
                        div {
                            style: "width: 48px; height: 48px; background: #f9fafb; border-radius: 16px; display: flex; align-items: center; justify-content: center; font-size: 22px;",
                            "{owner_icon(status)}"
                        }
                        span {
                            style: "font-size: 18px; font-weight: 600; color: #334155;",
                            "{status.label()}"
                        }
                        span {
                            style: "margin-left: auto; color: #d1d5db;",
                            "→"
                        }
                    }
                }
            }
        }
    }
}

/// Single-choice cards for the heat-source question.
#[component]
fn HeatingOptions() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",
            for heating in HeatingType::ALL {
                Card {
                    onclick: move |_| state.wizard.write().submit_answer(Answer::Heating(heating)),
                    div {
                        style: "display: flex; align-items: center; gap: 16px;",
                        div {
                            style: "width: 48px; height: 48px; background: #f9fafb; border-radius: 16px; display: flex; align-items: center; justify-content: center; font-size: 22px;",
                            "{heating_icon(heating)}"
                        }
                        span {
                            style: "font-size: 18px; font-weight: 600; color: #334155;",
                            "{heating.label()}"
                        }
                        span {
                            style: "margin-left: auto; color: #d1d5db;",
                            "→"
                        }
                    }
                }
            }
        }
    }
}

/// Digit-filtered postal code input; the wizard swallows invalid edits.
#[component]
fn PostalInput() -> Element {
    let mut state = use_context::<AppState>();
    let postal = state.wizard.read().user_data().postal_code.clone();

    rsx! {
        Card {
            div {
                style: "display: flex; flex-direction: column; padding: 8px;",
                div {
                    style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px; color: #64748b;",
                    span { style: "font-size: 20px;", "📍" }
                    span { style: "font-size: 13px; font-weight: 500;", "Code Postal" }
                }
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    autofocus: true,
                    placeholder: POSTAL_PLACEHOLDER,
                    value: "{postal}",
                    style: "width: 100%; font-size: 28px; font-weight: 700; color: #0f172a; border: none; border-bottom: 2px solid #f3f4f6; outline: none; padding: 8px 0; background: transparent;",
                    oninput: move |evt: Event<FormData>| {
                        state.wizard.write().set_postal_code(&evt.value());
                    },
                }
            }
        }
    }
}

/// Bounded monthly-bill slider with a live euro readout.
#[component]
fn BillSlider() -> Element {
    let mut state = use_context::<AppState>();
    let bill = state.wizard.read().user_data().monthly_bill;

    rsx! {
        Card {
            div {
                style: "display: flex; flex-direction: column; align-items: center; padding: 48px 0;",
                span {
                    style: "font-size: 48px; font-weight: 700; color: #0f172a; margin-bottom: 8px;",
                    "{bill} €"
                }
                span {
                    style: "font-size: 13px; color: #94a3b8; text-transform: uppercase; letter-spacing: 0.05em; margin-bottom: 32px;",
                    "Par Mois"
                }
                input {
                    r#type: "range",
                    min: "{BILL_MIN}",
                    max: "{BILL_MAX}",
                    step: "{BILL_STEP}",
                    value: "{bill}",
                    style: "width: 100%;",
                    oninput: move |evt: Event<FormData>| {
                        if let Ok(amount) = evt.value().parse::<u32>() {
                            state.wizard.write().set_monthly_bill(amount);
                        }
                    },
                }
                div {
                    style: "display: flex; justify-content: space-between; width: 100%; margin-top: 16px; font-size: 11px; color: #94a3b8; font-weight: 600;",
                    span { "{BILL_MIN} €" }
                    span { "{BILL_MAX} €+" }
                }
            }
        }
    }
}
