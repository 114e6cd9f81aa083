//! Core domain for the Bilan Sante Energetique funnel.
//!
//! Everything that is not rendering lives here: the questionnaire
//! definition, the simulation derivation, and the wizard state machine.
//! The crate has no UI dependency so the whole funnel logic is testable
//! off the DOM.

pub mod questionnaire;
pub mod simulation;
pub mod stage;
pub mod user_data;
pub mod wizard;
