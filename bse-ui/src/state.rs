//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use bse_core::wizard::Wizard;
use dioxus::prelude::*;

/// Shared application state for the funnel screens.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The wizard state machine driving the whole funnel
    pub wizard: Signal<Wizard>,
    /// Lead form email field (UI-only, never transmitted)
    pub lead_email: Signal<String>,
    /// Lead form phone field (UI-only, never transmitted)
    pub lead_phone: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            wizard: Signal::new(Wizard::new()),
            lead_email: Signal::new(String::new()),
            lead_phone: Signal::new(String::new()),
        }
    }
}
