//! Funnel stages.

/// One phase of the linear funnel flow.
///
/// Variants are declared in flow order, so the derived `Ord` matches the
/// forward-only transition invariant: every legal transition goes from a
/// smaller stage to a larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Onboarding,
    Questionnaire,
    Calculating,
    Dashboard,
    LeadCapture,
}

#[cfg(test)]
mod tests {
    use super::Stage;

    #[test]
    fn test_stage_order_matches_flow() {
        assert!(Stage::Onboarding < Stage::Questionnaire);
        assert!(Stage::Questionnaire < Stage::Calculating);
        assert!(Stage::Calculating < Stage::Dashboard);
        assert!(Stage::Dashboard < Stage::LeadCapture);
    }
}
