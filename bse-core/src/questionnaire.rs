//! The fixed questionnaire sequence.
//!
//! Four questions, each rendered with one of three input affordances.
//! Validation happens at this layer (and in the wizard's setters), so the
//! simulation never sees an out-of-range value.

use crate::user_data::POSTAL_LEN;

/// Identifies which `UserData` field a question fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionId {
    Owner,
    Postal,
    Heating,
    Bill,
}

/// Input affordance a question renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single-choice cards; tapping one records the answer and advances.
    Options,
    /// Constrained text input with an explicit "continue" action.
    Input,
    /// Bounded numeric slider with an explicit "validate" action.
    Slider,
}

/// One questionnaire step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kind: QuestionKind,
}

/// The questionnaire, in presentation order.
pub static QUESTIONS: [Question; 4] = [
    Question {
        id: QuestionId::Owner,
        title: "Votre Profil",
        subtitle: "Pour commencer le scan",
        kind: QuestionKind::Options,
    },
    Question {
        id: QuestionId::Postal,
        title: "Localisation",
        subtitle: "Analyse climatique de la zone",
        kind: QuestionKind::Input,
    },
    Question {
        id: QuestionId::Heating,
        title: "Source de Chaleur",
        subtitle: "Analyse du systeme actuel",
        kind: QuestionKind::Options,
    },
    Question {
        id: QuestionId::Bill,
        title: "Facture Mensuelle",
        subtitle: "Estimation de la depense energetique",
        kind: QuestionKind::Slider,
    },
];

/// Placeholder shown in the postal code field.
pub const POSTAL_PLACEHOLDER: &str = "ex: 75001";

/// Sanitize a postal-code edit.
///
/// Keeps the previous value whenever the proposed one contains a
/// non-digit or exceeds [`POSTAL_LEN`] characters, so invalid keystrokes
/// are simply swallowed.
pub fn sanitize_postal(current: &str, proposed: &str) -> String {
    if proposed.len() <= POSTAL_LEN && proposed.chars().all(|c| c.is_ascii_digit()) {
        proposed.to_string()
    } else {
        current.to_string()
    }
}

/// A postal code is complete once it has exactly [`POSTAL_LEN`] digits.
pub fn postal_complete(code: &str) -> bool {
    code.len() == POSTAL_LEN && code.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_sequence() {
        assert_eq!(QUESTIONS.len(), 4);
        assert_eq!(QUESTIONS[0].id, QuestionId::Owner);
        assert_eq!(QUESTIONS[1].id, QuestionId::Postal);
        assert_eq!(QUESTIONS[2].id, QuestionId::Heating);
        assert_eq!(QUESTIONS[3].id, QuestionId::Bill);
        assert_eq!(QUESTIONS[0].kind, QuestionKind::Options);
        assert_eq!(QUESTIONS[1].kind, QuestionKind::Input);
        assert_eq!(QUESTIONS[3].kind, QuestionKind::Slider);
    }

    #[test]
    fn test_sanitize_accepts_digits_up_to_five() {
        assert_eq!(sanitize_postal("", "6"), "6");
        assert_eq!(sanitize_postal("6900", "69002"), "69002");
        assert_eq!(sanitize_postal("69002", ""), "");
    }

    #[test]
    fn test_sanitize_swallows_invalid_keystrokes() {
        // non-digit
        assert_eq!(sanitize_postal("6900", "6900a"), "6900");
        // too long
        assert_eq!(sanitize_postal("69002", "690021"), "69002");
        assert_eq!(sanitize_postal("", "69 00"), "");
    }

    #[test]
    fn test_postal_complete() {
        assert!(!postal_complete(""));
        assert!(!postal_complete("6900"));
        assert!(postal_complete("69002"));
        assert!(!postal_complete("6900a"));
        assert!(!postal_complete("690021"));
    }
}
