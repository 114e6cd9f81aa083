//! The funnel state machine.
//!
//! All funnel state lives in one `Wizard` record, mutated only through
//! the transition methods below. Out-of-stage or mismatched actions are
//! ignored (and traced), so no action sequence can move the machine
//! backward.

use log::{debug, warn};

use crate::questionnaire::{self, Question, QuestionId, QUESTIONS};
use crate::simulation::{self, SimulationResult};
use crate::stage::Stage;
use crate::user_data::{HeatingType, OwnerStatus, UserData, BILL_MAX, BILL_MIN};

/// Scan progress added per tick.
pub const PROGRESS_STEP: u8 = 2;
/// Milliseconds between scan ticks.
pub const TICK_MS: u32 = 40;

/// A submitted answer for the current question.
///
/// One variant per questionnaire field; `submit_answer` ignores a
/// variant that does not match the question on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Owner(OwnerStatus),
    Postal(String),
    Heating(HeatingType),
    Bill(u32),
}

/// The funnel state record.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    stage: Stage,
    question_index: usize,
    user_data: UserData,
    scan_progress: u8,
    result: Option<SimulationResult>,
    lead_sent: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            stage: Stage::Onboarding,
            question_index: 0,
            user_data: UserData::default(),
            scan_progress: 0,
            result: None,
            lead_sent: false,
        }
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn user_data(&self) -> &UserData {
        &self.user_data
    }

    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    /// Scan progress, 0-100.
    pub fn scan_progress(&self) -> u8 {
        self.scan_progress
    }

    pub fn lead_sent(&self) -> bool {
        self.lead_sent
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// The question currently on screen.
    pub fn current_question(&self) -> &'static Question {
        &QUESTIONS[self.question_index]
    }

    /// Questionnaire completion percentage, for the top progress bar.
    pub fn questionnaire_progress(&self) -> f64 {
        self.question_index as f64 / QUESTIONS.len() as f64 * 100.0
    }

    /// Whether the explicit "continue" action for the current question is
    /// available. Option cards advance on tap, so this only ever gates
    /// the postal input (5 digits required).
    pub fn can_continue(&self) -> bool {
        if self.stage != Stage::Questionnaire {
            return false;
        }
        match self.current_question().id {
            QuestionId::Postal => questionnaire::postal_complete(&self.user_data.postal_code),
            _ => true,
        }
    }

    /// `Onboarding -> Questionnaire`.
    pub fn start(&mut self) {
        if self.stage != Stage::Onboarding {
            warn!("start ignored in stage {:?}", self.stage);
            return;
        }
        self.stage = Stage::Questionnaire;
        debug!("scan started");
    }

    /// Live slider edit while the bill question is on screen. Clamped to
    /// the slider bounds so no out-of-range value can be submitted.
    pub fn set_monthly_bill(&mut self, amount: u32) {
        if self.stage != Stage::Questionnaire || self.current_question().id != QuestionId::Bill {
            warn!("bill edit ignored outside the bill question");
            return;
        }
        self.user_data.monthly_bill = amount.clamp(BILL_MIN, BILL_MAX);
    }

    /// Live keystroke edit while the postal question is on screen.
    /// Invalid edits (non-digits, more than 5 characters) are swallowed.
    pub fn set_postal_code(&mut self, proposed: &str) {
        if self.stage != Stage::Questionnaire || self.current_question().id != QuestionId::Postal {
            warn!("postal edit ignored outside the postal question");
            return;
        }
        self.user_data.postal_code =
            questionnaire::sanitize_postal(&self.user_data.postal_code, proposed);
    }

    /// Record the answer for the current question and advance: next
    /// question while one remains, else into `Calculating` (which
    /// computes the simulation and resets scan progress).
    pub fn submit_answer(&mut self, answer: Answer) {
        if self.stage != Stage::Questionnaire {
            warn!("answer ignored in stage {:?}", self.stage);
            return;
        }
        match (self.current_question().id, answer) {
            (QuestionId::Owner, Answer::Owner(status)) => {
                self.user_data.owner_status = Some(status);
            }
            (QuestionId::Postal, Answer::Postal(code)) => {
                if !questionnaire::postal_complete(&code) {
                    debug!("incomplete postal code {code:?} held at question");
                    return;
                }
                self.user_data.postal_code = code;
            }
            (QuestionId::Heating, Answer::Heating(heating)) => {
                self.user_data.heating_type = Some(heating);
            }
            (QuestionId::Bill, Answer::Bill(amount)) => {
                self.user_data.monthly_bill = amount.clamp(BILL_MIN, BILL_MAX);
            }
            (id, other) => {
                warn!("answer {other:?} does not fill question {id:?}");
                return;
            }
        }
        self.advance();
    }

    fn advance(&mut self) {
        if self.question_index + 1 < QUESTIONS.len() {
            self.question_index += 1;
        } else {
            // Compute the result on entry; tick() only animates and
            // performs the gated transition to the dashboard.
            self.result = Some(simulation::derive(self.user_data.monthly_bill));
            self.scan_progress = 0;
            self.stage = Stage::Calculating;
            debug!("questionnaire complete, scanning");
        }
    }

    /// One scan-timer step. Progress advances by [`PROGRESS_STEP`]
    /// (saturating at 100); once it reaches 100 with the result computed,
    /// the wizard moves to the dashboard, exactly once.
    pub fn tick(&mut self) {
        if self.stage != Stage::Calculating {
            return;
        }
        self.scan_progress = self.scan_progress.saturating_add(PROGRESS_STEP).min(100);
        if self.scan_progress == 100 && self.result.is_some() {
            self.stage = Stage::Dashboard;
            debug!("scan complete");
        }
    }

    /// `Dashboard -> LeadCapture`.
    pub fn unlock(&mut self) {
        if self.stage != Stage::Dashboard {
            warn!("unlock ignored in stage {:?}", self.stage);
            return;
        }
        self.stage = Stage::LeadCapture;
    }

    /// Stub acknowledgment only; the lead form has no transport wired.
    pub fn submit_lead(&mut self) {
        if self.stage != Stage::LeadCapture {
            warn!("lead submit ignored in stage {:?}", self.stage);
            return;
        }
        self.lead_sent = true;
        debug!("lead acknowledged");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a default wizard to the end of the questionnaire.
    fn completed_questionnaire() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.start();
        wizard.submit_answer(Answer::Owner(OwnerStatus::Owner));
        wizard.set_postal_code("69002");
        wizard.submit_answer(Answer::Postal("69002".to_string()));
        wizard.submit_answer(Answer::Heating(HeatingType::Gas));
        wizard.set_monthly_bill(150);
        wizard.submit_answer(Answer::Bill(150));
        wizard
    }

    #[test]
    fn test_happy_path() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.stage(), Stage::Onboarding);

        wizard.start();
        assert_eq!(wizard.stage(), Stage::Questionnaire);
        assert_eq!(wizard.question_index(), 0);

        wizard.submit_answer(Answer::Owner(OwnerStatus::Tenant));
        assert_eq!(wizard.question_index(), 1);

        wizard.set_postal_code("69002");
        wizard.submit_answer(Answer::Postal("69002".to_string()));
        assert_eq!(wizard.question_index(), 2);

        wizard.submit_answer(Answer::Heating(HeatingType::Electric));
        assert_eq!(wizard.question_index(), 3);

        wizard.submit_answer(Answer::Bill(200));
        assert_eq!(wizard.stage(), Stage::Calculating);
        assert_eq!(wizard.scan_progress(), 0);
        assert!(wizard.result().is_some());

        while wizard.stage() == Stage::Calculating {
            wizard.tick();
        }
        assert_eq!(wizard.stage(), Stage::Dashboard);
        assert_eq!(wizard.scan_progress(), 100);

        wizard.unlock();
        assert_eq!(wizard.stage(), Stage::LeadCapture);
        assert!(!wizard.lead_sent());

        wizard.submit_lead();
        assert!(wizard.lead_sent());
    }

    #[test]
    fn test_out_of_stage_actions_never_move_backward() {
        let mut wizard = completed_questionnaire();
        let mut last = wizard.stage();

        let mut check = |wizard: &Wizard| {
            assert!(wizard.stage() >= last, "stage moved backward");
            last = wizard.stage();
        };

        wizard.start();
        check(&wizard);
        wizard.submit_answer(Answer::Owner(OwnerStatus::Owner));
        check(&wizard);
        wizard.unlock();
        check(&wizard);

        for _ in 0..60 {
            wizard.tick();
            check(&wizard);
        }
        assert_eq!(wizard.stage(), Stage::Dashboard);

        // start/tick in Dashboard are no-ops
        wizard.start();
        wizard.tick();
        check(&wizard);
        assert_eq!(wizard.stage(), Stage::Dashboard);

        wizard.unlock();
        check(&wizard);
        wizard.unlock();
        check(&wizard);
        assert_eq!(wizard.stage(), Stage::LeadCapture);
    }

    #[test]
    fn test_mismatched_answer_is_ignored() {
        let mut wizard = Wizard::new();
        wizard.start();
        // profile question on screen; a heating answer must not advance
        wizard.submit_answer(Answer::Heating(HeatingType::Wood));
        assert_eq!(wizard.question_index(), 0);
        assert_eq!(wizard.user_data().heating_type, None);
    }

    #[test]
    fn test_postal_gating() {
        let mut wizard = Wizard::new();
        wizard.start();
        wizard.submit_answer(Answer::Owner(OwnerStatus::Owner));

        wizard.set_postal_code("6900");
        assert!(!wizard.can_continue());
        // submitting an incomplete code holds the question
        wizard.submit_answer(Answer::Postal("6900".to_string()));
        assert_eq!(wizard.question_index(), 1);

        wizard.set_postal_code("69002");
        assert!(wizard.can_continue());
        wizard.submit_answer(Answer::Postal("69002".to_string()));
        assert_eq!(wizard.question_index(), 2);
        assert_eq!(wizard.user_data().postal_code, "69002");
    }

    #[test]
    fn test_postal_edits_are_sanitized() {
        let mut wizard = Wizard::new();
        wizard.start();
        wizard.submit_answer(Answer::Owner(OwnerStatus::Owner));

        wizard.set_postal_code("6900");
        wizard.set_postal_code("6900a");
        assert_eq!(wizard.user_data().postal_code, "6900");
        wizard.set_postal_code("690021");
        assert_eq!(wizard.user_data().postal_code, "6900");
    }

    #[test]
    fn test_bill_edits_are_clamped() {
        let mut wizard = Wizard::new();
        wizard.start();
        wizard.submit_answer(Answer::Owner(OwnerStatus::Owner));
        wizard.set_postal_code("75001");
        wizard.submit_answer(Answer::Postal("75001".to_string()));
        wizard.submit_answer(Answer::Heating(HeatingType::Oil));

        wizard.set_monthly_bill(900);
        assert_eq!(wizard.user_data().monthly_bill, BILL_MAX);
        wizard.set_monthly_bill(10);
        assert_eq!(wizard.user_data().monthly_bill, BILL_MIN);

        wizard.submit_answer(Answer::Bill(900));
        assert_eq!(wizard.stage(), Stage::Calculating);
        assert_eq!(wizard.user_data().monthly_bill, BILL_MAX);
    }

    #[test]
    fn test_bill_edit_ignored_on_other_questions() {
        let mut wizard = Wizard::new();
        wizard.start();
        wizard.set_monthly_bill(400);
        assert_eq!(wizard.user_data().monthly_bill, 150);
    }

    #[test]
    fn test_tick_steps_and_single_transition() {
        let mut wizard = completed_questionnaire();
        assert_eq!(wizard.stage(), Stage::Calculating);

        let mut transitions = 0;
        let mut previous = wizard.stage();
        for i in 1..=50 {
            wizard.tick();
            if i < 50 {
                assert_eq!(wizard.scan_progress(), (i * PROGRESS_STEP as usize) as u8);
            }
            if wizard.stage() != previous {
                transitions += 1;
                previous = wizard.stage();
            }
        }
        assert_eq!(wizard.scan_progress(), 100);
        assert_eq!(wizard.stage(), Stage::Dashboard);
        assert_eq!(transitions, 1);

        // further ticks change nothing
        wizard.tick();
        assert_eq!(wizard.scan_progress(), 100);
        assert_eq!(wizard.stage(), Stage::Dashboard);
    }

    #[test]
    fn test_questionnaire_progress() {
        let mut wizard = Wizard::new();
        wizard.start();
        assert_eq!(wizard.questionnaire_progress(), 0.0);
        wizard.submit_answer(Answer::Owner(OwnerStatus::Owner));
        assert_eq!(wizard.questionnaire_progress(), 25.0);
    }

    #[test]
    fn test_lead_submit_only_in_lead_capture() {
        let mut wizard = completed_questionnaire();
        wizard.submit_lead();
        assert!(!wizard.lead_sent());

        while wizard.stage() == Stage::Calculating {
            wizard.tick();
        }
        wizard.unlock();
        wizard.submit_lead();
        assert!(wizard.lead_sent());
    }
}
