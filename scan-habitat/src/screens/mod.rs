//! One screen component per funnel stage.

mod calculating;
mod dashboard;
mod lead_capture;
mod onboarding;
mod questionnaire;

pub use calculating::CalculatingScreen;
pub use dashboard::DashboardScreen;
pub use lead_capture::LeadCaptureScreen;
pub use onboarding::OnboardingScreen;
pub use questionnaire::QuestionnaireScreen;
