//! Reusable Dioxus RSX components for the funnel screens.

mod card;
mod chart_container;
mod circular_gauge;
mod list_item;
mod primary_button;
mod section_header;
mod step_progress_bar;

pub use card::Card;
pub use chart_container::ChartContainer;
pub use circular_gauge::CircularGauge;
pub use list_item::ListItem;
pub use primary_button::PrimaryButton;
pub use section_header::SectionHeader;
pub use step_progress_bar::StepProgressBar;
