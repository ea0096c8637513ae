//! Page components for ruleIQ.

mod assessments;
mod dashboard;
mod evidence;
mod not_found;
mod policies;
mod reports;

pub use assessments::{AssessmentDetail, Assessments};
pub use dashboard::Dashboard;
pub use evidence::{Evidence, EvidenceDetail};
pub use not_found::NotFound;
pub use policies::Policies;
pub use reports::Reports;
