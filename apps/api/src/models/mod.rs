pub mod domain;
pub mod entry;
pub mod insight;
pub mod profile;

pub use domain::Domain;
pub use entry::{FieldValue, HealthLogEntry};
pub use insight::{InsightResult, InsightSource, RiskAssessment, RiskLevel};
pub use profile::{ProfileRow, UserProfile};
