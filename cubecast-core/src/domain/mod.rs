//! Domain types: identifiers, attempt records, entrants, competitor profiles.

mod attempt;
mod competitor;
mod ids;

pub use attempt::{AttemptRecord, ATTEMPT_SLOTS};
pub use competitor::{CompetitorProfile, Entrant};
pub use ids::WcaId;
