pub mod matching;
pub mod status;

pub use matching::{match_completed_indices, parse_sets, tristate_status, try_parse_sets};
pub use status::{compute_day_status, overall_status};
