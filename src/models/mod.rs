pub mod day_plan;
pub mod day_view;
pub mod ladder;
pub mod log_entry;
pub mod log_type;
pub mod status;
