pub mod add;
pub mod config;
pub mod day;
pub mod del;
pub mod init;
pub mod log;
pub mod month;
pub mod plan;
pub mod stats;
pub mod week;
