pub mod add;
pub mod backup;
pub mod chart;
pub mod config;
pub mod filter;
pub mod log;
pub mod session;
pub mod summary;
pub mod tasks;
pub mod timer;
pub mod tips;
