pub mod csv_store;
pub mod log;
