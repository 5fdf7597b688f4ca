pub mod del;
pub mod duration;
pub mod edit;
pub mod log_entry;
pub mod summary;
