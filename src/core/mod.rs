pub mod backup;
pub mod punch;
pub mod store;
