pub mod backup;
pub mod calendar;
pub mod server;
pub mod store;
