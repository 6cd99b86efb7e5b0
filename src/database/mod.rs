pub mod columns;
pub mod connection;
pub mod lineup;
pub mod matches;
pub mod schedule;
pub mod setup;
pub mod templates;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use setup::initialize_database;
