pub mod ports;

pub mod connection_string;
pub use connection_string::{ConnectionStringError, database_name};
