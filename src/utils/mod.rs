pub mod logging;
pub mod stdin;
