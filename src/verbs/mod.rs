pub mod database_name;
pub mod settings;
