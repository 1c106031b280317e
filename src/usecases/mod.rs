pub mod show_database_name;
pub mod show_settings;

pub use show_database_name::ShowDatabaseNameUseCase;
pub use show_settings::ShowSettingsUseCase;
