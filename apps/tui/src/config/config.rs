use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Application configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub export_dir: PathBuf,
    pub debug: bool,
}

/// Initializes the application configuration.
///
/// Loads `.env` first, then reads `PORTAL_API_URL`, `EXPORT_DIR`, and
/// `DEBUG`, falling back to defaults.
pub fn init_app_config() -> AppConfig {
    dotenv().ok();

    AppConfig {
        api_base_url: env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        export_dir: get_export_dir(),
        debug: debug_enabled(),
    }
}

/// Gets the directory path for exported files.
pub fn get_export_dir() -> PathBuf {
    env::var("EXPORT_DIR").map_or_else(|_| PathBuf::from("./exports"), PathBuf::from)
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}
