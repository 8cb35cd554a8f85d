// Configuration from .env / environment variables.

mod config;

pub use config::{debug_enabled, get_export_dir, init_app_config, AppConfig, DEFAULT_API_URL};
