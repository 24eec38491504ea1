mod app_config;
mod s3_config;
mod ses_config;

pub use app_config::{
    AppConfig, CorsConfig, DatabaseConfig, EmailConfig, ServerConfig, StorageConfig,
};
pub use s3_config::*;
pub use ses_config::*;
