// Infrastructure layer modules
pub mod config;
pub mod cors_config;
pub mod logging;
pub mod message_repository;

// Re-exports
pub use config::{DynamoDbConfig, DynamoDbConfigError};
pub use cors_config::CorsConfig;
pub use logging::init_logging;
pub use message_repository::{DynamoMessageRepository, MessageRepository, RepositoryError};
