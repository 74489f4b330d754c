use derive_more::Display;

/// Flat error type shared by every layer
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Rendering Error: {}", _0)]
    RenderingError(String),
    #[display(fmt = "Host Error: {}", _0)]
    HostError(String),
    #[display(fmt = "Storage Error: {}", _0)]
    StorageError(String),
    #[display(fmt = "Config Error: {}", _0)]
    ConfigError(String),
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
