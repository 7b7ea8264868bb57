use thiserror::Error;

/// Errors surfaced by the application's own layers.
///
/// Terminal setup/teardown and config parsing go through here; the
/// binary converts them into `color_eyre` reports at the top level.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to open link {url}: {reason}")]
    Link { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
