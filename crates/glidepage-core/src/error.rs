use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("scroll controller already initialized; call teardown() first")]
    AlreadyInitialized,

    #[error("environment cannot schedule animation frames: {0}")]
    UnsupportedEnvironment(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
