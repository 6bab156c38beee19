use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrilldownError {
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DrilldownError>;
