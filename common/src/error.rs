use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenagerieError {
    #[error("unknown kind '{0}', expected one of: dog, cat, bird, fish")]
    UnknownKind(String),
}
