use thiserror::Error;

/// Errors from interactions that reference something not on screen.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("no card {0} in the current listing")]
    NoSuchCard(usize),

    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),
}
