use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Required environment variables that are unset or blank, in lookup order.
    #[error("Missing environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    /// The caller supplied a parameter the signer owns.
    #[error("Parameter '{0}' is reserved and added by the signer")]
    ReservedParameter(String),
}
