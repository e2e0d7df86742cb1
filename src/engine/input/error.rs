// Input errors

/// Errors raised while configuring input
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    /// Rejected at registration: empty binding name, bad scalar or deadzone
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A device backend could not be initialised
    #[error("Input backend error: {0}")]
    Backend(String),
}
