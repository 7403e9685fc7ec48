//! The single failure mode of closed-set parsing.

use thiserror::Error;

/// Returned when no declared member of a closed set carries the requested
/// wire token.
///
/// The display message is a wire contract shared with the systems this
/// crate talks to and must not be reworded (including its grammar).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The parameter '{token}' it is not defined within the possible values of the enum")]
pub struct UnknownValueError {
    set: &'static str,
    token: String,
}

impl UnknownValueError {
    #[must_use]
    pub fn new(set: &'static str, token: impl Into<String>) -> Self {
        Self {
            set,
            token: token.into(),
        }
    }

    /// Name of the closed set that rejected the token.
    #[must_use]
    pub const fn set(&self) -> &'static str {
        self.set
    }

    /// The rejected token, verbatim.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::UnknownValueError;

    #[test]
    fn message_matches_wire_contract() {
        let err = UnknownValueError::new("OrderState", "not-a-real-value");
        assert_eq!(
            err.to_string(),
            "The parameter 'not-a-real-value' it is not defined within the possible values of the enum"
        );
    }

    #[test]
    fn accessors_expose_diagnostics() {
        let err = UnknownValueError::new("OrderState", "wrong-enum");
        assert_eq!(err.set(), "OrderState");
        assert_eq!(err.token(), "wrong-enum");
    }

    #[test]
    fn token_is_kept_verbatim() {
        let err = UnknownValueError::new("Set", "  Mixed Case \t");
        assert_eq!(err.token(), "  Mixed Case \t");
    }
}
