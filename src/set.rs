//! The closed-set abstraction: a fixed family of string-valued constants.

use crate::error::UnknownValueError;

/// A closed, named set of string-valued constants.
///
/// Implementors declare a fixed collection of members, each carrying a
/// wire token stored verbatim. The set is fixed for the life of the
/// program: `values()` must return the same slice contents, in
/// declaration order, on every call.
///
/// The [`string_enum!`](crate::string_enum) macro is the usual way to
/// declare an implementor; it also rejects duplicate tokens at compile
/// time. Hand-written impls (useful when members live in a table rather
/// than an enum) are not policed for duplicates — `parse` and
/// `try_parse` then resolve to the first declared match.
///
/// `parse` and `try_parse` match tokens exactly: case-sensitive,
/// untrimmed, whole-token codepoint equality.
pub trait StringEnum: Copy + 'static {
    /// Diagnostic name of the closed set, carried by parse errors.
    const SET_NAME: &'static str;

    /// Every declared member, in declaration order.
    fn values() -> &'static [Self];

    /// The wire token of this member, exactly as declared.
    fn as_str(self) -> &'static str;

    /// Find the member whose token equals `token`.
    fn parse(token: &str) -> Result<Self, UnknownValueError> {
        Self::try_parse(token).ok_or_else(|| UnknownValueError::new(Self::SET_NAME, token))
    }

    /// Non-failing counterpart of [`parse`](StringEnum::parse).
    fn try_parse(token: &str) -> Option<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|member| member.as_str() == token)
    }
}
