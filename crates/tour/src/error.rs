//! Lesson error types.

/// Errors that can occur while running a lesson.
///
/// None of these are reachable with the default inputs; they only surface
/// when a lesson is driven by configured or command-line values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LessonError {
    /// The divisibility check was asked to divide by zero.
    #[error("cannot check divisibility of {dividend} by zero")]
    DivisionByZero { dividend: i64 },

    /// A hex byte string contained a character that is not a hex digit.
    #[error("invalid hex byte {token:?} at position {position}")]
    InvalidHex { token: String, position: usize },

    /// A hex byte token did not have exactly two digits.
    #[error("hex byte {token:?} must have exactly two digits")]
    OddHexLength { token: String },

    /// The requested lesson does not exist.
    #[error("unknown lesson: {0}")]
    UnknownLesson(String),
}
