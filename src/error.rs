use thiserror::Error;

use crate::tagged::Tag;

/// Errors shared by every sample in the lesson.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LessonError {
    #[error("{0} is not a shirt size discriminant")]
    UnknownSize(i32),

    #[error("'{0}' is not a shirt size label")]
    UnparsedSize(String),

    #[error("payload read as {expected:?} but the tag says {actual:?}")]
    TagMismatch { expected: Tag, actual: Tag },

    #[error("character {0:?} does not fit in a single byte payload")]
    NotAByte(char),

    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("attempt to divide by zero")]
    DivisionByZero,

    #[error("attempt to divide with overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, LessonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            LessonError::UnknownSize(7).to_string(),
            "7 is not a shirt size discriminant"
        );
        assert_eq!(
            LessonError::OutOfBounds { index: 3, len: 3 }.to_string(),
            "index 3 is out of bounds for length 3"
        );
        assert_eq!(
            LessonError::TagMismatch {
                expected: Tag::Int,
                actual: Tag::Char
            }
            .to_string(),
            "payload read as Int but the tag says Char"
        );
    }
}
