use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    MissingField {
        field: &'static str,
    },
    TooManyRecipients {
        max: usize,
        actual: usize,
    },
    InvalidPhoneNumber {
        input: String,
    },
    DotSegment {
        field: &'static str,
        input: String,
    },
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingField { field } => write!(f, "{field} is required"),
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::DotSegment { field, input } => {
                write!(f, "{field} must not be a dot segment: {input:?}")
            }
            Self::LengthOutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                write!(
                    f,
                    "{field} length out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::TooShort { field, min, actual } => {
                write!(f, "{field} is too short: {actual} (min {min})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "to" };
        assert_eq!(err.to_string(), "to must not be empty");

        let err = ValidationError::MissingField { field: "media" };
        assert_eq!(err.to_string(), "media is required");

        let err = ValidationError::TooManyRecipients {
            max: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "too many recipients: 3 (max 2)");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::DotSegment {
            field: "phonebook_id",
            input: "..".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "phonebook_id must not be a dot segment: \"..\""
        );

        let err = ValidationError::LengthOutOfRange {
            field: "sender_id",
            min: 3,
            max: 11,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "sender_id length out of range: 12 (expected 3..=11)"
        );

        let err = ValidationError::TooShort {
            field: "usecase",
            min: 20,
            actual: 5,
        };
        assert_eq!(err.to_string(), "usecase is too short: 5 (min 20)");
    }
}
