use std::{fmt, io};

/// The parameter of [`printc`](crate::printc) that was given a value of the
/// wrong type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Foreground,
    Background,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Param::Foreground => "foreground",
            Param::Background => "background",
        };
        f.pad(s)
    }
}

/// Errors are reported with lowercase messages, for example
/// `invalid color name: 'orange'. Valid names are: black, red, ...`.
/// Callers that match on the text should match on the variant instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid color name: '{name}'. Valid names are: {}", .valid.join(", "))]
    InvalidColorName {
        name: String,
        valid: Vec<&'static str>,
    },

    #[error("{param} must be a Color or None")]
    TypeMismatch { param: Param },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[test]
fn test_error_messages() {
    let err = Error::InvalidColorName {
        name: "orange".into(),
        valid: vec!["black", "red"],
    };
    assert_eq!(
        err.to_string(),
        "invalid color name: 'orange'. Valid names are: black, red"
    );

    let err = Error::TypeMismatch {
        param: Param::Background,
    };
    assert_eq!(err.to_string(), "background must be a Color or None");
}
