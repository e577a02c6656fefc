//! Navigation error types.

use thiserror::Error;

/// Errors raised while building menu entries.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("failed to marshal menu entry {key:?}")]
    Marshal {
        key: String,
        #[source]
        source: ParamsError,
    },
}

/// A value could not be turned into entry params.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("cannot convert {0} to Params")]
    NotAMap(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_nav_error_display() {
        let err = NavError::Marshal {
            key: "about".to_string(),
            source: ParamsError::NotAMap("string"),
        };
        assert_eq!(format!("{err}"), r#"failed to marshal menu entry "about""#);

        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("cannot convert string to Params"));
    }
}
