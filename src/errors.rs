use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error set for the few fallible operations in this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The output device does not answer size queries (e.g. output
    /// redirected to a file).
    #[error("Terminal size query failed: {0}")]
    SizeQuery(String),

    /// IO passthrough for callers that surface sink write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Helper to create a size-query error from any displayable value.
    pub fn size_query<S: Into<String>>(msg: S) -> Self {
        Error::SizeQuery(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_query_constructor_wraps_message() {
        let err = Error::size_query("no tty");
        match err {
            Error::SizeQuery(msg) => assert_eq!(msg, "no tty"),
            other => panic!("expected size query error, got {other:?}"),
        }
    }

    #[test]
    fn io_error_formats_message() {
        let raw = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err = Error::from(raw);
        assert_eq!(err.to_string(), "I/O error: pipe");
    }
}
