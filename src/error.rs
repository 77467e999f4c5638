/// Error type
#[derive(Debug)]
pub enum Error {
    /// An IO error while writing the report.
    Io(std::io::Error),

    /// The target spacing was not a positive, finite number of seconds.
    InvalidSpacing(f64),

    /// A duration was negative or not finite.
    InvalidDuration(f64),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => {
                write!(f, "{e}")
            }
            Self::InvalidSpacing(v) => {
                write!(f, "InvalidSpacing({v})")
            }
            Self::InvalidDuration(v) => {
                write!(f, "InvalidDuration({v})")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
