use core::fmt;

/// Errors reported by the fallible constructors. Out-of-range coordinate
/// access is not an error anywhere in this crate; it is reported as absence
/// (`None`) or as an unchanged grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A flat cell vector cannot be divided evenly into rows of the
    /// requested width.
    ShapeMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch => write!(fmt, "cell count is not a multiple of the row width"),
        }
    }
}

impl std::error::Error for Error {}
