use std::fmt;

/// Errors produced while generating, fitting or scoring the exercise data.
#[derive(Debug)]
pub enum Error {
    /// An input is invalid for the operation (bad bounds, too few samples).
    InvalidInput(&'static str),

    /// Two sequences that must be paired have different lengths.
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    /// The operation is undefined for empty input.
    Empty(&'static str),

    /// All inputs share one value, so no unique line passes through them.
    Degenerate,

    /// The noise distribution could not be built.
    Distribution(rand_distr::NormalError),

    /// The least-squares solver failed.
    Fit(linfa_linear::LinearError<f64>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Error::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            Error::Empty(what) => write!(f, "{what} is empty"),
            Error::Degenerate => write!(f, "inputs have zero variance, the fit is not unique"),
            Error::Distribution(e) => write!(f, "noise distribution: {e}"),
            Error::Fit(e) => write!(f, "least squares fit failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Distribution(e) => Some(e),
            Error::Fit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rand_distr::NormalError> for Error {
    fn from(e: rand_distr::NormalError) -> Self {
        Error::Distribution(e)
    }
}

impl From<linfa_linear::LinearError<f64>> for Error {
    fn from(e: linfa_linear::LinearError<f64>) -> Self {
        Error::Fit(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
