use std::{error, fmt};

/// Error type for map-metadata decoding.
#[derive(Debug)]
pub enum Error {
    /// Orientation string is not one of the four supported layouts.
    UnsupportedOrientation(String),
    /// Stagger axis string is not "x" or "y".
    UnsupportedStaggerAxis(String),
    /// Stagger index string is not "odd" or "even".
    UnsupportedStaggerIndex(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedOrientation(s) => write!(f, "Unsupported map orientation: {}", s),
            Error::UnsupportedStaggerAxis(s) => write!(f, "Unsupported stagger axis: {}", s),
            Error::UnsupportedStaggerIndex(s) => write!(f, "Unsupported stagger index: {}", s),
        }
    }
}

impl error::Error for Error {}
