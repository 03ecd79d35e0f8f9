use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while building a gallery
#[derive(Debug)]
pub enum FramecapError {
    Subtitle(SubtitleError),
    Sampler(SamplerError),
    Other(io::Error),
}

/// Subtitle parsing specific errors
#[derive(Debug)]
pub struct SubtitleError {
    pub message: String,
}

impl SubtitleError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Frame sampler specific errors
#[derive(Debug)]
pub struct SamplerError {
    pub message: String,
}

impl SamplerError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FramecapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramecapError::Other(err) => write!(f, "I/O error: {}", err),
            FramecapError::Subtitle(err) => write!(f, "Subtitle error: {}", err),
            FramecapError::Sampler(err) => write!(f, "Sampler error: {}", err),
        }
    }
}

impl fmt::Display for SubtitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for FramecapError {}
impl Error for SubtitleError {}
impl Error for SamplerError {}

// Conversion implementations
impl From<io::Error> for FramecapError {
    fn from(err: io::Error) -> Self {
        FramecapError::Other(err)
    }
}

impl From<SubtitleError> for FramecapError {
    fn from(err: SubtitleError) -> Self {
        FramecapError::Subtitle(err)
    }
}

impl From<SamplerError> for FramecapError {
    fn from(err: SamplerError) -> Self {
        FramecapError::Sampler(err)
    }
}

// Conversion to io::Error for callers that only speak io::Error
impl From<FramecapError> for io::Error {
    fn from(err: FramecapError) -> Self {
        io::Error::other(err)
    }
}

impl From<SubtitleError> for io::Error {
    fn from(err: SubtitleError) -> Self {
        io::Error::other(err)
    }
}

impl From<SamplerError> for io::Error {
    fn from(err: SamplerError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with FramecapError
pub type FramecapResult<T> = Result<T, FramecapError>;
