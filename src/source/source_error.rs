use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SourceError {
    Network(String),
    Status(u16),
    JsonParse(String),
    NotFound(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "Network error: {msg}"),
            SourceError::Status(code) => write!(f, "HTTP error! status: {code}"),
            SourceError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            SourceError::NotFound(what) => write!(f, "Not found: {what}"),
        }
    }
}

impl Error for SourceError {}
