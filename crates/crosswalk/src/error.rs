use std::fmt;

#[derive(Debug)]
pub enum CrosswalkError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (malformed key, bad target code, etc.).
    ConfigValidation(String),
    /// A record pattern failed to compile.
    Pattern(String),
    /// Matcher called with a zero-length primary code.
    EmptyPrimaryCode { title: String },
}

impl fmt::Display for CrosswalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::Pattern(msg) => write!(f, "record pattern error: {msg}"),
            Self::EmptyPrimaryCode { title } => {
                write!(f, "empty primary code for occupation '{title}'")
            }
        }
    }
}

impl std::error::Error for CrosswalkError {}

impl From<regex::Error> for CrosswalkError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}
