#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex already exists: {label}")]
    DuplicateVertex { label: String },

    #[error("unknown vertex: {label}")]
    UnknownVertex { label: String },

    #[error("vertex index {index} is out of range (vertex count: {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("self-loop edges are not allowed: {label} -> {label}")]
    SelfLoop { label: String },

    #[error("no edge {from} -> {to}")]
    NoSuchEdge { from: String, to: String },

    #[error("{}", malformed_message(*line, message))]
    MalformedInput { line: Option<usize>, message: String },
}

impl Error {
    /// `true` for both flavours of "this vertex does not exist" (by label and by index).
    pub fn is_unknown_vertex(&self) -> bool {
        matches!(
            self,
            Error::UnknownVertex { .. } | Error::IndexOutOfRange { .. }
        )
    }

    pub(crate) fn malformed(line: Option<usize>, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            message: message.into(),
        }
    }
}

fn malformed_message(line: Option<usize>, message: &str) -> String {
    match line {
        Some(line) => format!("malformed input (line {line}): {message}"),
        None => format!("malformed input: {message}"),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
