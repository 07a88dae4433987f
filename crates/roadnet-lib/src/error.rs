use thiserror::Error;

/// Convenient result alias for the roadnet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A city was declared twice in the CITIES section.
    #[error("duplicate city '{name}' on line {line}")]
    DuplicateCity { name: String, line: usize },

    /// A ROADS line did not carry at least two names and a weight.
    #[error("invalid road format on line {line}: '{content}'")]
    MalformedRoad { line: usize, content: String },

    /// A ROADS line referenced a name outside the CITIES section.
    #[error("could not resolve road endpoints on line {line}: '{content}'")]
    UnknownRoadEndpoints { line: usize, content: String },

    /// A road weight was not an integer.
    #[error("invalid weight '{token}' on line {line}")]
    InvalidWeight { line: usize, token: String },

    /// A road weight was negative.
    #[error("negative weight '{weight}' on line {line}")]
    NegativeWeight { line: usize, weight: i64 },

    /// The network definition declared no cities.
    #[error("no CITIES section found")]
    MissingCitiesSection,

    /// A command line did not start with a recognised directive.
    #[error("unrecognised command: '{line}'")]
    UnknownDirective { line: String },

    /// A TRAFFIC_REPORT line did not match `TRAFFIC_REPORT <from> <to> <delta>`.
    #[error("invalid traffic report format: '{line}'")]
    MalformedTrafficReport { line: String },

    /// A traffic delta token was not `+N`, `-N`, or an integer literal.
    #[error("invalid traffic delta '{token}'")]
    InvalidDelta { token: String },

    /// A QUERY line did not match a known query shape.
    #[error("invalid query format: '{line}'")]
    MalformedQuery { line: String },

    /// A QUERY used a subtype other than SHORTEST_PATH or K_PATHS.
    #[error("unknown query type: {query_type}")]
    UnknownQueryType { query_type: String },

    /// A K_PATHS count was not an integer.
    #[error("invalid path count '{token}'")]
    InvalidPathCount { token: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
