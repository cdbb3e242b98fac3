use thiserror::Error;

pub type LinkGraphResult<T> = Result<T, LinkGraphError>;

#[derive(Debug, Error)]
pub enum LinkGraphError {
    /// A vertex name was registered more than once.
    #[error("duplicate vertex: {0}")]
    DuplicateVertex(String),
    /// A query or edge referenced a name that was never registered.
    /// Distinct from "no path found", which is not an error.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
    #[error("GraphError: {0}")]
    Graph(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
