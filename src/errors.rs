use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// A required primitive was not supplied by the host type.
    #[error("{node_type} does not implement required tree primitive: {primitive}")]
    Unimplemented {
        primitive: &'static str,
        node_type: &'static str,
    },

    #[error("Traversal exceeded maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    #[error("Cycle detected in tree hierarchy at node: {0}")]
    CycleDetected(String),

    #[error("Invalid parent node: {0}")]
    InvalidParent(String),

    #[error("Tree already has a root node: {0}")]
    RootExists(String),

    #[error("Invalid tree settings: {0}")]
    Config(#[from] config::ConfigError),
}

impl TreeError {
    pub fn unimplemented<T: ?Sized>(primitive: &'static str) -> Self {
        Self::Unimplemented {
            primitive,
            node_type: std::any::type_name::<T>(),
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
