/// Result alias that carries the custom [`ShowcaseError`] type.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    /// A runtime jump targeted a slide outside `[0, len - 1]`. The controller
    /// state is left untouched.
    #[error("slide {target} is out of range for a carousel of {len} items")]
    OutOfRangeIndex { target: isize, len: usize },
    /// A catalog or controller was requested with fewer than one item.
    #[error("a carousel needs at least one item, got {0}")]
    InvalidCatalogSize(usize),
    /// Internal state was found outside the catalog bounds. This is a defect in
    /// the controller, not a usage error, and must not be retried.
    #[error("internal index {index} escaped the catalog bounds (len {len})")]
    InvariantViolation { index: usize, len: usize },
    #[error("duplicate catalog item id `{0}`")]
    DuplicateItemId(String),
    #[error("no visual registered for key `{0}`")]
    UnknownVisual(String),
    #[error("`{0}` is not a #rrggbb colour")]
    InvalidColor(String),
    #[error("unrecognised carousel step `{0}`")]
    InvalidStep(String),
    /// Free-form message for host-level failures.
    #[error("{0}")]
    Message(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShowcaseError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }

    /// Whether the caller can reasonably recover from this error by fixing its
    /// input, as opposed to a defect inside the crate.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvariantViolation { .. })
    }
}

impl From<&str> for ShowcaseError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for ShowcaseError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
