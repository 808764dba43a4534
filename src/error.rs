use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid global ID: {0}")]
    InvalidIdentifier(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid entity: {0}")]
    InvalidEntity(String),

    #[error("Operation {operation} failed: {source}")]
    OperationFailure {
        operation: &'static str,
        #[source]
        source: Box<GraphError>,
    },

    #[error("API key not found. Please run 'sbgraph auth' or set STACKBLITZ_API_KEY.")]
    ApiKeyNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    /// Name of the failed adapter operation, if this is an `OperationFailure`.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            GraphError::OperationFailure { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> GraphResult<T>;
    fn with_context<F>(self, f: F) -> GraphResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> GraphResult<T> {
        self.map_err(|e| GraphError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> GraphResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GraphError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> GraphResult<T> {
        self.ok_or_else(|| GraphError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> GraphResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| GraphError::Unknown(f()))
    }
}

/// Tags a transport failure with the adapter operation that issued it.
pub trait OperationContext<T> {
    fn in_operation(self, operation: &'static str) -> GraphResult<T>;
}

impl<T> OperationContext<T> for GraphResult<T> {
    fn in_operation(self, operation: &'static str) -> GraphResult<T> {
        self.map_err(|e| GraphError::OperationFailure {
            operation,
            source: Box::new(e),
        })
    }
}

#[macro_export]
macro_rules! graph_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::GraphError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::GraphError::$error_type(format!($fmt, $($arg)*))
    };
}
