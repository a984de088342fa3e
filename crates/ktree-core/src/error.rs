use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    NoKubeconfig,
    ContextNotFound(String),
    ConnectionFailed(String),
    Api(String),
    Serialize(String),
    UnsupportedKind(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoKubeconfig => write!(f, "No kubeconfig found"),
            Self::ContextNotFound(name) => write!(f, "Context '{name}' not found in kubeconfig"),
            Self::ConnectionFailed(msg) => write!(f, "Connection failed: {msg}"),
            Self::Api(msg) => write!(f, "API error: {msg}"),
            Self::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            Self::UnsupportedKind(kind) => write!(f, "Unsupported object type: {kind}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

impl From<kube::Error> for DirectoryError {
    fn from(err: kube::Error) -> Self {
        Self::Api(err.to_string())
    }
}

impl From<serde_yaml::Error> for DirectoryError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
