pub mod client;
pub mod directory;
pub mod error;
pub mod exec;
pub mod kind;

pub use client::KubeDirectory;
pub use directory::{DirectoryFuture, ResourceDirectory};
pub use error::{DirectoryError, DirectoryResult};
pub use exec::{ExecMenu, ExecShell, EXEC_SHELLS};
pub use kind::ResourceKind;
