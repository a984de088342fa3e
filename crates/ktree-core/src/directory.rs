use futures::future::BoxFuture;

use crate::error::DirectoryResult;
use crate::kind::ResourceKind;

pub type DirectoryFuture<T> = BoxFuture<'static, DirectoryResult<T>>;

/// Read-only view of a cluster as seen by the browser.
///
/// Every call returns an owned future so an implementation can be shared
/// behind `Arc<dyn ResourceDirectory>` and driven from spawned tasks.
pub trait ResourceDirectory: Send + Sync {
    fn list_namespaces(&self) -> DirectoryFuture<Vec<String>>;

    /// Built-in kinds followed by custom kinds discovered in the cluster.
    fn list_resource_kinds(&self) -> DirectoryFuture<Vec<String>>;

    /// Unsupported kinds yield an empty list, not an error.
    fn list_resources(&self, namespace: &str, kind: &ResourceKind) -> DirectoryFuture<Vec<String>>;

    fn describe(&self, namespace: &str, kind: &ResourceKind, name: &str) -> DirectoryFuture<String>;

    fn logs(&self, namespace: &str, pod: &str, tail_lines: i64) -> DirectoryFuture<String>;

    fn current_context_name(&self) -> Option<String>;

    fn check_reachable(&self) -> BoxFuture<'static, bool>;
}
