use std::sync::Arc;

use futures::future::BoxFuture;
use futures::{FutureExt, TryFutureExt};
use tokio::sync::mpsc;

use ktree_core::{DirectoryError, ResourceDirectory, ResourceKind};

use crate::event::AppEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Namespaces,
    Kinds { namespace: String },
    Resources { namespace: String, kind: ResourceKind },
    Describe { namespace: String, kind: ResourceKind, name: String },
    Logs { namespace: String, pod: String, tail_lines: i64 },
}

/// Each slot keeps only its most recent ticket; older completions are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchSlot {
    Namespaces,
    Kinds,
    Objects,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPurpose {
    Cascade,
    /// Re-fetch of the deepest level; `keep` is the item to re-highlight.
    Refresh { keep: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub ticket: u64,
    pub request: FetchRequest,
    pub purpose: FetchPurpose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPayload {
    Names(Vec<String>),
    Text(String),
}

#[derive(Debug)]
pub struct FetchCompletion {
    pub job: FetchJob,
    pub result: Result<FetchPayload, String>,
}

impl FetchRequest {
    pub fn slot(&self) -> FetchSlot {
        match self {
            Self::Namespaces => FetchSlot::Namespaces,
            Self::Kinds { .. } => FetchSlot::Kinds,
            Self::Resources { .. } => FetchSlot::Objects,
            Self::Describe { .. } | Self::Logs { .. } => FetchSlot::Detail,
        }
    }

    pub fn run(&self, directory: &dyn ResourceDirectory) -> BoxFuture<'static, Result<FetchPayload, DirectoryError>> {
        match self {
            Self::Namespaces => directory.list_namespaces().map_ok(FetchPayload::Names).boxed(),
            Self::Kinds { .. } => directory.list_resource_kinds().map_ok(FetchPayload::Names).boxed(),
            Self::Resources { namespace, kind } => {
                directory.list_resources(namespace, kind).map_ok(FetchPayload::Names).boxed()
            }
            Self::Describe { namespace, kind, name } => {
                directory.describe(namespace, kind, name).map_ok(FetchPayload::Text).boxed()
            }
            Self::Logs { namespace, pod, tail_lines } => {
                directory.logs(namespace, pod, *tail_lines).map_ok(FetchPayload::Text).boxed()
            }
        }
    }
}

/// Runs directory calls on the tokio runtime and posts each result back to
/// the UI loop as an [`AppEvent::Fetched`].
#[derive(Clone)]
pub struct FetchGateway {
    directory: Arc<dyn ResourceDirectory>,
    app_tx: mpsc::UnboundedSender<AppEvent>,
}

impl FetchGateway {
    pub fn new(directory: Arc<dyn ResourceDirectory>, app_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { directory, app_tx }
    }

    pub fn directory(&self) -> &Arc<dyn ResourceDirectory> {
        &self.directory
    }

    pub fn fetch(&self, job: FetchJob) {
        let fut = job.request.run(self.directory.as_ref());
        let tx = self.app_tx.clone();
        tracing::debug!(ticket = job.ticket, request = ?job.request, "fetch issued");
        tokio::spawn(async move {
            let result = fut.await.map_err(|e| e.to_string());
            if let Err(e) = &result {
                tracing::warn!(ticket = job.ticket, request = ?job.request, "fetch failed: {e}");
            }
            let _ = tx.send(AppEvent::Fetched(FetchCompletion { job, result }));
        });
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use futures::future::{self, BoxFuture};
    use futures::FutureExt;

    use ktree_core::{DirectoryError, DirectoryFuture, ResourceDirectory, ResourceKind};

    /// In-memory directory keyed by namespace and kind display name.
    #[derive(Default)]
    pub struct FakeDirectory {
        pub namespaces: Vec<String>,
        pub kinds: Vec<String>,
        pub resources: HashMap<(String, String), Vec<String>>,
        pub describe_failures: Vec<String>,
        pub logs: HashMap<String, String>,
        pub context: Option<String>,
        pub reachable: bool,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeDirectory {
        pub fn with_resources(mut self, namespace: &str, kind: &str, names: &[&str]) -> Self {
            self.resources
                .insert((namespace.into(), kind.into()), names.iter().map(|s| s.to_string()).collect());
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        fn record(&self, call: String) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
        }
    }

    pub fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    impl ResourceDirectory for FakeDirectory {
        fn list_namespaces(&self) -> DirectoryFuture<Vec<String>> {
            self.record("namespaces".into());
            future::ready(Ok(self.namespaces.clone())).boxed()
        }

        fn list_resource_kinds(&self) -> DirectoryFuture<Vec<String>> {
            self.record("kinds".into());
            future::ready(Ok(self.kinds.clone())).boxed()
        }

        fn list_resources(&self, namespace: &str, kind: &ResourceKind) -> DirectoryFuture<Vec<String>> {
            self.record(format!("resources {namespace} {kind}"));
            let key = (namespace.to_string(), kind.display_name().to_string());
            future::ready(Ok(self.resources.get(&key).cloned().unwrap_or_default())).boxed()
        }

        fn describe(&self, namespace: &str, kind: &ResourceKind, name: &str) -> DirectoryFuture<String> {
            self.record(format!("describe {namespace} {kind} {name}"));
            let result = if self.describe_failures.iter().any(|n| n == name) {
                Err(DirectoryError::Api(format!("{name} is gone")))
            } else {
                Ok(format!("kind: {kind}\nmetadata:\n  name: {name}\n  namespace: {namespace}"))
            };
            future::ready(result).boxed()
        }

        fn logs(&self, namespace: &str, pod: &str, tail_lines: i64) -> DirectoryFuture<String> {
            self.record(format!("logs {namespace} {pod} {tail_lines}"));
            let result = self.logs.get(pod).cloned().ok_or_else(|| DirectoryError::Api(format!("no logs for {pod}")));
            future::ready(result).boxed()
        }

        fn current_context_name(&self) -> Option<String> {
            self.context.clone()
        }

        fn check_reachable(&self) -> BoxFuture<'static, bool> {
            future::ready(self.reachable).boxed()
        }
    }
}
