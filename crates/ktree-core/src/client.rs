use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use futures::future::{BoxFuture, FutureExt};
use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::api::{ListParams, LogParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config, ResourceExt};

use crate::directory::{DirectoryFuture, ResourceDirectory};
use crate::error::{DirectoryError, DirectoryResult};
use crate::kind::ResourceKind;

mod crd;
mod dispatch;

pub use crd::CustomKind;

/// `ResourceDirectory` backed by a live cluster through kube-rs.
#[derive(Clone)]
pub struct KubeDirectory {
    client: Client,
    context: Option<String>,
    show_managed_fields: bool,
    custom_kinds: Arc<RwLock<HashMap<String, CustomKind>>>,
}

impl KubeDirectory {
    fn read_kubeconfig_with_fallback() -> DirectoryResult<Kubeconfig> {
        if let Some(kubeconfig) = Self::load_kubeconfig_from_env()? {
            return Ok(kubeconfig);
        }

        let home = std::env::var("HOME").unwrap_or_else(|_| "/root".into());
        let default_path = PathBuf::from(home).join(".kube").join("config");
        if !default_path.exists() {
            return Err(DirectoryError::NoKubeconfig);
        }
        Kubeconfig::read_from(&default_path).map_err(|e| DirectoryError::ConnectionFailed(e.to_string()))
    }

    fn load_kubeconfig_from_env() -> DirectoryResult<Option<Kubeconfig>> {
        let Some(paths) = std::env::var_os("KUBECONFIG") else {
            return Ok(None);
        };

        let mut merged: Option<Kubeconfig> = None;
        for path in std::env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty()) {
            if !path.exists() {
                continue;
            }
            let config = Kubeconfig::read_from(&path).map_err(|e| DirectoryError::ConnectionFailed(e.to_string()))?;
            merged = Some(match merged {
                Some(previous) => {
                    previous.merge(config).map_err(|e| DirectoryError::ConnectionFailed(e.to_string()))?
                }
                None => config,
            });
        }
        Ok(merged)
    }

    /// Connects using the kubeconfig, optionally pinned to `context`.
    pub async fn connect(context: Option<&str>, show_managed_fields: bool) -> DirectoryResult<Self> {
        let kubeconfig = Self::read_kubeconfig_with_fallback()?;

        if let Some(name) = context {
            if !kubeconfig.contexts.iter().any(|c| c.name == name) {
                return Err(DirectoryError::ContextNotFound(name.to_string()));
            }
        }
        let resolved = context.map(str::to_string).or_else(|| kubeconfig.current_context.clone());

        let opts = KubeConfigOptions { context: context.map(str::to_string), ..Default::default() };
        let config = Config::from_custom_kubeconfig(kubeconfig, &opts)
            .await
            .map_err(|e| DirectoryError::ConnectionFailed(e.to_string()))?;
        let client = Client::try_from(config).map_err(|e| DirectoryError::ConnectionFailed(e.to_string()))?;

        tracing::info!(context = resolved.as_deref().unwrap_or("<none>"), "kube client ready");
        Ok(Self { client, context: resolved, show_managed_fields, custom_kinds: Arc::new(RwLock::new(HashMap::new())) })
    }

    fn cached_custom_kind(&self, kind: &str) -> Option<CustomKind> {
        self.custom_kinds.read().ok().and_then(|cache| cache.get(kind).cloned())
    }

    fn store_custom_kinds(&self, kinds: &[CustomKind]) {
        if let Ok(mut cache) = self.custom_kinds.write() {
            cache.clear();
            for kind in kinds {
                cache.entry(kind.kind.clone()).or_insert_with(|| kind.clone());
            }
        }
    }

    /// Looks up a custom kind, re-running discovery once on a cache miss.
    async fn resolve_custom_kind(&self, kind: &str) -> DirectoryResult<Option<CustomKind>> {
        if let Some(found) = self.cached_custom_kind(kind) {
            return Ok(Some(found));
        }
        let discovered = crd::discover_custom_kinds(self.client.clone()).await?;
        self.store_custom_kinds(&discovered);
        Ok(self.cached_custom_kind(kind))
    }
}

impl ResourceDirectory for KubeDirectory {
    fn list_namespaces(&self) -> DirectoryFuture<Vec<String>> {
        let client = self.client.clone();
        async move {
            let api: Api<Namespace> = Api::all(client);
            let list = api.list(&ListParams::default()).await?;
            Ok(dispatch::sorted_names(list.items.iter().map(|ns| ns.name_any())))
        }
        .boxed()
    }

    fn list_resource_kinds(&self) -> DirectoryFuture<Vec<String>> {
        let this = self.clone();
        async move {
            let custom = match crd::discover_custom_kinds(this.client.clone()).await {
                Ok(kinds) => {
                    this.store_custom_kinds(&kinds);
                    kinds
                }
                Err(e) => {
                    tracing::warn!("custom resource discovery failed: {e}");
                    Vec::new()
                }
            };
            Ok(crd::merge_kind_names(&custom))
        }
        .boxed()
    }

    fn list_resources(&self, namespace: &str, kind: &ResourceKind) -> DirectoryFuture<Vec<String>> {
        let this = self.clone();
        let namespace = namespace.to_string();
        let kind = kind.clone();
        async move {
            if let ResourceKind::Custom(name) = &kind {
                return match this.resolve_custom_kind(name).await? {
                    Some(custom) => crd::list_custom(this.client.clone(), &custom, &namespace).await,
                    None => {
                        tracing::debug!(kind = %name, "no custom resource definition; empty result");
                        Ok(Vec::new())
                    }
                };
            }
            dispatch::list_builtin(this.client.clone(), &namespace, &kind).await
        }
        .boxed()
    }

    fn describe(&self, namespace: &str, kind: &ResourceKind, name: &str) -> DirectoryFuture<String> {
        let this = self.clone();
        let namespace = namespace.to_string();
        let kind = kind.clone();
        let name = name.to_string();
        async move {
            let strip = !this.show_managed_fields;
            if let ResourceKind::Custom(kind_name) = &kind {
                let custom = this
                    .resolve_custom_kind(kind_name)
                    .await?
                    .ok_or_else(|| DirectoryError::UnsupportedKind(kind_name.clone()))?;
                return crd::describe_custom(this.client.clone(), &custom, &namespace, &name, strip).await;
            }
            dispatch::describe_builtin(this.client.clone(), &namespace, &kind, &name, strip).await
        }
        .boxed()
    }

    fn logs(&self, namespace: &str, pod: &str, tail_lines: i64) -> DirectoryFuture<String> {
        let client = self.client.clone();
        let namespace = namespace.to_string();
        let pod = pod.to_string();
        async move {
            let pods: Api<Pod> = Api::namespaced(client, &namespace);
            let params = LogParams { tail_lines: Some(tail_lines), ..LogParams::default() };
            Ok(pods.logs(&pod, &params).await?)
        }
        .boxed()
    }

    fn current_context_name(&self) -> Option<String> {
        self.context.clone()
    }

    fn check_reachable(&self) -> BoxFuture<'static, bool> {
        let client = self.client.clone();
        async move {
            let api: Api<Namespace> = Api::all(client);
            match api.list(&ListParams::default().limit(1)).await {
                Ok(_) => true,
                Err(e) => {
                    tracing::error!("cluster unreachable: {e}");
                    false
                }
            }
        }
        .boxed()
    }
}
