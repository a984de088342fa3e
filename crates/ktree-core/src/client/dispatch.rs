use std::fmt::Debug;

use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::{CronJob, Job};
use k8s_openapi::api::core::v1::{
    ConfigMap, PersistentVolume, PersistentVolumeClaim, Pod, Secret, Service, ServiceAccount,
};
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding, Role, RoleBinding};
use k8s_openapi::{ClusterResourceScope, NamespaceResourceScope};
use kube::api::{Api, ListParams};
use kube::{Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DirectoryError, DirectoryResult};
use crate::kind::ResourceKind;

pub(super) fn sorted_names(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = names.collect();
    names.sort();
    names
}

/// Serializes an object to YAML, dropping `metadata.managedFields` when `strip` is set.
pub(super) fn to_yaml<K>(mut obj: K, strip: bool) -> DirectoryResult<String>
where
    K: Resource + Serialize,
{
    if strip {
        obj.meta_mut().managed_fields = None;
    }
    Ok(serde_yaml::to_string(&obj)?)
}

async fn list_namespaced<K>(client: Client, ns: &str) -> DirectoryResult<Vec<String>>
where
    K: Resource<DynamicType = (), Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
{
    let api: Api<K> = Api::namespaced(client, ns);
    let list = api.list(&ListParams::default()).await?;
    Ok(sorted_names(list.items.iter().map(|obj| obj.name_any())))
}

async fn list_cluster<K>(client: Client) -> DirectoryResult<Vec<String>>
where
    K: Resource<DynamicType = (), Scope = ClusterResourceScope> + Clone + DeserializeOwned + Debug,
{
    let api: Api<K> = Api::all(client);
    let list = api.list(&ListParams::default()).await?;
    Ok(sorted_names(list.items.iter().map(|obj| obj.name_any())))
}

async fn yaml_namespaced<K>(client: Client, ns: &str, name: &str, strip: bool) -> DirectoryResult<String>
where
    K: Resource<DynamicType = (), Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Serialize + Debug,
{
    let api: Api<K> = Api::namespaced(client, ns);
    to_yaml(api.get(name).await?, strip)
}

async fn yaml_cluster<K>(client: Client, name: &str, strip: bool) -> DirectoryResult<String>
where
    K: Resource<DynamicType = (), Scope = ClusterResourceScope> + Clone + DeserializeOwned + Serialize + Debug,
{
    let api: Api<K> = Api::all(client);
    to_yaml(api.get(name).await?, strip)
}

pub(super) async fn list_builtin(client: Client, ns: &str, kind: &ResourceKind) -> DirectoryResult<Vec<String>> {
    match kind {
        ResourceKind::Pods => list_namespaced::<Pod>(client, ns).await,
        ResourceKind::Services => list_namespaced::<Service>(client, ns).await,
        ResourceKind::Deployments => list_namespaced::<Deployment>(client, ns).await,
        ResourceKind::ReplicaSets => list_namespaced::<ReplicaSet>(client, ns).await,
        ResourceKind::StatefulSets => list_namespaced::<StatefulSet>(client, ns).await,
        ResourceKind::DaemonSets => list_namespaced::<DaemonSet>(client, ns).await,
        ResourceKind::Jobs => list_namespaced::<Job>(client, ns).await,
        ResourceKind::CronJobs => list_namespaced::<CronJob>(client, ns).await,
        ResourceKind::ConfigMaps => list_namespaced::<ConfigMap>(client, ns).await,
        ResourceKind::Secrets => list_namespaced::<Secret>(client, ns).await,
        ResourceKind::PersistentVolumeClaims => list_namespaced::<PersistentVolumeClaim>(client, ns).await,
        ResourceKind::Ingresses => list_namespaced::<Ingress>(client, ns).await,
        ResourceKind::ServiceAccounts => list_namespaced::<ServiceAccount>(client, ns).await,
        ResourceKind::Roles => list_namespaced::<Role>(client, ns).await,
        ResourceKind::RoleBindings => list_namespaced::<RoleBinding>(client, ns).await,
        ResourceKind::PersistentVolumes => list_cluster::<PersistentVolume>(client).await,
        ResourceKind::ClusterRoles => list_cluster::<ClusterRole>(client).await,
        ResourceKind::ClusterRoleBindings => list_cluster::<ClusterRoleBinding>(client).await,
        ResourceKind::Custom(_) => Ok(Vec::new()),
    }
}

pub(super) async fn describe_builtin(
    client: Client,
    ns: &str,
    kind: &ResourceKind,
    name: &str,
    strip: bool,
) -> DirectoryResult<String> {
    match kind {
        ResourceKind::Pods => yaml_namespaced::<Pod>(client, ns, name, strip).await,
        ResourceKind::Services => yaml_namespaced::<Service>(client, ns, name, strip).await,
        ResourceKind::Deployments => yaml_namespaced::<Deployment>(client, ns, name, strip).await,
        ResourceKind::ReplicaSets => yaml_namespaced::<ReplicaSet>(client, ns, name, strip).await,
        ResourceKind::StatefulSets => yaml_namespaced::<StatefulSet>(client, ns, name, strip).await,
        ResourceKind::DaemonSets => yaml_namespaced::<DaemonSet>(client, ns, name, strip).await,
        ResourceKind::Jobs => yaml_namespaced::<Job>(client, ns, name, strip).await,
        ResourceKind::CronJobs => yaml_namespaced::<CronJob>(client, ns, name, strip).await,
        ResourceKind::ConfigMaps => yaml_namespaced::<ConfigMap>(client, ns, name, strip).await,
        ResourceKind::Secrets => yaml_namespaced::<Secret>(client, ns, name, strip).await,
        ResourceKind::PersistentVolumeClaims => {
            yaml_namespaced::<PersistentVolumeClaim>(client, ns, name, strip).await
        }
        ResourceKind::Ingresses => yaml_namespaced::<Ingress>(client, ns, name, strip).await,
        ResourceKind::ServiceAccounts => yaml_namespaced::<ServiceAccount>(client, ns, name, strip).await,
        ResourceKind::Roles => yaml_namespaced::<Role>(client, ns, name, strip).await,
        ResourceKind::RoleBindings => yaml_namespaced::<RoleBinding>(client, ns, name, strip).await,
        ResourceKind::PersistentVolumes => yaml_cluster::<PersistentVolume>(client, name, strip).await,
        ResourceKind::ClusterRoles => yaml_cluster::<ClusterRole>(client, name, strip).await,
        ResourceKind::ClusterRoleBindings => yaml_cluster::<ClusterRoleBinding>(client, name, strip).await,
        ResourceKind::Custom(other) => Err(DirectoryError::UnsupportedKind(other.clone())),
    }
}
