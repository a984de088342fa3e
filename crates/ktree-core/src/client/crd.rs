use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::api::{Api, ListParams};
use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
use kube::{Client, ResourceExt};

use super::dispatch::{sorted_names, to_yaml};
use crate::error::DirectoryResult;
use crate::kind::ResourceKind;

/// A kind served through a CustomResourceDefinition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomKind {
    pub kind: String,
    pub group: String,
    pub version: String,
    pub plural: String,
    pub namespaced: bool,
}

impl CustomKind {
    fn from_crd(crd: CustomResourceDefinition) -> Option<Self> {
        let spec = crd.spec;
        let version = spec.versions.iter().find(|v| v.storage).or_else(|| spec.versions.first())?;
        Some(Self {
            kind: spec.names.kind.clone(),
            group: spec.group.clone(),
            version: version.name.clone(),
            plural: spec.names.plural,
            namespaced: spec.scope == "Namespaced",
        })
    }

    fn api(&self, client: Client, namespace: &str) -> Api<DynamicObject> {
        let gvk = GroupVersionKind::gvk(&self.group, &self.version, &self.kind);
        let resource = ApiResource::from_gvk_with_plural(&gvk, &self.plural);
        if self.namespaced {
            Api::namespaced_with(client, namespace, &resource)
        } else {
            Api::all_with(client, &resource)
        }
    }
}

pub(super) async fn discover_custom_kinds(client: Client) -> DirectoryResult<Vec<CustomKind>> {
    let api: Api<CustomResourceDefinition> = Api::all(client);
    let list = api.list(&ListParams::default()).await?;
    let mut kinds: Vec<CustomKind> = list.items.into_iter().filter_map(CustomKind::from_crd).collect();
    kinds.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.group.cmp(&b.group)));
    tracing::debug!(count = kinds.len(), "discovered custom kinds");
    Ok(kinds)
}

/// Built-in kind names followed by sorted, de-duplicated custom kind names.
pub(super) fn merge_kind_names(custom: &[CustomKind]) -> Vec<String> {
    let mut names: Vec<String> = ResourceKind::builtin().iter().map(|k| k.display_name().to_string()).collect();
    let mut extra: Vec<String> = custom
        .iter()
        .map(|c| c.kind.clone())
        .filter(|kind| ResourceKind::from_name(kind).is_custom())
        .collect();
    extra.sort();
    extra.dedup();
    names.extend(extra);
    names
}

pub(super) async fn list_custom(client: Client, custom: &CustomKind, namespace: &str) -> DirectoryResult<Vec<String>> {
    let list = custom.api(client, namespace).list(&ListParams::default()).await?;
    Ok(sorted_names(list.items.iter().map(|obj| obj.name_any())))
}

pub(super) async fn describe_custom(
    client: Client,
    custom: &CustomKind,
    namespace: &str,
    name: &str,
    strip: bool,
) -> DirectoryResult<String> {
    let obj = custom.api(client, namespace).get(name).await?;
    to_yaml(obj, strip)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(kind: &str, group: &str) -> CustomKind {
        CustomKind {
            kind: kind.into(),
            group: group.into(),
            version: "v1".into(),
            plural: format!("{}s", kind.to_lowercase()),
            namespaced: true,
        }
    }

    #[test]
    fn merge_appends_sorted_custom_kinds_after_builtins() {
        let names = merge_kind_names(&[custom("Certificate", "cert-manager.io"), custom("Bucket", "s3.io")]);
        assert_eq!(names[0], "Pods");
        let builtin_len = ResourceKind::builtin().len();
        assert_eq!(&names[builtin_len..], &["Bucket".to_string(), "Certificate".to_string()]);
    }

    #[test]
    fn merge_dedups_kinds_served_by_several_groups() {
        let names = merge_kind_names(&[custom("Widget", "a.io"), custom("Widget", "b.io")]);
        assert_eq!(names.iter().filter(|n| n.as_str() == "Widget").count(), 1);
    }

    #[test]
    fn merge_skips_kinds_shadowed_by_builtins() {
        let names = merge_kind_names(&[custom("Pods", "example.io")]);
        assert_eq!(names.iter().filter(|n| n.as_str() == "Pods").count(), 1);
        assert_eq!(names.len(), ResourceKind::builtin().len());
    }
}
