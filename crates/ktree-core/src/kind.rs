use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pods,
    Services,
    Deployments,
    ReplicaSets,
    StatefulSets,
    DaemonSets,
    Jobs,
    CronJobs,
    ConfigMaps,
    Secrets,
    PersistentVolumes,
    PersistentVolumeClaims,
    Ingresses,
    ServiceAccounts,
    Roles,
    RoleBindings,
    ClusterRoles,
    ClusterRoleBindings,
    Custom(String),
}

const BUILTIN: &[ResourceKind] = &[
    ResourceKind::Pods,
    ResourceKind::Services,
    ResourceKind::Deployments,
    ResourceKind::ReplicaSets,
    ResourceKind::StatefulSets,
    ResourceKind::DaemonSets,
    ResourceKind::Jobs,
    ResourceKind::CronJobs,
    ResourceKind::ConfigMaps,
    ResourceKind::Secrets,
    ResourceKind::PersistentVolumes,
    ResourceKind::PersistentVolumeClaims,
    ResourceKind::Ingresses,
    ResourceKind::ServiceAccounts,
    ResourceKind::Roles,
    ResourceKind::RoleBindings,
    ResourceKind::ClusterRoles,
    ResourceKind::ClusterRoleBindings,
];

impl ResourceKind {
    /// Built-in kinds in the order they are offered in the type column.
    pub fn builtin() -> &'static [ResourceKind] {
        BUILTIN
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Pods => "Pods",
            Self::Services => "Services",
            Self::Deployments => "Deployments",
            Self::ReplicaSets => "ReplicaSets",
            Self::StatefulSets => "StatefulSets",
            Self::DaemonSets => "DaemonSets",
            Self::Jobs => "Jobs",
            Self::CronJobs => "CronJobs",
            Self::ConfigMaps => "ConfigMaps",
            Self::Secrets => "Secrets",
            Self::PersistentVolumes => "PersistentVolumes",
            Self::PersistentVolumeClaims => "PersistentVolumeClaims",
            Self::Ingresses => "Ingresses",
            Self::ServiceAccounts => "ServiceAccounts",
            Self::Roles => "Roles",
            Self::RoleBindings => "RoleBindings",
            Self::ClusterRoles => "ClusterRoles",
            Self::ClusterRoleBindings => "ClusterRoleBindings",
            Self::Custom(s) => s.as_str(),
        }
    }

    pub fn short_name(&self) -> &str {
        match self {
            Self::Pods => "po",
            Self::Services => "svc",
            Self::Deployments => "deploy",
            Self::ReplicaSets => "rs",
            Self::StatefulSets => "sts",
            Self::DaemonSets => "ds",
            Self::Jobs => "job",
            Self::CronJobs => "cj",
            Self::ConfigMaps => "cm",
            Self::Secrets => "secret",
            Self::PersistentVolumes => "pv",
            Self::PersistentVolumeClaims => "pvc",
            Self::Ingresses => "ing",
            Self::ServiceAccounts => "sa",
            Self::Roles => "role",
            Self::RoleBindings => "rb",
            Self::ClusterRoles => "cr",
            Self::ClusterRoleBindings => "crb",
            Self::Custom(s) => s.as_str(),
        }
    }

    /// Resolves a kind from its display name or short name, ignoring case.
    /// Anything unrecognised is treated as a custom kind.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        BUILTIN
            .iter()
            .find(|k| k.display_name().eq_ignore_ascii_case(trimmed) || k.short_name().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Self::Custom(trimmed.to_string()))
    }

    pub fn is_pod(&self) -> bool {
        matches!(self, Self::Pods)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Custom kinds report namespaced; their real scope comes from CRD discovery.
    pub fn is_namespaced(&self) -> bool {
        !matches!(self, Self::PersistentVolumes | Self::ClusterRoles | Self::ClusterRoleBindings)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_starts_with_pods() {
        let kinds = ResourceKind::builtin();
        assert_eq!(kinds.len(), 18);
        assert_eq!(kinds[0], ResourceKind::Pods);
        assert_eq!(kinds[1], ResourceKind::Services);
        assert_eq!(kinds.last(), Some(&ResourceKind::ClusterRoleBindings));
    }

    #[test]
    fn from_name_matches_display_and_short_names() {
        assert_eq!(ResourceKind::from_name("Pods"), ResourceKind::Pods);
        assert_eq!(ResourceKind::from_name("pods"), ResourceKind::Pods);
        assert_eq!(ResourceKind::from_name("svc"), ResourceKind::Services);
        assert_eq!(ResourceKind::from_name(" Deployments "), ResourceKind::Deployments);
    }

    #[test]
    fn from_name_falls_back_to_custom() {
        let kind = ResourceKind::from_name("Certificate");
        assert_eq!(kind, ResourceKind::Custom("Certificate".into()));
        assert!(kind.is_custom());
        assert_eq!(kind.display_name(), "Certificate");
    }

    #[test]
    fn display_names_round_trip_through_from_name() {
        for kind in ResourceKind::builtin() {
            assert_eq!(&ResourceKind::from_name(kind.display_name()), kind);
        }
    }

    #[test]
    fn cluster_scoped_kinds() {
        assert!(!ResourceKind::PersistentVolumes.is_namespaced());
        assert!(!ResourceKind::ClusterRoles.is_namespaced());
        assert!(!ResourceKind::ClusterRoleBindings.is_namespaced());
        assert!(ResourceKind::PersistentVolumeClaims.is_namespaced());
        assert!(ResourceKind::Roles.is_namespaced());
    }

    #[test]
    fn only_pods_are_pods() {
        assert!(ResourceKind::Pods.is_pod());
        assert!(!ResourceKind::Deployments.is_pod());
        assert!(!ResourceKind::Custom("Pods2".into()).is_pod());
    }
}
