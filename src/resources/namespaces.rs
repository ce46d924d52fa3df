// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster namespaces and which namespace each resource is deployed into

use crate::constants::labels::{LINKERD_INJECT, MANAGED_BY};
use crate::constants::MANAGER_NAME;
use crate::types::ResourceName;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

pub const APPLICATIONS: &str = "applications";
pub const ARGOCD: &str = "argocd";
pub const CERT_MANAGER: &str = "cert-manager";
pub const LINKERD: &str = "linkerd";
pub const LINKERD_VIZ: &str = "linkerd-viz";
pub const INGRESS_NGINX: &str = "ingress-nginx";
pub const FLUVIO_SYS: &str = "fluvio-sys";
pub const KUBE_SYSTEM: &str = "kube-system";
pub const DEFAULT: &str = "default";

/// Namespaces rendered by the `namespaces` resource. `kube-system` and
/// `default` always exist and are not managed here.
pub const MANAGED_NAMESPACES: [&str; 7] = [
    APPLICATIONS,
    ARGOCD,
    CERT_MANAGER,
    LINKERD,
    LINKERD_VIZ,
    INGRESS_NGINX,
    FLUVIO_SYS,
];

/// Namespace the workloads of a resource run in
pub fn target_namespace(resource_name: ResourceName) -> &'static str {
    match resource_name {
        ResourceName::ReactWeb | ResourceName::GraphqlMongo | ResourceName::GraphqlPostgres => {
            APPLICATIONS
        }
        ResourceName::Argocd
        | ResourceName::ArgocdApplicationsParents
        | ResourceName::ArgocdApplicationsChildrenInfrastructure
        | ResourceName::ArgocdApplicationsChildrenServices => ARGOCD,
        ResourceName::CertManager => CERT_MANAGER,
        ResourceName::Linkerd => LINKERD,
        ResourceName::LinkerdViz => LINKERD_VIZ,
        ResourceName::NginxIngress => INGRESS_NGINX,
        ResourceName::FluvioSys => FLUVIO_SYS,
        ResourceName::SealedSecrets => KUBE_SYSTEM,
        ResourceName::Namespaces => DEFAULT,
    }
}

/// Build a namespace object; application namespaces get the linkerd proxy injected
pub fn make_namespace(name: &str) -> Namespace {
    let mut labels = BTreeMap::new();
    labels.insert(MANAGED_BY.to_string(), MANAGER_NAME.to_string());

    let annotations = (name == APPLICATIONS).then(|| {
        let mut annotations = BTreeMap::new();
        annotations.insert(LINKERD_INJECT.to_string(), "enabled".to_string());
        annotations
    });

    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(labels),
            annotations,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn managed_namespaces() -> Vec<Namespace> {
    MANAGED_NAMESPACES.iter().map(|name| make_namespace(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_target_namespace_exists() {
        for name in ResourceName::ALL {
            let namespace = target_namespace(name);
            assert!(
                MANAGED_NAMESPACES.contains(&namespace)
                    || namespace == KUBE_SYSTEM
                    || namespace == DEFAULT,
                "{name} targets unmanaged namespace {namespace}"
            );
        }
    }

    #[test]
    fn test_services_run_in_applications_namespace() {
        assert_eq!(target_namespace(ResourceName::GraphqlMongo), APPLICATIONS);
        assert_eq!(target_namespace(ResourceName::ReactWeb), APPLICATIONS);
    }

    #[test]
    fn test_applications_namespace_is_meshed() {
        let ns = make_namespace(APPLICATIONS);
        let annotations = ns.metadata.annotations.unwrap();
        assert_eq!(annotations.get(LINKERD_INJECT).map(String::as_str), Some("enabled"));
    }

    #[test]
    fn test_other_namespaces_are_not_meshed() {
        let ns = make_namespace(CERT_MANAGER);
        assert!(ns.metadata.annotations.is_none());
        assert_eq!(
            ns.metadata.labels.unwrap().get(MANAGED_BY).map(String::as_str),
            Some(MANAGER_NAME)
        );
    }

    #[test]
    fn test_managed_namespaces() {
        let names: Vec<_> = managed_namespaces()
            .into_iter()
            .filter_map(|ns| ns.metadata.name)
            .collect();
        assert_eq!(names.len(), MANAGED_NAMESPACES.len());
        assert!(names.contains(&"argocd".to_string()));
    }
}
