// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse bucket a resource's manifests are grouped under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Services,
    Infrastructure,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Services => "services",
            ResourceType::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A deployable unit with its own manifests directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceName {
    ReactWeb,
    GraphqlMongo,
    GraphqlPostgres,
    Namespaces,
    Argocd,
    CertManager,
    Linkerd,
    LinkerdViz,
    SealedSecrets,
    NginxIngress,
    FluvioSys,
    ArgocdApplicationsParents,
    ArgocdApplicationsChildrenInfrastructure,
    ArgocdApplicationsChildrenServices,
}

impl ResourceName {
    pub const ALL: [ResourceName; 14] = [
        ResourceName::ReactWeb,
        ResourceName::GraphqlMongo,
        ResourceName::GraphqlPostgres,
        ResourceName::Namespaces,
        ResourceName::Argocd,
        ResourceName::CertManager,
        ResourceName::Linkerd,
        ResourceName::LinkerdViz,
        ResourceName::SealedSecrets,
        ResourceName::NginxIngress,
        ResourceName::FluvioSys,
        ResourceName::ArgocdApplicationsParents,
        ResourceName::ArgocdApplicationsChildrenInfrastructure,
        ResourceName::ArgocdApplicationsChildrenServices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceName::ReactWeb => "react-web",
            ResourceName::GraphqlMongo => "graphql-mongo",
            ResourceName::GraphqlPostgres => "graphql-postgres",
            ResourceName::Namespaces => "namespaces",
            ResourceName::Argocd => "argocd",
            ResourceName::CertManager => "cert-manager",
            ResourceName::Linkerd => "linkerd",
            ResourceName::LinkerdViz => "linkerd-viz",
            ResourceName::SealedSecrets => "sealed-secrets",
            ResourceName::NginxIngress => "nginx-ingress",
            ResourceName::FluvioSys => "fluvio-sys",
            ResourceName::ArgocdApplicationsParents => "argocd-applications-parents",
            ResourceName::ArgocdApplicationsChildrenInfrastructure => {
                "argocd-applications-children-infrastructure"
            }
            ResourceName::ArgocdApplicationsChildrenServices => {
                "argocd-applications-children-services"
            }
        }
    }

    /// Category this resource is rendered under.
    ///
    /// Every variant is listed explicitly; there is no wildcard arm, so a new
    /// resource cannot be added without deciding its category. The Argo CD
    /// bootstrapping resources are grouped with infrastructure even when the
    /// applications they point at are services.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            ResourceName::ReactWeb | ResourceName::GraphqlMongo | ResourceName::GraphqlPostgres => {
                ResourceType::Services
            }
            ResourceName::Namespaces
            | ResourceName::Argocd
            | ResourceName::CertManager
            | ResourceName::Linkerd
            | ResourceName::LinkerdViz
            | ResourceName::SealedSecrets
            | ResourceName::NginxIngress
            | ResourceName::FluvioSys
            | ResourceName::ArgocdApplicationsParents
            | ResourceName::ArgocdApplicationsChildrenInfrastructure
            | ResourceName::ArgocdApplicationsChildrenServices => ResourceType::Infrastructure,
        }
    }

    pub fn is_service(&self) -> bool {
        self.resource_type() == ResourceType::Services
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
