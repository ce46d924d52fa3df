// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed subsets of the values.yaml of each chart the infrastructure configures.
//!
//! Only the keys that are actually set are modelled; everything else keeps
//! the chart default.

use crate::error::Result;
use crate::types::Environment;
use serde::{Deserialize, Serialize};

/// Values that can be embedded into an Argo CD helm source
pub trait ChartValues: Serialize {
    fn to_values_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SealedSecretsValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub service_monitor: ServiceMonitor,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMonitor {
    pub enabled: bool,
}

impl ChartValues for SealedSecretsValues {}

impl SealedSecretsValues {
    /// kubeseal looks the controller up under this name
    pub fn for_environment(environment: Environment) -> Self {
        SealedSecretsValues {
            fullname_override: Some("sealed-secrets-controller".to_string()),
            namespace_override: Some("kube-system".to_string()),
            metrics: Some(Metrics {
                service_monitor: ServiceMonitor {
                    enabled: environment != Environment::Local,
                },
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CertManagerValues {
    #[serde(rename = "installCRDs")]
    pub install_crds: bool,
}

impl ChartValues for CertManagerValues {}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NginxIngressValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replica_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<NginxService>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NginxService {
    #[serde(rename = "type")]
    pub service_type: String,
}

impl ChartValues for NginxIngressValues {}

impl NginxIngressValues {
    pub fn for_environment(environment: Environment) -> Self {
        let service_type = match environment {
            Environment::Local => "NodePort",
            Environment::Development | Environment::Staging | Environment::Production => {
                "LoadBalancer"
            }
        };
        NginxIngressValues {
            fullname_override: Some("nginx-ingress-controller".to_string()),
            replica_count: Some(environment.replicas()),
            service: Some(NginxService {
                service_type: service_type.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkerdControlPlaneValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_pod_anti_affinity: Option<bool>,
    /// Trust anchor is provisioned out of band and referenced by secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<LinkerdIdentity>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkerdIdentity {
    pub external_ca: bool,
    pub issuer: LinkerdIssuer,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkerdIssuer {
    pub scheme: String,
}

impl ChartValues for LinkerdControlPlaneValues {}

impl LinkerdControlPlaneValues {
    pub fn for_environment(environment: Environment) -> Self {
        let highly_available = environment == Environment::Production;
        LinkerdControlPlaneValues {
            controller_replicas: Some(if highly_available { 3 } else { 1 }),
            enable_pod_anti_affinity: Some(highly_available),
            identity: Some(LinkerdIdentity {
                external_ca: true,
                issuer: LinkerdIssuer {
                    scheme: "kubernetes.io/tls".to_string(),
                },
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCdValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ArgoCdServer>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCdServer {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
}

impl ChartValues for ArgoCdValues {}

impl ArgoCdValues {
    /// TLS terminates at the ingress controller
    pub fn insecure_server() -> Self {
        ArgoCdValues {
            fullname_override: Some("argocd".to_string()),
            server: Some(ArgoCdServer {
                extra_args: vec!["--insecure".to_string()],
            }),
        }
    }
}

/// Chart used as-is, with no overrides
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct DefaultValues {}

impl ChartValues for DefaultValues {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cert_manager_values_key() {
        let yaml = CertManagerValues { install_crds: true }
            .to_values_yaml()
            .unwrap();
        assert_eq!(yaml.trim(), "installCRDs: true");
    }

    #[test]
    fn test_sealed_secrets_values_yaml() {
        let yaml = SealedSecretsValues::for_environment(Environment::Production)
            .to_values_yaml()
            .unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["fullnameOverride"], "sealed-secrets-controller");
        assert_eq!(parsed["metrics"]["serviceMonitor"]["enabled"], true);
    }

    #[test]
    fn test_sealed_secrets_metrics_off_locally() {
        let values = SealedSecretsValues::for_environment(Environment::Local);
        assert_eq!(
            values.metrics,
            Some(Metrics {
                service_monitor: ServiceMonitor { enabled: false }
            })
        );
    }

    #[test]
    fn test_nginx_service_type_by_environment() {
        let local = NginxIngressValues::for_environment(Environment::Local);
        assert_eq!(local.service.unwrap().service_type, "NodePort");

        let production = NginxIngressValues::for_environment(Environment::Production);
        assert_eq!(production.replica_count, Some(3));
        assert_eq!(production.service.unwrap().service_type, "LoadBalancer");
    }

    #[test]
    fn test_linkerd_high_availability_in_production_only() {
        let staging = LinkerdControlPlaneValues::for_environment(Environment::Staging);
        assert_eq!(staging.controller_replicas, Some(1));
        assert_eq!(staging.enable_pod_anti_affinity, Some(false));

        let production = LinkerdControlPlaneValues::for_environment(Environment::Production);
        assert_eq!(production.controller_replicas, Some(3));
        assert_eq!(production.enable_pod_anti_affinity, Some(true));
    }

    #[test]
    fn test_default_values_render_empty_map() {
        let yaml = DefaultValues::default().to_values_yaml().unwrap();
        assert_eq!(yaml.trim(), "{}");
    }
}
