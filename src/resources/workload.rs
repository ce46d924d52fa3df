// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment and Service objects for a service resource

use crate::constants::labels::{APP, MANAGED_BY};
use crate::constants::MANAGER_NAME;
use crate::resources::namespaces::target_namespace;
use crate::resources::settings::AppSettings;
use crate::types::Environment;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, PodSpec, PodTemplateSpec, ResourceRequirements, Service,
    ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use std::collections::BTreeMap;

fn selector_labels(settings: &AppSettings) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(APP.to_string(), settings.resource_name.to_string());
    labels
}

fn metadata(settings: &AppSettings) -> ObjectMeta {
    let mut labels = selector_labels(settings);
    labels.insert(MANAGED_BY.to_string(), MANAGER_NAME.to_string());

    ObjectMeta {
        name: Some(settings.resource_name.to_string()),
        namespace: Some(target_namespace(settings.resource_name).to_string()),
        labels: Some(labels),
        ..Default::default()
    }
}

fn quantities(memory: &str, cpu: &str) -> BTreeMap<String, Quantity> {
    let mut quantities = BTreeMap::new();
    quantities.insert("memory".to_string(), Quantity(memory.to_string()));
    quantities.insert("cpu".to_string(), Quantity(cpu.to_string()));
    quantities
}

pub fn make_deployment(settings: &AppSettings, environment: Environment) -> Deployment {
    let env = settings
        .env_vars(environment)
        .into_iter()
        .map(|(name, value)| EnvVar {
            name,
            value: Some(value),
            ..Default::default()
        })
        .collect();

    let container = Container {
        name: settings.resource_name.to_string(),
        image: Some(settings.image.to_string()),
        ports: Some(vec![ContainerPort {
            container_port: settings.port,
            name: Some("http".to_string()),
            ..Default::default()
        }]),
        env: Some(env),
        resources: Some(ResourceRequirements {
            requests: Some(quantities(settings.request_memory, settings.request_cpu)),
            limits: Some(quantities(settings.limit_memory, settings.limit_cpu)),
            ..Default::default()
        }),
        ..Default::default()
    };

    Deployment {
        metadata: metadata(settings),
        spec: Some(DeploymentSpec {
            replicas: Some(environment.replicas()),
            selector: LabelSelector {
                match_labels: Some(selector_labels(settings)),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(selector_labels(settings)),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn make_service(settings: &AppSettings) -> Service {
    Service {
        metadata: metadata(settings),
        spec: Some(ServiceSpec {
            type_: Some("ClusterIP".to_string()),
            selector: Some(selector_labels(settings)),
            ports: Some(vec![ServicePort {
                name: Some("http".to_string()),
                protocol: Some("TCP".to_string()),
                port: settings.port,
                target_port: Some(IntOrString::Int(settings.port)),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
