// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Argo CD applications: directory sources for the app-of-apps tree and
//! helm sources for third-party charts.

use crate::constants::argocd::{DESTINATION_SERVER, PROJECT, TARGET_REVISION};
use crate::constants::labels::MANAGED_BY;
use crate::constants::MANAGER_NAME;
use crate::error::Result;
use crate::helm::{ChartValues, HelmChartInfo};
use crate::paths::ManifestsLayout;
use crate::resources::namespaces::ARGOCD;
use crate::types::application::{
    Application, ApplicationDestination, ApplicationSource, ApplicationSourceDirectory,
    ApplicationSourceHelm, ApplicationSpec, SyncPolicy, SyncPolicyAutomated,
};
use crate::types::{Environment, ResourceName};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;
use tracing::debug;

/// Application that syncs the rendered directory of `source` into `namespace`
#[derive(Debug, Clone)]
pub struct ArgoApplicationOptions<'a> {
    pub source: ResourceName,
    pub environment: Environment,
    pub namespace: &'a str,
    pub repo_url: &'a str,
}

fn application_metadata(name: &str) -> ObjectMeta {
    let mut labels = BTreeMap::new();
    labels.insert(MANAGED_BY.to_string(), MANAGER_NAME.to_string());

    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(ARGOCD.to_string()),
        labels: Some(labels),
        ..Default::default()
    }
}

fn automated_sync(sync_options: Vec<String>) -> Option<SyncPolicy> {
    Some(SyncPolicy {
        automated: Some(SyncPolicyAutomated {
            prune: Some(true),
            self_heal: Some(true),
        }),
        sync_options,
    })
}

/// Build the application for a resource directory.
///
/// The source path is the resource's repository-relative directory, so the
/// layout root must sit below the repository's `kubernetes` directory.
pub fn create_argocd_application(
    layout: &ManifestsLayout,
    options: &ArgoApplicationOptions<'_>,
) -> Result<Application> {
    let path = layout.repo_relative_resource_path(options.environment, options.source)?;
    debug!(
        "Argo CD application {} syncs {}",
        options.source,
        path.display()
    );

    Ok(Application {
        metadata: application_metadata(options.source.as_str()),
        spec: ApplicationSpec {
            project: PROJECT.to_string(),
            source: ApplicationSource {
                repo_url: options.repo_url.to_string(),
                path: Some(path.to_string_lossy().into_owned()),
                target_revision: Some(TARGET_REVISION.to_string()),
                directory: Some(ApplicationSourceDirectory {
                    recurse: Some(true),
                }),
                ..Default::default()
            },
            destination: ApplicationDestination {
                server: Some(DESTINATION_SERVER.to_string()),
                namespace: Some(options.namespace.to_string()),
            },
            sync_policy: automated_sync(Vec::new()),
        },
    })
}

/// Build an application that installs a helm chart straight from its repository
pub fn create_helm_application(
    chart: &HelmChartInfo,
    values: &impl ChartValues,
    namespace: &str,
) -> Result<Application> {
    Ok(Application {
        metadata: application_metadata(&format!("{}-chart", chart.chart)),
        spec: ApplicationSpec {
            project: PROJECT.to_string(),
            source: ApplicationSource {
                repo_url: chart.repo_url.to_string(),
                chart: Some(chart.chart.to_string()),
                target_revision: Some(chart.version.to_string()),
                helm: Some(ApplicationSourceHelm {
                    release_name: Some(chart.chart.to_string()),
                    values: Some(values.to_values_yaml()?),
                }),
                ..Default::default()
            },
            destination: ApplicationDestination {
                server: Some(DESTINATION_SERVER.to_string()),
                namespace: Some(namespace.to_string()),
            },
            sync_policy: automated_sync(vec![
                "CreateNamespace=true".to_string(),
                "ServerSideApply=true".to_string(),
            ]),
        },
    })
}
