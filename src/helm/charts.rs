// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Helm repositories and pinned chart versions the infrastructure installs.

use std::collections::BTreeMap;

/// A chart pinned to a version in a named repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelmChartInfo {
    pub repo_name: &'static str,
    pub repo_url: &'static str,
    pub chart: &'static str,
    pub version: &'static str,
}

pub const SEALED_SECRETS: HelmChartInfo = HelmChartInfo {
    repo_name: "bitnami",
    repo_url: "https://charts.bitnami.com/bitnami",
    chart: "sealed-secrets",
    version: "1.0.2",
};

pub const NGINX_INGRESS: HelmChartInfo = HelmChartInfo {
    repo_name: "bitnami",
    repo_url: "https://charts.bitnami.com/bitnami",
    chart: "nginx-ingress-controller",
    version: "9.2.25",
};

pub const CERT_MANAGER: HelmChartInfo = HelmChartInfo {
    repo_name: "jetstack",
    repo_url: "https://charts.jetstack.io",
    chart: "cert-manager",
    version: "v1.9.1",
};

pub const LINKERD_CRDS: HelmChartInfo = HelmChartInfo {
    repo_name: "linkerd",
    repo_url: "https://helm.linkerd.io/stable",
    chart: "linkerd-crds",
    version: "1.4.0",
};

pub const LINKERD_CONTROL_PLANE: HelmChartInfo = HelmChartInfo {
    repo_name: "linkerd",
    repo_url: "https://helm.linkerd.io/stable",
    chart: "linkerd-control-plane",
    version: "1.9.3",
};

pub const LINKERD_VIZ: HelmChartInfo = HelmChartInfo {
    repo_name: "linkerd",
    repo_url: "https://helm.linkerd.io/stable",
    chart: "linkerd-viz",
    version: "30.3.3",
};

pub const ARGO_CD: HelmChartInfo = HelmChartInfo {
    repo_name: "argo",
    repo_url: "https://argoproj.github.io/argo-helm",
    chart: "argo-cd",
    version: "4.10.5",
};

pub const FLUVIO_SYS: HelmChartInfo = HelmChartInfo {
    repo_name: "fluvio",
    repo_url: "https://charts.fluvio.io",
    chart: "fluvio-sys",
    version: "0.9.10",
};

pub const ALL_CHARTS: [HelmChartInfo; 8] = [
    SEALED_SECRETS,
    NGINX_INGRESS,
    CERT_MANAGER,
    LINKERD_CRDS,
    LINKERD_CONTROL_PLANE,
    LINKERD_VIZ,
    ARGO_CD,
    FLUVIO_SYS,
];

/// Charts grouped by repository name
pub fn charts_by_repo() -> BTreeMap<&'static str, Vec<HelmChartInfo>> {
    let mut repos: BTreeMap<&'static str, Vec<HelmChartInfo>> = BTreeMap::new();
    for chart in ALL_CHARTS {
        repos.entry(chart.repo_name).or_default().push(chart);
    }
    repos
}
