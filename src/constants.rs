// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Directory layout of the rendered manifests
pub mod layout {
    /// Directory holding all manifests, relative to the repository anchor
    pub const MANIFESTS_DIR: &str = "manifests";
    /// Subdirectory of the manifests root holding generated output
    pub const GENERATED_DIR: &str = "generated";
    /// Directory name that marks the start of repository-relative paths
    pub const REPO_ANCHOR_DIR: &str = "kubernetes";
    /// Default output directory for CRD definitions, relative to the manifests root
    pub const CRDS_DIR: &str = "crds";
}

/// Subdirectories written by the directory provider
pub mod render {
    /// CustomResourceDefinitions, applied before anything else
    pub const CRD_DIR: &str = "0-crd";
    /// All other manifests
    pub const MANIFEST_DIR: &str = "1-manifest";
    /// Namespace segment used in file names for cluster-scoped objects
    pub const CLUSTER_SCOPE: &str = "cluster";
}

/// Kubernetes label and annotation keys
pub mod labels {
    pub const APP: &str = "app";
    pub const MANAGED_BY: &str = "app.kubernetes.io/managed-by";
    pub const LINKERD_INJECT: &str = "linkerd.io/inject";
}

/// The tool name recorded in `app.kubernetes.io/managed-by`
pub const MANAGER_NAME: &str = "manifestor";

/// Argo CD settings shared by all generated applications
pub mod argocd {
    /// Git repository Argo CD syncs the rendered manifests from, unless overridden
    pub const DEFAULT_REPO_URL: &str = "https://github.com/example/infrastructure.git";
    /// Git revision to track
    pub const TARGET_REVISION: &str = "HEAD";
    /// In-cluster API server address
    pub const DESTINATION_SERVER: &str = "https://kubernetes.default.svc";
    /// Argo CD project every application belongs to
    pub const PROJECT: &str = "default";
}
