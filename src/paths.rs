// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Where rendered manifests live on disk.
//!
//! Output is laid out as
//! `<manifests root>/generated/<environment>/<resource type>/<resource name>`.
//! Every function here is a pure path computation; nothing touches the
//! filesystem.

use crate::constants::layout::{GENERATED_DIR, MANIFESTS_DIR, REPO_ANCHOR_DIR};
use crate::error::{ManifestorError, Result};
use crate::types::{Environment, ResourceName, ResourceType};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Base directory for all manifests, fixed by the repository layout.
///
/// Sits below the `kubernetes` anchor so every path built from it has a
/// repository-relative form.
pub fn manifests_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(REPO_ANCHOR_DIR)
        .join(MANIFESTS_DIR)
}

pub fn environment_manifests_dir(environment: Environment) -> PathBuf {
    ManifestsLayout::default().environment_manifests_dir(environment)
}

pub fn resource_type_dir(environment: Environment, resource_type: ResourceType) -> PathBuf {
    ManifestsLayout::default().resource_type_dir(environment, resource_type)
}

pub fn resource_path(environment: Environment, resource_name: ResourceName) -> PathBuf {
    ManifestsLayout::default().resource_path(environment, resource_name)
}

/// Strip everything before the `kubernetes` directory, keeping it as the
/// first segment of the returned path.
///
/// The last occurrence of the anchor wins, so a checkout that itself sits
/// below a directory named `kubernetes` still resolves to the repository's
/// own anchor.
pub fn repo_relative_path(path: &Path) -> Result<PathBuf> {
    let anchor = OsStr::new(REPO_ANCHOR_DIR);
    let components: Vec<Component<'_>> = path.components().collect();

    let start = components
        .iter()
        .rposition(|c| matches!(c, Component::Normal(name) if *name == anchor))
        .ok_or_else(|| ManifestorError::AnchorNotFound {
            path: path.to_path_buf(),
            anchor: REPO_ANCHOR_DIR.to_string(),
        })?;

    Ok(components[start..].iter().collect())
}

/// Manifest directory layout rooted at a configurable base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestsLayout {
    root: PathBuf,
    /// Replaces the environment segment, for scratch renders that must not
    /// overwrite an environment's committed output
    scratch_dir: Option<String>,
}

impl Default for ManifestsLayout {
    fn default() -> Self {
        Self::new(manifests_root())
    }
}

impl ManifestsLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            scratch_dir: None,
        }
    }

    pub fn with_scratch_dir(mut self, scratch_dir: Option<String>) -> Self {
        self.scratch_dir = scratch_dir;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn environment_manifests_dir(&self, environment: Environment) -> PathBuf {
        let segment = self
            .scratch_dir
            .as_deref()
            .unwrap_or_else(|| environment.as_str());
        self.root.join(GENERATED_DIR).join(segment)
    }

    pub fn resource_type_dir(&self, environment: Environment, resource_type: ResourceType) -> PathBuf {
        self.environment_manifests_dir(environment)
            .join(resource_type.as_str())
    }

    pub fn resource_path(&self, environment: Environment, resource_name: ResourceName) -> PathBuf {
        self.resource_type_dir(environment, resource_name.resource_type())
            .join(resource_name.as_str())
    }

    /// Repository-relative path of a resource's directory, as Argo CD sees it
    pub fn repo_relative_resource_path(
        &self,
        environment: Environment,
        resource_name: ResourceName,
    ) -> Result<PathBuf> {
        repo_relative_path(&self.resource_path(environment, resource_name))
    }
}
