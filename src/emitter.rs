// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Renders registered Kubernetes objects into YAML files under one directory.

use crate::constants::render::{CLUSTER_SCOPE, CRD_DIR, MANIFEST_DIR};
use crate::error::{ManifestorError, Result};
use kube::Resource;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const CRD_KIND: &str = "CustomResourceDefinition";

/// One serialized object waiting to be written
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedManifest {
    pub api_version: String,
    pub kind: String,
    pub namespace: Option<String>,
    pub name: String,
    pub body: serde_json::Value,
}

impl RenderedManifest {
    pub fn is_crd(&self) -> bool {
        self.kind == CRD_KIND
    }

    /// Path of this manifest relative to the provider directory
    pub fn relative_path(&self) -> PathBuf {
        let group_dir = if self.is_crd() { CRD_DIR } else { MANIFEST_DIR };
        let file_name = format!(
            "{}-{}-{}-{}.yaml",
            self.api_version.replace('/', "_"),
            self.kind,
            self.namespace.as_deref().unwrap_or(CLUSTER_SCOPE),
            self.name
        )
        .to_lowercase();
        Path::new(group_dir).join(file_name)
    }
}

/// Provider that writes every object registered against it to its directory
#[derive(Debug)]
pub struct DirectoryProvider {
    name: String,
    render_yaml_to_directory: PathBuf,
    manifests: Vec<RenderedManifest>,
}

impl DirectoryProvider {
    pub fn new(name: impl Into<String>, render_yaml_to_directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            render_yaml_to_directory: render_yaml_to_directory.into(),
            manifests: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &Path {
        &self.render_yaml_to_directory
    }

    pub fn manifests(&self) -> &[RenderedManifest] {
        &self.manifests
    }

    /// Register an object to be rendered.
    ///
    /// Objects must be named, and no two objects may map to the same file.
    pub fn register<K>(&mut self, object: &K) -> Result<()>
    where
        K: Resource<DynamicType = ()> + Serialize,
    {
        let meta = object.meta();
        let name = meta.name.clone().ok_or_else(|| {
            ManifestorError::InvalidResource(format!(
                "{} registered with provider '{}' has no name",
                K::kind(&()),
                self.name
            ))
        })?;

        let manifest = RenderedManifest {
            api_version: K::api_version(&()).into_owned(),
            kind: K::kind(&()).into_owned(),
            namespace: meta.namespace.clone(),
            name,
            body: serde_json::to_value(object)?,
        };

        let relative_path = manifest.relative_path();
        if self
            .manifests
            .iter()
            .any(|m| m.relative_path() == relative_path)
        {
            return Err(ManifestorError::InvalidResource(format!(
                "{} '{}' is registered twice with provider '{}'",
                manifest.kind, manifest.name, self.name
            )));
        }

        debug!(
            "Registered {} {} with provider {}",
            manifest.kind, manifest.name, self.name
        );
        self.manifests.push(manifest);
        Ok(())
    }

    /// Write all registered objects, replacing earlier output of this provider.
    ///
    /// Only the `0-crd` and `1-manifest` subdirectories are cleared.
    #[instrument(skip(self), fields(provider = %self.name, dir = %self.render_yaml_to_directory.display()))]
    pub fn write(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.render_yaml_to_directory;

        for group_dir in [CRD_DIR, MANIFEST_DIR] {
            let stale = dir.join(group_dir);
            match fs::remove_dir_all(&stale) {
                Ok(()) => debug!("Cleared previous output in {}", stale.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(ManifestorError::io(stale, e)),
            }
        }

        let mut written = Vec::with_capacity(self.manifests.len());
        for manifest in &self.manifests {
            let file_path = dir.join(manifest.relative_path());
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).map_err(|e| ManifestorError::io(parent, e))?;
            }

            let yaml = serde_yaml::to_string(&manifest.body)?;
            fs::write(&file_path, yaml).map_err(|e| ManifestorError::io(&file_path, e))?;
            written.push(file_path);
        }

        info!(
            "Rendered {} manifests for provider {} into {}",
            written.len(),
            self.name,
            dir.display()
        );
        Ok(written)
    }
}
