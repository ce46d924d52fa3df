// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::argocd::DEFAULT_REPO_URL;
use crate::paths::{manifests_root, ManifestsLayout};
use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

/// Renderer configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base directory for generated manifests
    pub manifests_root: PathBuf,
    /// Renders into `generated/<dir>` instead of `generated/<environment>` when set
    pub temporary_dir: Option<String>,
    /// Git repository Argo CD applications sync from
    pub repo_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifests_root: manifests_root(),
            temporary_dir: None,
            repo_url: DEFAULT_REPO_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let manifests_root = match lookup("MANIFESTS_ROOT") {
            Some(root) => {
                let root = PathBuf::from(root);
                if root.is_absolute() {
                    root
                } else {
                    env::current_dir()
                        .context("MANIFESTS_ROOT is relative and the current directory is unavailable")?
                        .join(root)
                }
            }
            None => manifests_root(),
        };
        let temporary_dir = lookup("TEMPORARY_DIR")
            .filter(|dir| !dir.is_empty())
            .map(|dir| validate_scratch_dir(&dir).map(|()| dir))
            .transpose()
            .context("Invalid TEMPORARY_DIR")?;
        let repo_url = lookup("ARGOCD_REPO_URL").unwrap_or_else(|| DEFAULT_REPO_URL.to_string());

        Ok(Config {
            manifests_root,
            temporary_dir,
            repo_url,
        })
    }

    pub fn layout(&self) -> ManifestsLayout {
        ManifestsLayout::new(&self.manifests_root).with_scratch_dir(self.temporary_dir.clone())
    }
}

/// The scratch directory replaces the environment segment, so it must be
/// exactly one plain directory name.
fn validate_scratch_dir(dir: &str) -> Result<()> {
    let mut components = Path::new(dir).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("'{}' must be a single directory name below generated/", dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("MANIFESTS_ROOT", "/srv/repo/kubernetes/manifests"),
            ("TEMPORARY_DIR", "tmp-diff"),
            ("ARGOCD_REPO_URL", "https://git.example.com/infra.git"),
        ]);

        assert_eq!(config.manifests_root, PathBuf::from("/srv/repo/kubernetes/manifests"));
        assert_eq!(config.temporary_dir.as_deref(), Some("tmp-diff"));
        assert_eq!(config.repo_url, "https://git.example.com/infra.git");
    }

    #[test]
    fn test_empty_temporary_dir_is_ignored() {
        let config = load(&[("TEMPORARY_DIR", "")]);
        assert_eq!(config.temporary_dir, None);
    }

    #[test]
    fn test_temporary_dir_must_be_single_component() {
        for dir in ["/etc", "../outside", "nested/dir", ".", ".."] {
            let vars = HashMap::from([("TEMPORARY_DIR".to_string(), dir.to_string())]);
            let err = Config::from_lookup(|key| vars.get(key).cloned()).unwrap_err();
            assert!(err.to_string().contains("TEMPORARY_DIR"), "{dir}: {err:#}");
        }
    }

    #[test]
    fn test_layout_uses_temporary_dir() {
        let config = load(&[
            ("MANIFESTS_ROOT", "/srv/repo/kubernetes/manifests"),
            ("TEMPORARY_DIR", "tmp-diff"),
        ]);
        assert_eq!(
            config
                .layout()
                .environment_manifests_dir(crate::types::Environment::Production),
            PathBuf::from("/srv/repo/kubernetes/manifests/generated/tmp-diff")
        );
    }
}
