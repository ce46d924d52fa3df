// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Composition of every resource and rendering of an environment.
//!
//! Each resource gets its own [`DirectoryProvider`] rooted at its resource
//! path; the objects that make up the resource are registered against that
//! provider and written out together.

pub mod argocd;
pub mod namespaces;
pub mod settings;
pub mod workload;

use crate::emitter::DirectoryProvider;
use crate::error::Result;
use crate::helm::charts;
use crate::helm::values::{
    ArgoCdValues, CertManagerValues, DefaultValues, LinkerdControlPlaneValues,
    NginxIngressValues, SealedSecretsValues,
};
use crate::paths::ManifestsLayout;
use crate::resources::argocd::{create_argocd_application, create_helm_application, ArgoApplicationOptions};
use crate::resources::namespaces::{managed_namespaces, target_namespace};
use crate::resources::settings::{AppSettings, GRAPHQL_MONGO, GRAPHQL_POSTGRES, REACT_WEB};
use crate::types::{Environment, ResourceName};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Everything needed to render resources for one environment
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub layout: &'a ManifestsLayout,
    pub environment: Environment,
    pub repo_url: &'a str,
}

/// Provider rendering into the directory of `resource_name`
pub fn resource_provider(
    layout: &ManifestsLayout,
    environment: Environment,
    resource_name: ResourceName,
) -> DirectoryProvider {
    DirectoryProvider::new(
        format!("render-{}", resource_name),
        layout.resource_path(environment, resource_name),
    )
}

/// Resources that only exist to bootstrap the Argo CD app-of-apps tree
pub fn is_argocd_bootstrap(resource_name: ResourceName) -> bool {
    matches!(
        resource_name,
        ResourceName::ArgocdApplicationsParents
            | ResourceName::ArgocdApplicationsChildrenInfrastructure
            | ResourceName::ArgocdApplicationsChildrenServices
    )
}

fn register_service(
    provider: &mut DirectoryProvider,
    settings: &AppSettings,
    environment: Environment,
) -> Result<()> {
    provider.register(&workload::make_deployment(settings, environment))?;
    provider.register(&workload::make_service(settings))
}

fn register_children(
    ctx: &RenderContext<'_>,
    provider: &mut DirectoryProvider,
    children: impl Iterator<Item = ResourceName>,
) -> Result<()> {
    for child in children {
        let options = ArgoApplicationOptions {
            source: child,
            environment: ctx.environment,
            namespace: target_namespace(child),
            repo_url: ctx.repo_url,
        };
        provider.register(&create_argocd_application(ctx.layout, &options)?)?;
    }
    Ok(())
}

/// Register the objects that make up `resource_name`
pub fn register_resource(
    ctx: &RenderContext<'_>,
    resource_name: ResourceName,
    provider: &mut DirectoryProvider,
) -> Result<()> {
    let environment = ctx.environment;
    let namespace = target_namespace(resource_name);

    match resource_name {
        ResourceName::ReactWeb => register_service(provider, &REACT_WEB, environment),
        ResourceName::GraphqlMongo => register_service(provider, &GRAPHQL_MONGO, environment),
        ResourceName::GraphqlPostgres => register_service(provider, &GRAPHQL_POSTGRES, environment),
        ResourceName::Namespaces => {
            for namespace in managed_namespaces() {
                provider.register(&namespace)?;
            }
            Ok(())
        }
        ResourceName::Argocd => provider.register(&create_helm_application(
            &charts::ARGO_CD,
            &ArgoCdValues::insecure_server(),
            namespace,
        )?),
        ResourceName::CertManager => provider.register(&create_helm_application(
            &charts::CERT_MANAGER,
            &CertManagerValues { install_crds: true },
            namespace,
        )?),
        ResourceName::Linkerd => {
            provider.register(&create_helm_application(
                &charts::LINKERD_CRDS,
                &DefaultValues::default(),
                namespace,
            )?)?;
            provider.register(&create_helm_application(
                &charts::LINKERD_CONTROL_PLANE,
                &LinkerdControlPlaneValues::for_environment(environment),
                namespace,
            )?)
        }
        ResourceName::LinkerdViz => provider.register(&create_helm_application(
            &charts::LINKERD_VIZ,
            &DefaultValues::default(),
            namespace,
        )?),
        ResourceName::SealedSecrets => provider.register(&create_helm_application(
            &charts::SEALED_SECRETS,
            &SealedSecretsValues::for_environment(environment),
            namespace,
        )?),
        ResourceName::NginxIngress => provider.register(&create_helm_application(
            &charts::NGINX_INGRESS,
            &NginxIngressValues::for_environment(environment),
            namespace,
        )?),
        ResourceName::FluvioSys => provider.register(&create_helm_application(
            &charts::FLUVIO_SYS,
            &DefaultValues::default(),
            namespace,
        )?),
        ResourceName::ArgocdApplicationsParents => register_children(
            ctx,
            provider,
            [
                ResourceName::ArgocdApplicationsChildrenInfrastructure,
                ResourceName::ArgocdApplicationsChildrenServices,
            ]
            .into_iter(),
        ),
        ResourceName::ArgocdApplicationsChildrenInfrastructure => register_children(
            ctx,
            provider,
            ResourceName::ALL
                .into_iter()
                .filter(|name| !name.is_service() && !is_argocd_bootstrap(*name)),
        ),
        ResourceName::ArgocdApplicationsChildrenServices => register_children(
            ctx,
            provider,
            ResourceName::ALL.into_iter().filter(ResourceName::is_service),
        ),
    }
}

/// Render a single resource into its directory
#[instrument(skip(ctx), fields(environment = %ctx.environment))]
pub fn render_resource(ctx: &RenderContext<'_>, resource_name: ResourceName) -> Result<Vec<PathBuf>> {
    let mut provider = resource_provider(ctx.layout, ctx.environment, resource_name);
    register_resource(ctx, resource_name, &mut provider)?;
    provider.write()
}

/// Render the selected resources, or all of them when `selection` is empty
#[instrument(skip(ctx, selection), fields(environment = %ctx.environment))]
pub fn render_environment(
    ctx: &RenderContext<'_>,
    selection: &[ResourceName],
) -> Result<Vec<PathBuf>> {
    let resources: &[ResourceName] = if selection.is_empty() {
        &ResourceName::ALL
    } else {
        selection
    };

    let mut written = Vec::new();
    for resource_name in resources {
        written.extend(render_resource(ctx, *resource_name)?);
    }

    info!(
        "Rendered {} resources ({} files) for {}",
        resources.len(),
        written.len(),
        ctx.environment
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::Application;
    use k8s_openapi::api::apps::v1::Deployment;
    use std::fs;
    use tempfile::TempDir;

    const REPO_URL: &str = "https://example.com/repo.git";

    fn make_layout(tmp: &TempDir) -> ManifestsLayout {
        ManifestsLayout::new(tmp.path().join("kubernetes").join("manifests"))
    }

    fn make_context(layout: &ManifestsLayout, environment: Environment) -> RenderContext<'_> {
        RenderContext {
            layout,
            environment,
            repo_url: REPO_URL,
        }
    }

    fn registered(ctx: &RenderContext<'_>, resource_name: ResourceName) -> DirectoryProvider {
        let mut provider = resource_provider(ctx.layout, ctx.environment, resource_name);
        register_resource(ctx, resource_name, &mut provider).unwrap();
        provider
    }

    #[test]
    fn test_every_resource_registers_objects() {
        let tmp = TempDir::new().unwrap();
        let layout = make_layout(&tmp);
        let ctx = make_context(&layout, Environment::Staging);

        for name in ResourceName::ALL {
            assert!(!registered(&ctx, name).manifests().is_empty(), "{name}");
        }
    }

    #[test]
    fn test_service_registers_deployment_and_service() {
        let tmp = TempDir::new().unwrap();
        let layout = make_layout(&tmp);
        let ctx = make_context(&layout, Environment::Local);

        let kinds: Vec<_> = registered(&ctx, ResourceName::GraphqlMongo)
            .manifests()
            .iter()
            .map(|m| m.kind.clone())
            .collect();
        assert_eq!(kinds, vec!["Deployment", "Service"]);
    }

    #[test]
    fn test_children_services_point_at_service_directories() {
        let tmp = TempDir::new().unwrap();
        let layout = make_layout(&tmp);
        let ctx = make_context(&layout, Environment::Production);

        let provider = registered(&ctx, ResourceName::ArgocdApplicationsChildrenServices);
        let paths: Vec<_> = provider
            .manifests()
            .iter()
            .map(|m| m.body["spec"]["source"]["path"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(
            paths,
            vec![
                "kubernetes/manifests/generated/production/services/react-web",
                "kubernetes/manifests/generated/production/services/graphql-mongo",
                "kubernetes/manifests/generated/production/services/graphql-postgres",
            ]
        );
    }

    #[test]
    fn test_children_infrastructure_skips_bootstrap_resources() {
        let tmp = TempDir::new().unwrap();
        let layout = make_layout(&tmp);
        let ctx = make_context(&layout, Environment::Development);

        let provider = registered(&ctx, ResourceName::ArgocdApplicationsChildrenInfrastructure);
        let names: Vec<_> = provider.manifests().iter().map(|m| m.name.as_str()).collect();

        assert!(names.contains(&"cert-manager"));
        assert!(names.contains(&"namespaces"));
        assert!(!names.iter().any(|n| n.starts_with("argocd-applications")));
        assert!(!names.contains(&"graphql-mongo"));
    }

    #[test]
    fn test_parents_point_at_children() {
        let tmp = TempDir::new().unwrap();
        let layout = make_layout(&tmp);
        let ctx = make_context(&layout, Environment::Local);

        let provider = registered(&ctx, ResourceName::ArgocdApplicationsParents);
        let names: Vec<_> = provider.manifests().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "argocd-applications-children-infrastructure",
                "argocd-applications-children-services"
            ]
        );
    }

    #[test]
    fn test_bootstrap_resources_register_with_default_config() {
        let config = Config::default();
        let layout = config.layout();
        let ctx = RenderContext {
            layout: &layout,
            environment: Environment::Local,
            repo_url: &config.repo_url,
        };

        for name in [
            ResourceName::ArgocdApplicationsParents,
            ResourceName::ArgocdApplicationsChildrenInfrastructure,
            ResourceName::ArgocdApplicationsChildrenServices,
        ] {
            let provider = registered(&ctx, name);
            for manifest in provider.manifests() {
                let path = manifest.body["spec"]["source"]["path"].as_str().unwrap();
                assert!(path.starts_with("kubernetes/manifests/generated/local/"), "{path}");
            }
        }
    }

    #[test]
    fn test_render_resource_writes_under_resource_path() {
        let tmp = TempDir::new().unwrap();
        let layout = make_layout(&tmp);
        let ctx = make_context(&layout, Environment::Development);

        let written = render_resource(&ctx, ResourceName::GraphqlMongo).unwrap();
        let resource_dir = layout.resource_path(Environment::Development, ResourceName::GraphqlMongo);

        assert_eq!(written.len(), 2);
        assert!(written.iter().all(|p| p.starts_with(&resource_dir)));

        let deployment_path =
            resource_dir.join("1-manifest/apps_v1-deployment-applications-graphql-mongo.yaml");
        let deployment: Deployment =
            serde_yaml::from_str(&fs::read_to_string(deployment_path).unwrap()).unwrap();
        assert_eq!(deployment.spec.unwrap().replicas, Some(1));
    }

    #[test]
    fn test_render_environment_selection() {
        let tmp = TempDir::new().unwrap();
        let layout = make_layout(&tmp);
        let ctx = make_context(&layout, Environment::Production);

        let written = render_environment(&ctx, &[ResourceName::CertManager]).unwrap();
        assert_eq!(written.len(), 1);

        let app: Application = serde_yaml::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(app.chart(), Some("cert-manager"));
        assert!(written[0].starts_with(
            layout.resource_path(Environment::Production, ResourceName::CertManager)
        ));
        assert!(!layout
            .resource_path(Environment::Production, ResourceName::ReactWeb)
            .exists());
    }

    #[test]
    fn test_render_environment_all() {
        let tmp = TempDir::new().unwrap();
        let layout = make_layout(&tmp);
        let ctx = make_context(&layout, Environment::Staging);

        render_environment(&ctx, &[]).unwrap();

        for name in ResourceName::ALL {
            assert!(layout.resource_path(Environment::Staging, name).is_dir(), "{name}");
        }
        assert!(!layout.environment_manifests_dir(Environment::Local).exists());
    }
}
