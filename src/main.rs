// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use manifestor::config::Config;
use manifestor::constants::layout::CRDS_DIR;
use manifestor::emitter::DirectoryProvider;
use manifestor::helm::charts::charts_by_repo;
use manifestor::paths::repo_relative_path;
use manifestor::resources::{render_environment, RenderContext};
use manifestor::types::{custom_resource_definitions, Environment, ResourceName};

#[derive(Parser)]
#[command(name = "manifestor")]
#[command(version)]
#[command(about = "Render Kubernetes manifests per environment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render resources into the generated manifests directory
    Render {
        /// Target environment
        #[arg(short, long, env = "ENVIRONMENT", value_enum)]
        environment: Environment,

        /// Only render these resources (default: all)
        #[arg(short, long = "resource", value_enum)]
        resources: Vec<ResourceName>,
    },

    /// Print the directory a resource is rendered into
    Path {
        /// Resource to locate
        #[arg(value_enum)]
        resource: ResourceName,

        /// Target environment
        #[arg(short, long, env = "ENVIRONMENT", value_enum)]
        environment: Environment,

        /// Print the path relative to the repository
        #[arg(long)]
        relative: bool,
    },

    /// Write the CRDs of the bound custom resources
    Crds {
        /// Output directory (default: <manifests root>/crds)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// List every resource with its category
    List,

    /// List the pinned helm charts, grouped by repository
    Charts,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    debug!("Configuration loaded: {:?}", config);
    let layout = config.layout();

    match cli.command {
        Commands::Render {
            environment,
            resources,
        } => {
            info!(
                "Rendering {} into {}",
                environment,
                layout.environment_manifests_dir(environment).display()
            );
            let ctx = RenderContext {
                layout: &layout,
                environment,
                repo_url: &config.repo_url,
            };
            let written = render_environment(&ctx, &resources)
                .with_context(|| format!("Failed to render environment {}", environment))?;
            for path in written {
                debug!("wrote {}", path.display());
            }
        }
        Commands::Path {
            resource,
            environment,
            relative,
        } => {
            let path = layout.resource_path(environment, resource);
            let path = if relative {
                repo_relative_path(&path)?
            } else {
                path
            };
            println!("{}", path.display());
        }
        Commands::Crds { output_dir } => {
            let output_dir = output_dir.unwrap_or_else(|| layout.root().join(CRDS_DIR));
            let mut provider = DirectoryProvider::new("render-crds", output_dir);
            for crd in custom_resource_definitions() {
                provider.register(&crd)?;
            }
            let written = provider.write().with_context(|| {
                format!("Failed to write CRDs to {}", provider.directory().display())
            })?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Commands::List => {
            for resource in ResourceName::ALL {
                println!("{:<45} {}", resource, resource.resource_type());
            }
        }
        Commands::Charts => {
            for (repo_name, charts) in charts_by_repo() {
                let repo_url = charts.first().map(|c| c.repo_url).unwrap_or_default();
                println!("{} {}", repo_name, repo_url);
                for chart in charts {
                    println!("  {:<25} {}", chart.chart, chart.version);
                }
            }
        }
    }

    Ok(())
}
