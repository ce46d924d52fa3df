// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-service deployment settings and environment variables.

use crate::resources::namespaces::APPLICATIONS;
use crate::types::{Environment, ResourceName};
use std::collections::BTreeMap;

/// Sizing and image of a service workload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub resource_name: ResourceName,
    pub request_memory: &'static str,
    pub request_cpu: &'static str,
    pub limit_memory: &'static str,
    pub limit_cpu: &'static str,
    pub host: &'static str,
    pub port: i32,
    pub image: &'static str,
}

pub const REACT_WEB: AppSettings = AppSettings {
    resource_name: ResourceName::ReactWeb,
    request_memory: "70Mi",
    request_cpu: "100m",
    limit_memory: "200Mi",
    limit_cpu: "100m",
    host: "0.0.0.0",
    port: 3000,
    image: "oyelowo/react-web",
};

pub const GRAPHQL_MONGO: AppSettings = AppSettings {
    resource_name: ResourceName::GraphqlMongo,
    request_memory: "70Mi",
    request_cpu: "100m",
    limit_memory: "200Mi",
    limit_cpu: "100m",
    host: "0.0.0.0",
    port: 8000,
    image: "oyelowo/graphql-mongo",
};

pub const GRAPHQL_POSTGRES: AppSettings = AppSettings {
    resource_name: ResourceName::GraphqlPostgres,
    request_memory: "70Mi",
    request_cpu: "100m",
    limit_memory: "200Mi",
    limit_cpu: "100m",
    host: "0.0.0.0",
    port: 8000,
    image: "oyelowo/graphql-postgres",
};

impl AppSettings {
    /// Cluster-internal base URL of this service
    pub fn service_url(&self) -> String {
        format!("http://{}.{}:{}", self.resource_name, APPLICATIONS, self.port)
    }

    /// Environment variables passed to the container
    pub fn env_vars(&self, environment: Environment) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();
        vars.insert("APP_ENVIRONMENT".to_string(), environment.to_string());
        vars.insert("APP_HOST".to_string(), self.host.to_string());
        vars.insert("APP_PORT".to_string(), self.port.to_string());

        match self.resource_name {
            ResourceName::GraphqlMongo => {
                vars.insert("MONGODB_NAME".to_string(), "db0".to_string());
                vars.insert("MONGODB_USERNAME".to_string(), "username0".to_string());
                vars.insert("MONGODB_PASSWORD".to_string(), "password0".to_string());
                vars.insert("MONGODB_SERVICE_NAME".to_string(), "mongo-database".to_string());
                vars.insert(
                    "MONGODB_HOST".to_string(),
                    format!("mongo-database.{}", APPLICATIONS),
                );
                vars.insert("MONGODB_PORT".to_string(), "27017".to_string());
            }
            ResourceName::GraphqlPostgres => {
                vars.insert("POSTGRES_DATABASE_NAME".to_string(), "db0".to_string());
                vars.insert("POSTGRES_USERNAME".to_string(), "postgres".to_string());
                vars.insert("POSTGRES_PASSWORD".to_string(), "1234".to_string());
                vars.insert(
                    "POSTGRES_HOST".to_string(),
                    format!("postgres-database.{}", APPLICATIONS),
                );
                vars.insert("POSTGRES_PORT".to_string(), "5432".to_string());
            }
            ResourceName::ReactWeb => {
                vars.insert(
                    "GRAPHQL_MONGO_URL".to_string(),
                    format!("{}/graphql", GRAPHQL_MONGO.service_url()),
                );
                vars.insert(
                    "GRAPHQL_POSTGRES_URL".to_string(),
                    format!("{}/graphql", GRAPHQL_POSTGRES.service_url()),
                );
            }
            ResourceName::Namespaces
            | ResourceName::Argocd
            | ResourceName::CertManager
            | ResourceName::Linkerd
            | ResourceName::LinkerdViz
            | ResourceName::SealedSecrets
            | ResourceName::NginxIngress
            | ResourceName::FluvioSys
            | ResourceName::ArgocdApplicationsParents
            | ResourceName::ArgocdApplicationsChildrenInfrastructure
            | ResourceName::ArgocdApplicationsChildrenServices => {}
        }

        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_belong_to_services() {
        for settings in [&REACT_WEB, &GRAPHQL_MONGO, &GRAPHQL_POSTGRES] {
            assert!(settings.resource_name.is_service(), "{}", settings.resource_name);
        }
    }

    #[test]
    fn test_graphql_postgres_env_vars() {
        let vars = GRAPHQL_POSTGRES.env_vars(Environment::Production);
        assert_eq!(vars["APP_ENVIRONMENT"], "production");
        assert_eq!(vars["POSTGRES_HOST"], "postgres-database.applications");
    }

    #[test]
    fn test_graphql_mongo_env_vars() {
        let vars = GRAPHQL_MONGO.env_vars(Environment::Development);
        assert_eq!(vars["APP_ENVIRONMENT"], "development");
        assert_eq!(vars["APP_PORT"], "8000");
        assert_eq!(vars["MONGODB_HOST"], "mongo-database.applications");
        assert_eq!(vars["MONGODB_PORT"], "27017");
    }

    #[test]
    fn test_react_web_points_at_graphql_services() {
        let vars = REACT_WEB.env_vars(Environment::Local);
        assert_eq!(
            vars["GRAPHQL_MONGO_URL"],
            "http://graphql-mongo.applications:8000/graphql"
        );
        assert!(!vars.contains_key("MONGODB_HOST"));
    }

    #[test]
    fn test_only_app_vars_without_service_specifics() {
        let settings = AppSettings {
            resource_name: ResourceName::CertManager,
            ..REACT_WEB
        };
        let keys: Vec<_> = settings.env_vars(Environment::Staging).into_keys().collect();
        assert_eq!(keys, vec!["APP_ENVIRONMENT", "APP_HOST", "APP_PORT"]);
    }
}
