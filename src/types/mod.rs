// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Closed enumerations for environments and resources, and typed CRD bindings.

pub mod application;
pub mod environment;
pub mod resource;
pub mod sealed_secret;

pub use application::Application;
pub use environment::Environment;
pub use resource::{ResourceName, ResourceType};
pub use sealed_secret::SealedSecret;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;

/// Definitions of every custom resource this crate has bindings for
pub fn custom_resource_definitions() -> Vec<CustomResourceDefinition> {
    vec![Application::crd(), SealedSecret::crd()]
}
