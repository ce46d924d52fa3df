// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Helm chart references and their typed values.

pub mod charts;
pub mod values;

pub use charts::HelmChartInfo;
pub use values::ChartValues;
