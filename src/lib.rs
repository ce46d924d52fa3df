// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod emitter;
pub mod error;
pub mod helm;
pub mod paths;
pub mod resources;
pub mod types;
