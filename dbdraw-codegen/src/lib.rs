//! Shared code generation utilities for dbdraw.
//!
//! Language-agnostic pieces used by target generators such as
//! `dbdraw-codegen-mongoose`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`config`] - Generation config and feature flags
//! - [`emit`] - Per-collection emitter contract and skip signal
//! - [`language`] - Generator and type mapper traits

pub mod builder;
pub mod config;
pub mod emit;
pub mod language;

pub use config::{Feature, FeatureSet, GenerationConfig, is_valid_project_name};
pub use emit::{Artifact, Emission, Emitter, SkipReason, SkippedCollection};
