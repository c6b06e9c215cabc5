//! Project files around the per-collection sources.

mod app;
mod auth;
mod db;
mod docker;
mod env;
mod error_handler;
mod gitignore;
mod index;
mod jest;
mod package_json;
mod readme;
mod tsconfig;

pub use app::{App, RouteMount};
pub use auth::{AuthMiddleware, UNAUTHORIZED_MESSAGE};
pub use db::DbConfig;
pub use docker::{DockerCompose, Dockerfile};
pub use env::EnvFile;
pub use error_handler::ErrorMiddleware;
pub use gitignore::GitIgnore;
pub use index::IndexFile;
pub use jest::{AppTest, JestConfig, UnitTestsDir};
pub use package_json::{Dependency, PackageJson};
pub use readme::Readme;
pub use tsconfig::TsConfig;
