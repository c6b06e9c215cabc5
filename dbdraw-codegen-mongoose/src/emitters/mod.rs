//! Per-collection emitters.
//!
//! Each emitter renders one [`Collection`](dbdraw_graph::Collection) into
//! one file and reports a skip for collections with nothing but `_id`.

mod controller;
mod inline;
mod model;
mod route;
mod schema;

pub use controller::{ControllerEmitter, Handlers};
pub use inline::InlineSchemaEmitter;
pub use model::ModelEmitter;
pub use route::RouteEmitter;
