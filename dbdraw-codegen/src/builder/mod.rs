//! Building blocks for indented JavaScript/TypeScript text.
//!
//! AST nodes implement [`Renderable`] and produce [`CodeFragment`]s;
//! [`CodeBuilder`] lays them out with one [`Indent`] unit per level.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
