//! JavaScript/TypeScript AST builders for imports, exports, declarations and chains.
//!
//! These provide a high-level API for constructing source text, rendered
//! through `CodeBuilder`.

mod chain;
mod consts;
mod exports;
mod fns;
mod imports;
mod interface;

pub use chain::MethodChain;
pub use consts::Const;
pub use exports::Export;
pub use fns::{ArrowFn, Param};
pub use imports::Import;
pub use interface::Interface;
