//! Node builders for Rust declarations, statements, and expressions.
//!
//! Each node is a plain value constructed once by the caller; rendering never
//! mutates a node and never caches output.

mod chains;
mod enums;
mod exprs;
mod fns;
mod impls;
mod imports;
mod stmts;
mod structs;
mod traits;
mod types;

pub use chains::{Access, Brackets, Call, Property, Segment};
pub use enums::{Enum, Variant};
pub use exprs::{BinaryOp, BinaryOperator, Expr, Literal, VarRef};
pub use fns::{Fn, Param, Return};
pub use impls::Impl;
pub use imports::{PathSegment, Use};
pub use stmts::{Assign, AssignOp, Comment, Let};
pub use structs::{Field, FieldInit, Struct, StructInit};
pub use traits::{Trait, TraitFn};
pub use types::{Type, TypeBase};
