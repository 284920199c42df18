//! Programmatic builder and printer for Rust source text.
//!
//! Callers construct a tree of typed nodes and render it to text; correct
//! punctuation, bracing, and indentation come from the node model rather than
//! string templating. The crate emits source only — it never parses, and it
//! makes no semantic guarantees about the code it prints (a referenced
//! identifier may not exist; the output is syntactically shaped, nothing
//! more).
//!
//! Rendering is a pure, synchronous string computation. Indentation depth is
//! carried by a [`Context`] value threaded through each render call, so any
//! number of render passes can run independently, including concurrently.
//!
//! # Example
//!
//! ```
//! use quill::{Field, Render, SourceFile, Struct, Type};
//!
//! let file = SourceFile::new().item(
//!     Struct::new("Point")
//!         .public()
//!         .field(Field::new("x", Type::named("i64")))
//!         .field(Field::new("y", Type::named("i64"))),
//! );
//!
//! assert_eq!(file.print(), "pub struct Point {\n  x: i64,\n  y: i64\n}");
//! ```

pub mod ast;
pub mod render;

mod source;

pub use ast::{
    Access, Assign, AssignOp, BinaryOp, BinaryOperator, Brackets, Call, Comment, Enum, Expr,
    Field, FieldInit, Fn, Impl, Let, Literal, Param, PathSegment, Property, Return, Segment,
    Struct, StructInit, Trait, TraitFn, Type, TypeBase, Use, VarRef, Variant,
};
pub use render::{Context, Indent, NodeKind, Render};
pub use source::{Item, SourceFile};
