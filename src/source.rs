//! A source unit: the ordered items of one emitted file.

use serde::{Deserialize, Serialize};

use crate::ast::{
    Assign, BinaryOp, Call, Comment, Enum, Expr, Fn, Impl, Let, Literal, Return, Struct,
    StructInit, Trait, Use, VarRef,
};
use crate::render::{Context, NodeKind, Render};

/// Any item that may appear at the top level of a source file or inside a
/// function body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Expr(Expr),
    Let(Let),
    Assign(Assign),
    Return(Return),
    Comment(Comment),
    Use(Use),
    Struct(Struct),
    Enum(Enum),
    Trait(Trait),
    Fn(Fn),
    Impl(Impl),
    /// An intentionally empty line.
    Blank,
}

impl Render for Item {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Expr(node) => node.kind(),
            Self::Let(node) => node.kind(),
            Self::Assign(node) => node.kind(),
            Self::Return(node) => node.kind(),
            Self::Comment(node) => node.kind(),
            Self::Use(node) => node.kind(),
            Self::Struct(node) => node.kind(),
            Self::Enum(node) => node.kind(),
            Self::Trait(node) => node.kind(),
            Self::Fn(node) => node.kind(),
            Self::Impl(node) => node.kind(),
            Self::Blank => NodeKind::Blank,
        }
    }

    fn render(&self, ctx: &Context) -> String {
        match self {
            Self::Expr(node) => node.render(ctx),
            Self::Let(node) => node.render(ctx),
            Self::Assign(node) => node.render(ctx),
            Self::Return(node) => node.render(ctx),
            Self::Comment(node) => node.render(ctx),
            Self::Use(node) => node.render(ctx),
            Self::Struct(node) => node.render(ctx),
            Self::Enum(node) => node.render(ctx),
            Self::Trait(node) => node.render(ctx),
            Self::Fn(node) => node.render(ctx),
            Self::Impl(node) => node.render(ctx),
            Self::Blank => String::new(),
        }
    }
}

impl From<Expr> for Item {
    fn from(node: Expr) -> Self {
        Self::Expr(node)
    }
}

impl From<Literal> for Item {
    fn from(node: Literal) -> Self {
        Self::Expr(node.into())
    }
}

impl From<BinaryOp> for Item {
    fn from(node: BinaryOp) -> Self {
        Self::Expr(node.into())
    }
}

impl From<VarRef> for Item {
    fn from(node: VarRef) -> Self {
        Self::Expr(node.into())
    }
}

impl From<Call> for Item {
    fn from(node: Call) -> Self {
        Self::Expr(node.into())
    }
}

impl From<StructInit> for Item {
    fn from(node: StructInit) -> Self {
        Self::Expr(node.into())
    }
}

impl From<Let> for Item {
    fn from(node: Let) -> Self {
        Self::Let(node)
    }
}

impl From<Assign> for Item {
    fn from(node: Assign) -> Self {
        Self::Assign(node)
    }
}

impl From<Return> for Item {
    fn from(node: Return) -> Self {
        Self::Return(node)
    }
}

impl From<Comment> for Item {
    fn from(node: Comment) -> Self {
        Self::Comment(node)
    }
}

impl From<Use> for Item {
    fn from(node: Use) -> Self {
        Self::Use(node)
    }
}

impl From<Struct> for Item {
    fn from(node: Struct) -> Self {
        Self::Struct(node)
    }
}

impl From<Enum> for Item {
    fn from(node: Enum) -> Self {
        Self::Enum(node)
    }
}

impl From<Trait> for Item {
    fn from(node: Trait) -> Self {
        Self::Trait(node)
    }
}

impl From<Fn> for Item {
    fn from(node: Fn) -> Self {
        Self::Fn(node)
    }
}

impl From<Impl> for Item {
    fn from(node: Impl) -> Self {
        Self::Impl(node)
    }
}

/// One emitted file: an ordered sequence of items rendered top-down and
/// newline-joined, with no reordering, deduplication, or cross-reference
/// checks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceFile {
    pub items: Vec<Item>,
}

impl SourceFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: impl Into<Item>) -> Self {
        self.items.push(item.into());
        self
    }
}

impl Render for SourceFile {
    fn kind(&self) -> NodeKind {
        NodeKind::SourceFile
    }

    fn render(&self, ctx: &Context) -> String {
        self.items
            .iter()
            .map(|item| item.render(ctx))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.print())
    }
}
