//! Expression nodes: literals, arithmetic, variable references.

use serde::{Deserialize, Serialize};

use crate::ast::chains::{Call, Segment, render_chain};
use crate::ast::structs::StructInit;
use crate::render::{Context, NodeKind, Render, opt};

/// A raw literal carried through to the output untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal(pub String);

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Render for Literal {
    fn kind(&self) -> NodeKind {
        NodeKind::Literal
    }

    fn render(&self, _ctx: &Context) -> String {
        self.0.clone()
    }
}

/// Arithmetic operator of a binary operation.
///
/// Every operation carries a concrete operator from construction; there is no
/// unresolved base form to reject at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// `<left> <op> <right>` with single-space padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOp {
    pub op: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryOp {
    pub fn new(op: BinaryOperator, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

impl Render for BinaryOp {
    fn kind(&self) -> NodeKind {
        NodeKind::BinaryOp
    }

    fn render(&self, ctx: &Context) -> String {
        format!(
            "{} {} {}",
            self.left.render(ctx),
            self.op.symbol(),
            self.right.render(ctx)
        )
    }
}

/// A reference to a variable, optionally continuing into a call or property
/// chain (`self.count`, `&mut buffer`, `conn.query(q).await`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarRef {
    pub ident: String,
    pub is_reference: bool,
    pub is_mutable: bool,
    pub lifetime: Option<String>,
    pub chain: Vec<Segment>,
}

impl VarRef {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            is_reference: false,
            is_mutable: false,
            lifetime: None,
            chain: Vec::new(),
        }
    }

    pub fn reference(mut self) -> Self {
        self.is_reference = true;
        self
    }

    pub fn mutable(mut self) -> Self {
        self.is_mutable = true;
        self
    }

    pub fn lifetime(mut self, name: impl Into<String>) -> Self {
        self.lifetime = Some(name.into());
        self
    }

    /// Append a chained call or property access.
    pub fn then(mut self, segment: impl Into<Segment>) -> Self {
        self.chain.push(segment.into());
        self
    }
}

impl Render for VarRef {
    fn kind(&self) -> NodeKind {
        NodeKind::VarRef
    }

    fn render(&self, ctx: &Context) -> String {
        let reference = opt(self.is_reference, "&");
        let lifetime = self
            .lifetime
            .as_deref()
            .map(|label| format!("'{label} "))
            .unwrap_or_default();
        let mutability = opt(self.is_mutable, "mut ");
        let chain = render_chain(&self.chain, ctx);

        format!("{reference}{lifetime}{mutability}{}{chain}", self.ident)
    }
}

/// Closed set of expression shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Literal),
    Binary(BinaryOp),
    Var(VarRef),
    Call(Call),
    StructInit(StructInit),
}

impl Render for Expr {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Literal(node) => node.kind(),
            Self::Binary(node) => node.kind(),
            Self::Var(node) => node.kind(),
            Self::Call(node) => node.kind(),
            Self::StructInit(node) => node.kind(),
        }
    }

    fn render(&self, ctx: &Context) -> String {
        match self {
            Self::Literal(node) => node.render(ctx),
            Self::Binary(node) => node.render(ctx),
            Self::Var(node) => node.render(ctx),
            Self::Call(node) => node.render(ctx),
            Self::StructInit(node) => node.render(ctx),
        }
    }
}

impl From<Literal> for Expr {
    fn from(node: Literal) -> Self {
        Self::Literal(node)
    }
}

impl From<BinaryOp> for Expr {
    fn from(node: BinaryOp) -> Self {
        Self::Binary(node)
    }
}

impl From<VarRef> for Expr {
    fn from(node: VarRef) -> Self {
        Self::Var(node)
    }
}

impl From<Call> for Expr {
    fn from(node: Call) -> Self {
        Self::Call(node)
    }
}

impl From<StructInit> for Expr {
    fn from(node: StructInit) -> Self {
        Self::StructInit(node)
    }
}
