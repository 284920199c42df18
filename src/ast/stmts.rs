//! Simple statements: bindings, mutations, comments.

use serde::{Deserialize, Serialize};

use crate::ast::exprs::{Expr, VarRef};
use crate::ast::types::Type;
use crate::render::{Context, NodeKind, Render};

/// A `let` or `const` binding with optional type and initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Let {
    pub ident: String,
    pub is_const: bool,
    pub ty: Option<Type>,
    pub value: Option<Expr>,
}

impl Let {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            is_const: false,
            ty: None,
            value: None,
        }
    }

    /// Use the `const` binding keyword instead of `let`.
    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn ty(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn value(mut self, value: impl Into<Expr>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Render for Let {
    fn kind(&self) -> NodeKind {
        NodeKind::Let
    }

    fn render(&self, ctx: &Context) -> String {
        let keyword = if self.is_const { "const" } else { "let" };
        let ty = self
            .ty
            .as_ref()
            .map(|ty| format!(": {}", ty.render(ctx)))
            .unwrap_or_default();
        let value = self
            .value
            .as_ref()
            .map(|value| format!(" = {}", value.render(ctx)))
            .unwrap_or_default();

        format!("{keyword} {}{ty}{value}", self.ident)
    }
}

/// Operator of a mutation statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOp {
    Add,
    Subtract,
    Divide,
    Multiply,
    Assign,
}

impl AssignOp {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+=",
            Self::Subtract => "-=",
            Self::Divide => "/=",
            Self::Multiply => "*=",
            Self::Assign => "=",
        }
    }
}

/// Mutation of an existing binding: `target <op> value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub target: VarRef,
    pub op: AssignOp,
    pub value: Expr,
}

impl Assign {
    pub fn new(target: VarRef, op: AssignOp, value: impl Into<Expr>) -> Self {
        Self {
            target,
            op,
            value: value.into(),
        }
    }
}

impl Render for Assign {
    fn kind(&self) -> NodeKind {
        NodeKind::Assign
    }

    fn render(&self, ctx: &Context) -> String {
        format!(
            "{} {} {}",
            self.target.render(ctx),
            self.op.symbol(),
            self.value.render(ctx)
        )
    }
}

/// A `// text` line comment or `/*text*/` block comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub block: bool,
}

impl Comment {
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            block: false,
        }
    }

    pub fn block(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            block: true,
        }
    }
}

impl Render for Comment {
    fn kind(&self) -> NodeKind {
        NodeKind::Comment
    }

    fn render(&self, _ctx: &Context) -> String {
        if self.block {
            format!("/*{}*/", self.text)
        } else {
            format!("// {}", self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::exprs::Literal;
    use crate::ast::types::TypeBase;

    #[test]
    fn test_bare_let() {
        assert_eq!(Let::new("x").print(), "let x");
    }

    #[test]
    fn test_let_with_type_and_value() {
        let s = Let::new("count")
            .ty(Type::new(TypeBase::U32))
            .value(Literal::new("0"));
        assert_eq!(s.print(), "let count: u32 = 0");
    }

    #[test]
    fn test_const_binding() {
        let s = Let::new("LIMIT")
            .constant()
            .ty(Type::new(TypeBase::U64))
            .value(Literal::new("1024"));
        assert_eq!(s.print(), "const LIMIT: u64 = 1024");
    }

    #[test]
    fn test_absent_type_and_value_add_no_punctuation() {
        let rendered = Let::new("x").print();
        assert!(!rendered.contains(": "));
        assert!(!rendered.contains(" = "));
    }

    #[test]
    fn test_assign_operators() {
        for (op, expected) in [
            (AssignOp::Add, "total += 1"),
            (AssignOp::Subtract, "total -= 1"),
            (AssignOp::Divide, "total /= 1"),
            (AssignOp::Multiply, "total *= 1"),
            (AssignOp::Assign, "total = 1"),
        ] {
            let s = Assign::new(VarRef::new("total"), op, Literal::new("1"));
            assert_eq!(s.print(), expected);
        }
    }

    #[test]
    fn test_comments() {
        assert_eq!(Comment::line("todo").print(), "// todo");
        assert_eq!(Comment::block("todo").print(), "/*todo*/");
    }
}
