//! Function declarations, parameters, and return statements.

use serde::{Deserialize, Serialize};

use crate::ast::exprs::Expr;
use crate::ast::types::Type;
use crate::render::{Context, NodeKind, Render, opt};
use crate::source::Item;

/// A function parameter: the self receiver or a typed name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Param {
    /// `&self` / `&mut self`.
    Receiver { mutable: bool },
    /// `name: Type`.
    Typed { ident: String, ty: Type },
}

impl Param {
    pub fn receiver() -> Self {
        Self::Receiver { mutable: false }
    }

    pub fn receiver_mut() -> Self {
        Self::Receiver { mutable: true }
    }

    pub fn typed(ident: impl Into<String>, ty: Type) -> Self {
        Self::Typed {
            ident: ident.into(),
            ty,
        }
    }
}

impl Render for Param {
    fn kind(&self) -> NodeKind {
        NodeKind::Param
    }

    fn render(&self, ctx: &Context) -> String {
        match self {
            Self::Receiver { mutable } => {
                if *mutable { "&mut self" } else { "&self" }.to_string()
            }
            Self::Typed { ident, ty } => format!("{ident}: {}", ty.render(ctx)),
        }
    }
}

/// A function declaration with signature and statement body.
///
/// An empty body renders `{}`; otherwise statements sit one level deeper,
/// `;\n`-joined with no terminator on the last line, so an implicit-form
/// [`Return`] as the final statement yields the trailing-expression idiom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fn {
    pub ident: String,
    pub is_public: bool,
    pub is_async: bool,
    pub params: Vec<Param>,
    pub return_type: Option<Type>,
    pub body: Vec<Item>,
}

impl Fn {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            is_public: false,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: Type) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Append a statement to the body.
    pub fn statement(mut self, statement: impl Into<Item>) -> Self {
        self.body.push(statement.into());
        self
    }
}

impl Render for Fn {
    fn kind(&self) -> NodeKind {
        NodeKind::Fn
    }

    fn render(&self, ctx: &Context) -> String {
        let vis = opt(self.is_public, "pub ");
        let asyncness = opt(self.is_async, "async ");
        let params = self
            .params
            .iter()
            .map(|param| param.render(ctx))
            .collect::<Vec<_>>()
            .join(", ");
        let returns = self
            .return_type
            .as_ref()
            .map(|ty| format!(" -> {}", ty.render(ctx)))
            .unwrap_or_default();

        let body = if self.body.is_empty() {
            "{}".to_string()
        } else {
            let statements = ctx.block(";\n", |inner| {
                self.body.iter().map(|s| s.render(inner)).collect()
            });
            format!("{{\n{statements}\n{}", ctx.pad("}"))
        };

        format!("{vis}{asyncness}fn {}({params}){returns} {body}", self.ident)
    }
}

/// `return <expr>;`, or the bare trailing expression in implicit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    pub value: Expr,
    pub explicit: bool,
}

impl Return {
    /// Implicit trailing-expression form.
    pub fn new(value: impl Into<Expr>) -> Self {
        Self {
            value: value.into(),
            explicit: false,
        }
    }

    /// Switch to the `return <expr>;` form.
    pub fn explicit(mut self) -> Self {
        self.explicit = true;
        self
    }
}

impl Render for Return {
    fn kind(&self) -> NodeKind {
        NodeKind::Return
    }

    fn render(&self, ctx: &Context) -> String {
        let value = self.value.render(ctx);
        if self.explicit {
            format!("return {value};")
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::exprs::{BinaryOp, BinaryOperator, Literal, VarRef};
    use crate::ast::types::TypeBase;

    #[test]
    fn test_empty_fn() {
        assert_eq!(Fn::new("name").print(), "fn name() {}");
    }

    #[test]
    fn test_implicit_return_body() {
        let f = Fn::new("name").statement(Return::new(Literal::new("42")));
        assert_eq!(f.print(), "fn name() {\n  42\n}");
    }

    #[test]
    fn test_explicit_return() {
        let f = Fn::new("get").statement(Return::new(VarRef::new("value")).explicit());
        assert_eq!(f.print(), "fn get() {\n  return value;\n}");
    }

    #[test]
    fn test_signature_with_params_and_return_type() {
        let f = Fn::new("add")
            .public()
            .param(Param::typed("a", Type::new(TypeBase::I64)))
            .param(Param::typed("b", Type::new(TypeBase::I64)))
            .returns(Type::new(TypeBase::I64))
            .statement(Return::new(BinaryOp::new(
                BinaryOperator::Add,
                VarRef::new("a"),
                VarRef::new("b"),
            )));
        assert_eq!(
            f.print(),
            "pub fn add(a: i64, b: i64) -> i64 {\n  a + b\n}"
        );
    }

    #[test]
    fn test_async_fn_with_receiver() {
        let f = Fn::new("refresh")
            .public()
            .async_()
            .param(Param::receiver_mut());
        assert_eq!(f.print(), "pub async fn refresh(&mut self) {}");
    }

    #[test]
    fn test_receiver_renders() {
        assert_eq!(Param::receiver().print(), "&self");
        assert_eq!(Param::receiver_mut().print(), "&mut self");
    }

    #[test]
    fn test_no_return_type_no_arrow() {
        assert!(!Fn::new("run").print().contains("->"));
    }

    #[test]
    fn test_statements_semicolon_newline_joined() {
        let f = Fn::new("two")
            .statement(crate::ast::Let::new("x").value(Literal::new("1")))
            .statement(Return::new(VarRef::new("x")));
        assert_eq!(f.print(), "fn two() {\n  let x = 1;\n  x\n}");
    }
}
