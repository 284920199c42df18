//! Struct declarations and struct initializer expressions.

use serde::{Deserialize, Serialize};

use crate::ast::exprs::Expr;
use crate::ast::types::Type;
use crate::render::{Context, NodeKind, Render, opt};

/// One typed field of a struct declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub ident: String,
    pub is_public: bool,
    pub ty: Type,
}

impl Field {
    pub fn new(ident: impl Into<String>, ty: Type) -> Self {
        Self {
            ident: ident.into(),
            is_public: false,
            ty,
        }
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }
}

impl Render for Field {
    fn kind(&self) -> NodeKind {
        NodeKind::Field
    }

    fn render(&self, ctx: &Context) -> String {
        format!(
            "{}{}: {}",
            opt(self.is_public, "pub "),
            self.ident,
            self.ty.render(ctx)
        )
    }
}

/// A struct declaration with a braced field body.
///
/// An empty field list renders `{}`; otherwise each field sits on its own
/// line one level deeper, comma-joined with no trailing comma, and the
/// closing brace returns to the current depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub ident: String,
    pub is_public: bool,
    pub fields: Vec<Field>,
}

impl Struct {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            is_public: false,
            fields: Vec::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

impl Render for Struct {
    fn kind(&self) -> NodeKind {
        NodeKind::Struct
    }

    fn render(&self, ctx: &Context) -> String {
        let vis = opt(self.is_public, "pub ");

        if self.fields.is_empty() {
            return format!("{vis}struct {} {{}}", self.ident);
        }

        let body = ctx.block(",\n", |inner| {
            self.fields.iter().map(|field| field.render(inner)).collect()
        });

        format!("{vis}struct {} {{\n{body}\n{}", self.ident, ctx.pad("}"))
    }
}

/// `name: value` inside a struct initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInit {
    pub ident: String,
    pub value: Expr,
}

impl FieldInit {
    pub fn new(ident: impl Into<String>, value: impl Into<Expr>) -> Self {
        Self {
            ident: ident.into(),
            value: value.into(),
        }
    }
}

impl Render for FieldInit {
    fn kind(&self) -> NodeKind {
        NodeKind::FieldInit
    }

    fn render(&self, ctx: &Context) -> String {
        format!("{}: {}", self.ident, self.value.render(ctx))
    }
}

/// A struct literal such as `Point { x: 1, y: 2 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructInit {
    pub ident: String,
    pub fields: Vec<FieldInit>,
}

impl StructInit {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldInit) -> Self {
        self.fields.push(field);
        self
    }
}

impl Render for StructInit {
    fn kind(&self) -> NodeKind {
        NodeKind::StructInit
    }

    fn render(&self, ctx: &Context) -> String {
        if self.fields.is_empty() {
            return format!("{} {{}}", self.ident);
        }

        let body = ctx.block(",\n", |inner| {
            self.fields.iter().map(|field| field.render(inner)).collect()
        });

        format!("{} {{\n{body}\n{}", self.ident, ctx.pad("}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::exprs::Literal;
    use crate::ast::types::TypeBase;

    #[test]
    fn test_empty_struct() {
        assert_eq!(Struct::new("Empty").print(), "struct Empty {}");
        assert_eq!(Struct::new("Empty").public().print(), "pub struct Empty {}");
    }

    #[test]
    fn test_struct_with_fields() {
        let s = Struct::new("Name")
            .field(Field::new("a", Type::named("T")))
            .field(Field::new("b", Type::named("U")));
        assert_eq!(s.print(), "struct Name {\n  a: T,\n  b: U\n}");
    }

    #[test]
    fn test_public_field() {
        let s = Struct::new("Config")
            .public()
            .field(Field::new("path", Type::new(TypeBase::String)).public());
        assert_eq!(s.print(), "pub struct Config {\n  pub path: String\n}");
    }

    #[test]
    fn test_struct_init_empty() {
        assert_eq!(StructInit::new("Unit").print(), "Unit {}");
    }

    #[test]
    fn test_struct_init_fields() {
        let init = StructInit::new("Point")
            .field(FieldInit::new("x", Literal::new("1")))
            .field(FieldInit::new("y", Literal::new("2")));
        assert_eq!(init.print(), "Point {\n  x: 1,\n  y: 2\n}");
    }

    #[test]
    fn test_struct_init_closing_brace_at_current_depth() {
        let init = StructInit::new("Point").field(FieldInit::new("x", Literal::new("1")));
        let ctx = crate::Context::default().indented();
        assert_eq!(init.render(&ctx), "Point {\n    x: 1\n  }");
    }
}
