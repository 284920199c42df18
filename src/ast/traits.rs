//! Trait declarations: named sets of bodiless function signatures.

use serde::{Deserialize, Serialize};

use crate::ast::fns::Param;
use crate::ast::types::Type;
use crate::render::{Context, NodeKind, Render, opt};

/// A function signature inside a trait; no body, no visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitFn {
    pub ident: String,
    pub is_async: bool,
    pub params: Vec<Param>,
    pub return_type: Option<Type>,
}

impl TraitFn {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            is_async: false,
            params: Vec::new(),
            return_type: None,
        }
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
}

impl Render for TraitFn {
    fn kind(&self) -> NodeKind {
        NodeKind::TraitFn
    }

    fn render(&self, ctx: &Context) -> String {
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

        format!("{asyncness}fn {}({params}){returns}", self.ident)
    }
}

/// A trait declaration. Signatures are semicolon-joined, one per line at the
/// next depth, with a terminating semicolon on the last signature as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub ident: String,
    pub is_public: bool,
    pub functions: Vec<TraitFn>,
}

impl Trait {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            is_public: false,
            functions: Vec::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    pub fn function(mut self, function: TraitFn) -> Self {
        self.functions.push(function);
        self
    }
}

impl Render for Trait {
    fn kind(&self) -> NodeKind {
        NodeKind::Trait
    }

    fn render(&self, ctx: &Context) -> String {
        let vis = opt(self.is_public, "pub ");

        if self.functions.is_empty() {
            return format!("{vis}trait {} {{}}", self.ident);
        }

        let body = ctx.block(";\n", |inner| {
            self.functions
                .iter()
                .map(|function| function.render(inner))
                .collect()
        });

        format!("{vis}trait {} {{\n{body};\n{}", self.ident, ctx.pad("}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::types::TypeBase;

    #[test]
    fn test_empty_trait() {
        assert_eq!(Trait::new("Marker").print(), "trait Marker {}");
    }

    #[test]
    fn test_trait_signatures_semicolon_joined() {
        let t = Trait::new("Store")
            .function(
                TraitFn::new("get")
                    .param(Param::receiver())
                    .returns(Type::new(TypeBase::String)),
            )
            .function(TraitFn::new("clear").param(Param::receiver_mut()));
        assert_eq!(
            t.print(),
            "trait Store {\n  fn get(&self) -> String;\n  fn clear(&mut self);\n}"
        );
    }

    #[test]
    fn test_public_async_trait_fn() {
        let t = Trait::new("Fetch")
            .public()
            .function(TraitFn::new("fetch").async_().param(Param::receiver()));
        assert_eq!(t.print(), "pub trait Fetch {\n  async fn fetch(&self);\n}");
    }

    #[test]
    fn test_signature_without_return_type() {
        assert_eq!(TraitFn::new("tick").print(), "fn tick()");
    }
}
