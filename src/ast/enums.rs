//! Enum declarations.

use serde::{Deserialize, Serialize};

use crate::render::{Context, NodeKind, Render, opt};

/// One enum variant, with an optional explicit discriminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub ident: String,
    pub discriminant: Option<String>,
}

impl Variant {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            discriminant: None,
        }
    }

    /// Set an explicit discriminant, e.g. `Active = 1`.
    pub fn discriminant(mut self, value: impl Into<String>) -> Self {
        self.discriminant = Some(value.into());
        self
    }
}

impl Render for Variant {
    fn kind(&self) -> NodeKind {
        NodeKind::Variant
    }

    fn render(&self, _ctx: &Context) -> String {
        let value = self
            .discriminant
            .as_deref()
            .map(|v| format!(" = {v}"))
            .unwrap_or_default();
        format!("{}{value}", self.ident)
    }
}

/// An enum declaration with a braced variant body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub ident: String,
    pub is_public: bool,
    pub variants: Vec<Variant>,
}

impl Enum {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            is_public: false,
            variants: Vec::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }
}

impl Render for Enum {
    fn kind(&self) -> NodeKind {
        NodeKind::Enum
    }

    fn render(&self, ctx: &Context) -> String {
        let vis = opt(self.is_public, "pub ");

        if self.variants.is_empty() {
            return format!("{vis}enum {} {{}}", self.ident);
        }

        let body = ctx.block(",\n", |inner| {
            self.variants
                .iter()
                .map(|variant| variant.render(inner))
                .collect()
        });

        format!("{vis}enum {} {{\n{body}\n{}", self.ident, ctx.pad("}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_enum() {
        assert_eq!(Enum::new("Never").print(), "enum Never {}");
    }

    #[test]
    fn test_enum_variants() {
        let e = Enum::new("Status")
            .public()
            .variant(Variant::new("Active"))
            .variant(Variant::new("Inactive"));
        assert_eq!(e.print(), "pub enum Status {\n  Active,\n  Inactive\n}");
    }

    #[test]
    fn test_variant_discriminant() {
        let e = Enum::new("Code")
            .variant(Variant::new("Ok").discriminant("0"))
            .variant(Variant::new("Err").discriminant("1"));
        assert_eq!(e.print(), "enum Code {\n  Ok = 0,\n  Err = 1\n}");
    }

    #[test]
    fn test_absent_discriminant_adds_no_punctuation() {
        assert_eq!(Variant::new("Plain").print(), "Plain");
    }
}
