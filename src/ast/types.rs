//! Type references attached to fields, parameters, and bindings.

use serde::{Deserialize, Serialize};

use crate::render::{Context, NodeKind, Render, opt};

/// The base of a type reference: one of a fixed primitive set, or a named
/// identifier for anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeBase {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    String,
    Bool,
    Named(String),
}

impl TypeBase {
    fn as_str(&self) -> &str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::String => "String",
            Self::Bool => "bool",
            Self::Named(name) => name,
        }
    }
}

/// A type reference with reference, lifetime, mutability, and generic
/// decorations.
///
/// Decorations render as prefixes in fixed order: reference marker, lifetime,
/// mutability marker, then the base. Lifetime labels are emitted as supplied;
/// the caller is responsible for well-formed names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub base: TypeBase,
    pub is_reference: bool,
    pub is_mutable: bool,
    pub lifetime: Option<String>,
    pub generics: Vec<Type>,
}

impl Type {
    pub fn new(base: TypeBase) -> Self {
        Self {
            base,
            is_reference: false,
            is_mutable: false,
            lifetime: None,
            generics: Vec::new(),
        }
    }

    /// Shorthand for a named base type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(TypeBase::Named(name.into()))
    }

    pub fn reference(mut self) -> Self {
        self.is_reference = true;
        self
    }

    pub fn mutable(mut self) -> Self {
        self.is_mutable = true;
        self
    }

    /// Attach a lifetime label, without the leading tick.
    pub fn lifetime(mut self, name: impl Into<String>) -> Self {
        self.lifetime = Some(name.into());
        self
    }

    /// Append a generic type parameter.
    pub fn generic(mut self, param: Type) -> Self {
        self.generics.push(param);
        self
    }
}

impl Render for Type {
    fn kind(&self) -> NodeKind {
        NodeKind::Type
    }

    fn render(&self, ctx: &Context) -> String {
        let reference = opt(self.is_reference, "&");
        let lifetime = self
            .lifetime
            .as_deref()
            .map(|label| format!("'{label} "))
            .unwrap_or_default();
        let mutability = opt(self.is_mutable, "mut ");
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            let params = self
                .generics
                .iter()
                .map(|param| param.render(ctx))
                .collect::<Vec<_>>()
                .join(", ");
            format!("<{params}>")
        };

        format!(
            "{reference}{lifetime}{mutability}{}{generics}",
            self.base.as_str()
        )
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.print())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_base() {
        assert_eq!(Type::new(TypeBase::U32).print(), "u32");
        assert_eq!(Type::new(TypeBase::String).print(), "String");
    }

    #[test]
    fn test_named_base() {
        assert_eq!(Type::named("PathBuf").print(), "PathBuf");
    }

    #[test]
    fn test_decoration_order() {
        let ty = Type::new(TypeBase::String)
            .reference()
            .lifetime("a")
            .mutable();
        assert_eq!(ty.print(), "&'a mut String");
    }

    #[test]
    fn test_absent_decorations_add_no_punctuation() {
        let ty = Type::new(TypeBase::Bool);
        assert_eq!(ty.print(), "bool");
        assert!(!ty.print().contains('\''));
        assert!(!ty.print().contains('&'));
    }

    #[test]
    fn test_generic_params() {
        let ty = Type::named("HashMap")
            .generic(Type::new(TypeBase::String))
            .generic(Type::new(TypeBase::U64));
        assert_eq!(ty.print(), "HashMap<String, u64>");
    }

    #[test]
    fn test_reference_to_generic() {
        let ty = Type::named("Vec")
            .reference()
            .generic(Type::new(TypeBase::U8));
        assert_eq!(ty.print(), "&Vec<u8>");
    }
}
