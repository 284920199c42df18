//! Rendering primitives shared by every node kind.
//!
//! Indentation depth is threaded through [`Context`] values instead of being
//! kept in process-wide state, so independent render passes can never observe
//! each other's depth. A `Context` is `Copy`; entering a nested block means
//! rendering against an [`Context::indented`] copy, and the caller's context
//! is untouched when the block returns.

use serde::{Deserialize, Serialize};

/// Indentation style applied per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// One indentation level as text.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Unusual widths fall back to two spaces
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(2)
    }
}

/// Immutable state carried through one render pass.
///
/// # Example
///
/// ```
/// use quill::Context;
///
/// let ctx = Context::default();
/// assert_eq!(ctx.depth(), 0);
/// assert_eq!(ctx.indented().pad("x"), "  x");
/// // The original context is unchanged.
/// assert_eq!(ctx.depth(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    depth: usize,
    indent: Indent,
}

impl Context {
    /// Create a depth-zero context with the given indentation style.
    pub fn new(indent: Indent) -> Self {
        Self { depth: 0, indent }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// A copy of this context one level deeper.
    pub fn indented(&self) -> Self {
        Self {
            depth: self.depth + 1,
            indent: self.indent,
        }
    }

    /// Prefix `text` with the indentation for the current depth.
    pub fn pad(&self, text: &str) -> String {
        format!("{}{}", self.indent.unit().repeat(self.depth), text)
    }

    /// Render the members of a braced body at the next depth.
    ///
    /// `members` receives the nested context and returns each member already
    /// rendered; only the first line of a multi-line member is padded here,
    /// since its inner lines were padded recursively.
    pub fn block<F>(&self, join: &str, members: F) -> String
    where
        F: FnOnce(&Context) -> Vec<String>,
    {
        let inner = self.indented();
        members(&inner)
            .into_iter()
            .map(|member| inner.pad(&member))
            .collect::<Vec<_>>()
            .join(join)
    }
}

/// Discriminant identifying each node kind.
///
/// Consumers that walk a node tree can match on this for exhaustive handling
/// without downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Type,
    Literal,
    BinaryOp,
    VarRef,
    Property,
    Call,
    StructInit,
    FieldInit,
    Struct,
    Field,
    Enum,
    Variant,
    Trait,
    TraitFn,
    Fn,
    Param,
    Impl,
    Let,
    Assign,
    Return,
    Comment,
    Use,
    PathSegment,
    Blank,
    SourceFile,
}

/// The one capability every node shares: a kind tag and a render operation.
pub trait Render {
    /// The discriminant for this node.
    fn kind(&self) -> NodeKind;

    /// Render this node at the depth carried by `ctx`.
    ///
    /// The first line of the output is not padded; the parent pads it when
    /// joining members into a block.
    fn render(&self, ctx: &Context) -> String;

    /// Render at depth zero with the default two-space indentation.
    fn print(&self) -> String {
        self.render(&Context::default())
    }
}

/// Include `text` only when `condition` holds.
pub(crate) fn opt(condition: bool, text: &str) -> &str {
    if condition { text } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_units() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Tab.unit(), "\t");
        assert_eq!(Indent::default(), Indent::Spaces(2));
    }

    #[test]
    fn test_pad_scales_with_depth() {
        let ctx = Context::default();
        assert_eq!(ctx.pad("x"), "x");
        assert_eq!(ctx.indented().pad("x"), "  x");
        assert_eq!(ctx.indented().indented().pad("x"), "    x");
    }

    #[test]
    fn test_block_pads_first_line_of_each_member() {
        let ctx = Context::default();
        let body = ctx.block(",\n", |_| vec!["a: T".into(), "b: U".into()]);
        assert_eq!(body, "  a: T,\n  b: U");
    }

    #[test]
    fn test_block_leaves_caller_depth_unchanged() {
        let ctx = Context::default();
        let before = ctx.depth();
        let _ = ctx.block("\n", |inner| vec![inner.pad("nested")]);
        assert_eq!(ctx.depth(), before);
    }

    #[test]
    fn test_opt() {
        assert_eq!(opt(true, "pub "), "pub ");
        assert_eq!(opt(false, "pub "), "");
    }
}
