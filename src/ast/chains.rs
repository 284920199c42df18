//! Call and property-access chains hanging off an expression head.
//!
//! A chain is an ordered list of [`Segment`]s owned by the originating
//! expression ([`crate::ast::VarRef`] or a head [`Call`]); rendering iterates
//! the list instead of following a linked optional-next relation.

use serde::{Deserialize, Serialize};

use crate::ast::exprs::Expr;
use crate::render::{Context, NodeKind, Render, opt};

/// Separator used to reach a chained member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    /// `::` — namespace or associated item.
    Namespace,
    /// `.` — field or method on a value.
    Member,
}

impl Access {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Namespace => "::",
            Self::Member => ".",
        }
    }
}

/// Bracket style for a call's argument list.
///
/// Square brackets produce macro-style invocations such as `vec![..]`. The
/// style is a caller-supplied construction parameter; it is never validated
/// against the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brackets {
    Round,
    Square,
}

impl Brackets {
    fn pair(&self) -> (&'static str, &'static str) {
        match self {
            Self::Round => ("(", ")"),
            Self::Square => ("[", "]"),
        }
    }
}

/// `::name` or `.name`, with an `.await` suffix when flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub access: Access,
    pub ident: String,
    pub awaited: bool,
}

impl Property {
    pub fn new(access: Access, ident: impl Into<String>) -> Self {
        Self {
            access,
            ident: ident.into(),
            awaited: false,
        }
    }

    pub fn awaited(mut self) -> Self {
        self.awaited = true;
        self
    }
}

impl Render for Property {
    fn kind(&self) -> NodeKind {
        NodeKind::Property
    }

    fn render(&self, _ctx: &Context) -> String {
        format!(
            "{}{}{}",
            self.access.symbol(),
            self.ident,
            opt(self.awaited, ".await")
        )
    }
}

/// A function or macro invocation, optionally prefixed by `::`/`.` when it
/// continues a chain, optionally awaited, optionally chaining further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub access: Option<Access>,
    pub ident: String,
    pub brackets: Brackets,
    pub args: Vec<Expr>,
    pub awaited: bool,
    pub chain: Vec<Segment>,
}

impl Call {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            access: None,
            ident: ident.into(),
            brackets: Brackets::Round,
            args: Vec::new(),
            awaited: false,
            chain: Vec::new(),
        }
    }

    /// Set the separator prefix used when this call continues a chain.
    pub fn via(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }

    pub fn brackets(mut self, brackets: Brackets) -> Self {
        self.brackets = brackets;
        self
    }

    pub fn arg(mut self, arg: impl Into<Expr>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn awaited(mut self) -> Self {
        self.awaited = true;
        self
    }

    /// Append a further chained call or property access.
    pub fn then(mut self, segment: impl Into<Segment>) -> Self {
        self.chain.push(segment.into());
        self
    }
}

impl Render for Call {
    fn kind(&self) -> NodeKind {
        NodeKind::Call
    }

    fn render(&self, ctx: &Context) -> String {
        let access = self.access.map(|a| a.symbol()).unwrap_or("");
        let (open, close) = self.brackets.pair();
        let args = self
            .args
            .iter()
            .map(|arg| arg.render(ctx))
            .collect::<Vec<_>>()
            .join(", ");
        let chain = render_chain(&self.chain, ctx);

        format!(
            "{access}{}{open}{args}{close}{}{chain}",
            self.ident,
            opt(self.awaited, ".await")
        )
    }
}

/// One link in a call/property chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    Call(Call),
    Property(Property),
}

impl Render for Segment {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Call(call) => call.kind(),
            Self::Property(property) => property.kind(),
        }
    }

    fn render(&self, ctx: &Context) -> String {
        match self {
            Self::Call(call) => call.render(ctx),
            Self::Property(property) => property.render(ctx),
        }
    }
}

impl From<Call> for Segment {
    fn from(call: Call) -> Self {
        Self::Call(call)
    }
}

impl From<Property> for Segment {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

/// Render the segments of a chain back to back.
pub(crate) fn render_chain(chain: &[Segment], ctx: &Context) -> String {
    chain
        .iter()
        .map(|segment| segment.render(ctx))
        .collect::<Vec<_>>()
        .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::exprs::Literal;

    #[test]
    fn test_property_access_styles() {
        assert_eq!(Property::new(Access::Namespace, "MAX").print(), "::MAX");
        assert_eq!(Property::new(Access::Member, "len").print(), ".len");
    }

    #[test]
    fn test_property_awaited() {
        let p = Property::new(Access::Member, "handle").awaited();
        assert_eq!(p.print(), ".handle.await");
    }

    #[test]
    fn test_bare_call() {
        let call = Call::new("start");
        assert_eq!(call.print(), "start()");
    }

    #[test]
    fn test_call_with_args() {
        let call = Call::new("max").arg(Literal::new("1")).arg(Literal::new("2"));
        assert_eq!(call.print(), "max(1, 2)");
    }

    #[test]
    fn test_macro_style_brackets() {
        let call = Call::new("vec!")
            .brackets(Brackets::Square)
            .arg(Literal::new("0"))
            .arg(Literal::new("1"));
        assert_eq!(call.print(), "vec![0, 1]");
    }

    #[test]
    fn test_namespaced_awaited_call() {
        let call = Call::new("connect")
            .via(Access::Namespace)
            .arg(Literal::new("url"))
            .awaited();
        assert_eq!(call.print(), "::connect(url).await");
    }

    #[test]
    fn test_chained_call_and_property() {
        let call = Call::new("builder")
            .then(Call::new("timeout").via(Access::Member).arg(Literal::new("30")))
            .then(Property::new(Access::Member, "inner"));
        assert_eq!(call.print(), "builder().timeout(30).inner");
    }
}
