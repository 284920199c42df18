//! `use` declarations.

use serde::{Deserialize, Serialize};

use crate::render::{Context, NodeKind, Render};

/// One path segment of a `use` declaration: a plain name, or a brace-grouped
/// set of names. A group of exactly one name renders bare, without braces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    Name(String),
    Group(Vec<String>),
}

impl Render for PathSegment {
    fn kind(&self) -> NodeKind {
        NodeKind::PathSegment
    }

    fn render(&self, _ctx: &Context) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::Group(names) if names.len() == 1 => names[0].clone(),
            Self::Group(names) => format!("{{{}}}", names.join(", ")),
        }
    }
}

/// A `use` declaration, path segments joined by `::`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Use {
    pub path: Vec<PathSegment>,
}

impl Use {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.path.push(PathSegment::Name(name.into()));
        self
    }

    pub fn group(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.path
            .push(PathSegment::Group(names.into_iter().map(Into::into).collect()));
        self
    }
}

impl Render for Use {
    fn kind(&self) -> NodeKind {
        NodeKind::Use
    }

    fn render(&self, ctx: &Context) -> String {
        let path = self
            .path
            .iter()
            .map(|segment| segment.render(ctx))
            .collect::<Vec<_>>()
            .join("::");

        format!("use {path};")
    }
}
