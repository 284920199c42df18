//! Impl blocks binding functions to a declared type.

use serde::{Deserialize, Serialize};

use crate::ast::fns::Fn;
use crate::render::{Context, NodeKind, Render};

/// An inherent impl block. Functions render blank-line-separated at the next
/// depth, with the closing brace back at the current depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Impl {
    pub target: String,
    pub functions: Vec<Fn>,
}

impl Impl {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            functions: Vec::new(),
        }
    }

    pub fn function(mut self, function: Fn) -> Self {
        self.functions.push(function);
        self
    }
}

impl Render for Impl {
    fn kind(&self) -> NodeKind {
        NodeKind::Impl
    }

    fn render(&self, ctx: &Context) -> String {
        if self.functions.is_empty() {
            return format!("impl {} {{}}", self.target);
        }

        let body = ctx.block("\n\n", |inner| {
            self.functions
                .iter()
                .map(|function| function.render(inner))
                .collect()
        });

        format!("impl {} {{\n{body}\n{}", self.target, ctx.pad("}"))
    }
}
