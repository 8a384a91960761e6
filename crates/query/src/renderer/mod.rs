//! Defines the core rendering trait and context for converting AST to SQL.

use serde_json::Value;

use crate::{ast::expr::Ident, dialect::Dialect};

pub mod condition;
pub mod expr;
pub mod select;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    pub fn push_identifier(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    /// Renders `items` separated by `", "`.
    pub fn push_list<T: Render>(&mut self, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            item.render(self);
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.push_identifier(qualifier);
            r.sql.push('.');
        }
        r.push_identifier(&self.name);
    }
}

/// Renders `node` and returns the SQL string with its bound parameters.
pub fn to_sql<T: Render>(node: &T, dialect: &dyn Dialect) -> (String, Vec<Value>) {
    let mut renderer = Renderer::new(dialect);
    node.render(&mut renderer);
    renderer.finish()
}
