use crate::{
    ast::expr::Expr,
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::Boolean(true) => r.sql.push_str("TRUE"),
            Expr::Boolean(false) => r.sql.push_str("FALSE"),
            Expr::Wildcard => r.sql.push('*'),
        }
    }
}
