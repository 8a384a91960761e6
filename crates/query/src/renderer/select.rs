use crate::{
    ast::{
        common::{OrderDir, TableRef},
        select::{FromClause, OrderByExpr, Select},
    },
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        if self.columns.is_empty() {
            r.sql.push('*');
        } else {
            r.push_list(&self.columns);
        }

        // 2. FROM
        if let Some(from) = &self.from {
            r.sql.push(' ');
            from.render(r);
        }

        // 3. WHERE
        if !self.where_clause.is_empty() {
            r.sql.push_str(" WHERE ");
            self.where_clause.render(r);
        }

        // 4. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            r.push_list(&self.order_by);
        }

        // 5. LIMIT
        if let Some(limit) = &self.limit {
            r.sql.push_str(" LIMIT ");
            limit.render(r);
        }

        // 6. OFFSET
        if let Some(offset) = &self.offset {
            r.sql.push_str(" OFFSET ");
            offset.render(r);
        }
    }
}

impl Render for TableRef {
    fn render(&self, r: &mut Renderer) {
        if let Some(schema) = &self.schema {
            r.push_identifier(schema);
            r.sql.push('.');
        }
        r.push_identifier(&self.name);
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        self.table.render(r);
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.push_identifier(alias);
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(dir) = &self.direction {
            let dir_str = match dir {
                OrderDir::Asc => "ASC",
                OrderDir::Desc => "DESC",
            };
            r.sql.push(' ');
            r.sql.push_str(dir_str);
        }
    }
}
