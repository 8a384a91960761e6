use crate::{
    ast::condition::{Condition, Conjunction, Predicate, WhereClause},
    renderer::{Render, Renderer},
};

impl Render for WhereClause {
    fn render(&self, r: &mut Renderer) {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(match condition.conjunction {
                    Conjunction::And => " AND ",
                    Conjunction::Or => " OR ",
                });
            }
            condition.render(r);
        }
    }
}

impl Render for Condition {
    fn render(&self, r: &mut Renderer) {
        let negated = self.negated;
        match &self.predicate {
            Predicate::Compare { left, op, right } => {
                if negated {
                    r.sql.push_str("NOT ");
                }
                left.render(r);
                r.sql.push(' ');
                r.sql.push_str(r.dialect.binary_operator(*op));
                r.sql.push(' ');
                right.render(r);
            }
            Predicate::InList { expr, list } => {
                // An empty list matches nothing, its negation everything.
                if list.is_empty() {
                    r.sql.push_str(if negated { "1 = 1" } else { "1 = 0" });
                    return;
                }
                expr.render(r);
                r.sql.push_str(if negated { " NOT IN (" } else { " IN (" });
                r.push_list(list);
                r.sql.push(')');
            }
            Predicate::Between { expr, low, high } => {
                expr.render(r);
                r.sql
                    .push_str(if negated { " NOT BETWEEN " } else { " BETWEEN " });
                low.render(r);
                r.sql.push_str(" AND ");
                high.render(r);
            }
            Predicate::IsNull(expr) => {
                expr.render(r);
                r.sql
                    .push_str(if negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Predicate::Group(clause) => {
                if negated {
                    r.sql.push_str("NOT ");
                }
                r.sql.push('(');
                clause.render(r);
                r.sql.push(')');
            }
        }
    }
}
