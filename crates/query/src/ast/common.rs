//! Defines common, reusable AST nodes for building SQL queries.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub schema: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDir {
    Asc,
    Desc,
}

impl From<predicate::OrderDirection> for OrderDir {
    fn from(direction: predicate::OrderDirection) -> Self {
        match direction {
            predicate::OrderDirection::Asc => OrderDir::Asc,
            predicate::OrderDirection::Desc => OrderDir::Desc,
        }
    }
}
