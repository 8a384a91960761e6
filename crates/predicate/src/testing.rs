//! A builder that records the calls it receives.

use serde_json::Value;

use crate::{
    builder::{Builder, FilterBuilder, OrderBuilder, PaginationBuilder, ScopeFn},
    order::OrderDirection,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Compare {
        method: &'static str,
        column: String,
        comparator: String,
        value: Value,
    },
    Group {
        method: &'static str,
        calls: Vec<Call>,
    },
    Values {
        method: &'static str,
        column: String,
        value: Value,
    },
    Null {
        method: &'static str,
        column: String,
    },
    OrderBy {
        column: String,
        direction: OrderDirection,
    },
    Limit(u64),
    Offset(u64),
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    /// Any predicate on this column is rejected.
    pub fail_on_column: Option<String>,
}

impl Recorder {
    fn check(&self, column: &str) -> Result<(), String> {
        match &self.fail_on_column {
            Some(bad) if bad == column => Err(format!("rejected column {column}")),
            _ => Ok(()),
        }
    }

    fn compare(
        &mut self,
        method: &'static str,
        column: &str,
        comparator: &str,
        value: &Value,
    ) -> Result<(), String> {
        self.check(column)?;
        self.calls.push(Call::Compare {
            method,
            column: column.to_string(),
            comparator: comparator.to_string(),
            value: value.clone(),
        });
        Ok(())
    }

    fn group(
        &mut self,
        method: &'static str,
        scope: &mut ScopeFn<'_, Recorder>,
    ) -> Result<(), String> {
        let mut nested = Recorder {
            calls: Vec::new(),
            fail_on_column: self.fail_on_column.clone(),
        };
        scope(&mut nested)?;
        self.calls.push(Call::Group {
            method,
            calls: nested.calls,
        });
        Ok(())
    }

    fn values(&mut self, method: &'static str, column: &str, value: &Value) -> Result<(), String> {
        self.check(column)?;
        self.calls.push(Call::Values {
            method,
            column: column.to_string(),
            value: value.clone(),
        });
        Ok(())
    }

    fn null(&mut self, method: &'static str, column: &str) -> Result<(), String> {
        self.check(column)?;
        self.calls.push(Call::Null {
            method,
            column: column.to_string(),
        });
        Ok(())
    }
}

impl Builder for Recorder {
    type Error = String;
}

impl FilterBuilder for Recorder {
    type Scope = Recorder;

    fn and_where(&mut self, column: &str, comparator: &str, value: &Value) -> Result<(), String> {
        self.compare("and_where", column, comparator, value)
    }

    fn or_where(&mut self, column: &str, comparator: &str, value: &Value) -> Result<(), String> {
        self.compare("or_where", column, comparator, value)
    }

    fn and_where_not(
        &mut self,
        column: &str,
        comparator: &str,
        value: &Value,
    ) -> Result<(), String> {
        self.compare("and_where_not", column, comparator, value)
    }

    fn or_where_not(
        &mut self,
        column: &str,
        comparator: &str,
        value: &Value,
    ) -> Result<(), String> {
        self.compare("or_where_not", column, comparator, value)
    }

    fn and_where_group(&mut self, scope: &mut ScopeFn<'_, Recorder>) -> Result<(), String> {
        self.group("and_where_group", scope)
    }

    fn or_where_group(&mut self, scope: &mut ScopeFn<'_, Recorder>) -> Result<(), String> {
        self.group("or_where_group", scope)
    }

    fn and_where_not_group(&mut self, scope: &mut ScopeFn<'_, Recorder>) -> Result<(), String> {
        self.group("and_where_not_group", scope)
    }

    fn or_where_not_group(&mut self, scope: &mut ScopeFn<'_, Recorder>) -> Result<(), String> {
        self.group("or_where_not_group", scope)
    }

    fn and_where_in(&mut self, column: &str, values: &Value) -> Result<(), String> {
        self.values("and_where_in", column, values)
    }

    fn or_where_in(&mut self, column: &str, values: &Value) -> Result<(), String> {
        self.values("or_where_in", column, values)
    }

    fn and_where_not_in(&mut self, column: &str, values: &Value) -> Result<(), String> {
        self.values("and_where_not_in", column, values)
    }

    fn or_where_not_in(&mut self, column: &str, values: &Value) -> Result<(), String> {
        self.values("or_where_not_in", column, values)
    }

    fn and_where_between(&mut self, column: &str, range: &Value) -> Result<(), String> {
        self.values("and_where_between", column, range)
    }

    fn or_where_between(&mut self, column: &str, range: &Value) -> Result<(), String> {
        self.values("or_where_between", column, range)
    }

    fn and_where_not_between(&mut self, column: &str, range: &Value) -> Result<(), String> {
        self.values("and_where_not_between", column, range)
    }

    fn or_where_not_between(&mut self, column: &str, range: &Value) -> Result<(), String> {
        self.values("or_where_not_between", column, range)
    }

    fn and_where_null(&mut self, column: &str) -> Result<(), String> {
        self.null("and_where_null", column)
    }

    fn or_where_null(&mut self, column: &str) -> Result<(), String> {
        self.null("or_where_null", column)
    }

    fn and_where_not_null(&mut self, column: &str) -> Result<(), String> {
        self.null("and_where_not_null", column)
    }

    fn or_where_not_null(&mut self, column: &str) -> Result<(), String> {
        self.null("or_where_not_null", column)
    }
}

impl OrderBuilder for Recorder {
    fn order_by(&mut self, column: &str, direction: OrderDirection) -> Result<(), String> {
        self.check(column)?;
        self.calls.push(Call::OrderBy {
            column: column.to_string(),
            direction,
        });
        Ok(())
    }
}

impl PaginationBuilder for Recorder {
    fn limit(&mut self, limit: u64) -> Result<(), String> {
        self.calls.push(Call::Limit(limit));
        Ok(())
    }

    fn offset(&mut self, offset: u64) -> Result<(), String> {
        self.calls.push(Call::Offset(offset));
        Ok(())
    }
}
