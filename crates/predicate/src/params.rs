//! A serializable bundle of filter, order and pagination input, as it
//! typically arrives in a list request.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{builder::QueryBuilder, translator::Translator};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Filter specification. `null` applies nothing.
    pub filter: Value,
    /// Order strings. A single string is accepted as well as a list.
    #[serde(deserialize_with = "one_or_many")]
    pub order: Vec<String>,
    pub page: Option<i64>,
    pub page_size: Option<u64>,
}

impl QueryParams {
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Applies the filter, then the order, then the pagination.
    ///
    /// Pagination is only applied when a page or a page size is present.
    pub fn apply<'b, B: QueryBuilder>(
        &self,
        builder: &'b mut B,
        translator: &Translator,
    ) -> Result<&'b mut B, B::Error> {
        let builder = translator.filter(builder, &self.filter)?;
        let builder = translator.order(builder, &self.order)?;
        if self.page.is_none() && self.page_size.is_none() {
            return Ok(builder);
        }
        translator.paginate(builder, self.page, self.page_size)
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(spec)) => vec![spec],
        Some(OneOrMany::Many(specs)) => specs,
        None => Vec::new(),
    })
}
