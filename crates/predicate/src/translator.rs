use serde_json::Value;

use crate::{
    builder::{FilterBuilder, OrderBuilder, PaginationBuilder},
    config::TranslatorConfig,
    filter, order, paginate,
};

/// The three translators bound to one configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn filter<'b, B: FilterBuilder>(
        &self,
        builder: &'b mut B,
        spec: &Value,
    ) -> Result<&'b mut B, B::Error> {
        filter::apply_filter(builder, spec)
    }

    pub fn order<'b, B, I, S>(&self, builder: &'b mut B, specs: I) -> Result<&'b mut B, B::Error>
    where
        B: OrderBuilder,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        order::apply_order(builder, specs, self.config.default_direction)
    }

    /// `page` defaults to the configured baseline, `page_size` to the
    /// configured default size.
    pub fn paginate<'b, B: PaginationBuilder>(
        &self,
        builder: &'b mut B,
        page: Option<i64>,
        page_size: Option<u64>,
    ) -> Result<&'b mut B, B::Error> {
        paginate::apply_pagination(
            builder,
            page.unwrap_or(self.config.page_delta),
            page_size.unwrap_or(self.config.default_page_size),
            self.config.page_delta,
            self.config.offset_policy,
        )
    }
}
