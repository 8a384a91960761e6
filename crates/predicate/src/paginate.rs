//! Translation of page numbers into limit/offset calls.

use tracing::trace;

use crate::{builder::PaginationBuilder, config::OffsetPolicy};

/// Offset of `page` for the given baseline. Pages at or below `delta`
/// yield zero.
pub fn page_offset(page: i64, page_size: u64, delta: i64) -> u64 {
    let pages_skipped = page.max(delta).abs_diff(delta);
    pages_skipped.saturating_mul(page_size)
}

/// Registers `limit(page_size)` followed by the offset of `page`.
///
/// With a baseline of 1:
///
/// ```text
/// page -1, size 100 -> limit 100
/// page  1, size 100 -> limit 100
/// page  2, size 100 -> limit 100 offset 100
/// ```
pub fn apply_pagination<B: PaginationBuilder>(
    builder: &mut B,
    page: i64,
    page_size: u64,
    delta: i64,
    offset_policy: OffsetPolicy,
) -> Result<&mut B, B::Error> {
    let offset = page_offset(page, page_size, delta);
    trace!(page, page_size, offset, "Applying pagination");

    builder.limit(page_size)?;
    if offset > 0 || offset_policy == OffsetPolicy::Always {
        builder.offset(offset)?;
    }
    Ok(builder)
}
