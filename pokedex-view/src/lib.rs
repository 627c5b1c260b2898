extern crate alloc;

mod criteria;
mod filter;
mod pipeline;
mod sort;

pub use criteria::{
    FilterCriteria,
    MAX_REQUIRED_TYPES,
    StatRanges,
    TypeMatch,
};
pub use filter::filter;
pub use pipeline::{
    View,
    ViewQuery,
    filter_and_sort,
    present_types,
};
pub use sort::{
    SortDirection,
    SortKey,
    SortSpec,
    sort,
};
