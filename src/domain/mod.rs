//! Domain layer - Post records and ordering rules

pub mod collation;
pub mod id_format;
pub mod post;

pub use collation::{parse_locale, TitleCollator};
pub use id_format::IdFormat;
pub use post::{PostId, PostRecord, PostSummary, RouteParam, RouteParams, NOT_FOUND};
