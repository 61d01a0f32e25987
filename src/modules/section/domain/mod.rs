pub mod ordering;
pub mod section;
pub mod section_kind;

pub use ordering::{OrderingStrategy, SortDirection, SortKey, ORDER_COLUMN};
pub use section::{Section, SectionItem, SectionPayload};
pub use section_kind::{SectionDescriptor, SectionKind};
