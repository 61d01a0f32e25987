mod section_use_cases;

pub use section_use_cases::{ListQuery, SectionError, SectionUseCases};
