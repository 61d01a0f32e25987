pub mod resume;
pub mod section;
pub mod sections;
