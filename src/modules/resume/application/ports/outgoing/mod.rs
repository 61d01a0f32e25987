pub mod resume_ownership_query;

pub use resume_ownership_query::{ResumeOwnershipError, ResumeOwnershipQuery};
