pub mod pagination;
pub mod patch_field;
pub mod response;

pub use pagination::{PageRequest, PageResult, PaginationConfig};
pub use patch_field::PatchField;
pub use response::Acknowledgement;
