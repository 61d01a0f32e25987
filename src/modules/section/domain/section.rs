// src/modules/section/domain/section.rs

use std::fmt::Debug;

use serde::Serialize;
use uuid::Uuid;

use super::section_kind::{SectionDescriptor, SectionKind};

/// Read access every stored sub-resource item offers the framework.
pub trait SectionItem {
    fn id(&self) -> Uuid;

    fn resume_id(&self) -> Uuid;

    /// Stored position; `None` for date-ordered sections.
    fn display_order(&self) -> Option<i32> {
        None
    }

    /// Ordering group for multi-field sections.
    fn group_key(&self) -> Option<&str> {
        None
    }
}

/// What the framework needs to know about a create or patch payload.
pub trait SectionPayload {
    /// Position requested by the caller, if any.
    fn explicit_order(&self) -> Option<i32> {
        None
    }

    /// Target ordering group for multi-field sections.
    fn group_key(&self) -> Option<&str> {
        None
    }
}

/// Binds a section kind to its item and payload types.
pub trait Section: Send + Sync + 'static {
    const KIND: SectionKind;

    type Item: SectionItem + Serialize + Debug + Clone + Send + Sync + 'static;
    type Create: SectionPayload + Debug + Clone + Send + Sync + 'static;
    type Patch: SectionPayload + Debug + Clone + Default + Send + Sync + 'static;

    fn descriptor() -> &'static SectionDescriptor {
        Self::KIND.descriptor()
    }
}
