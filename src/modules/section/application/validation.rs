// src/modules/section/application/validation.rs

use chrono::NaiveDate;

use crate::modules::section::domain::Section;
use crate::shared::patch_field::PatchField;

pub type ValidationHook<T> = fn(&T) -> Result<(), String>;

/// Entity-specific checks run by the service before the repository is
/// touched. A failing hook becomes `SectionError::ValidationFailed`.
pub struct ValidationHooks<S: Section> {
    pub on_create: Option<ValidationHook<S::Create>>,
    pub on_update: Option<ValidationHook<S::Patch>>,
}

impl<S: Section> ValidationHooks<S> {
    pub fn none() -> Self {
        Self {
            on_create: None,
            on_update: None,
        }
    }

    pub fn new(on_create: ValidationHook<S::Create>, on_update: ValidationHook<S::Patch>) -> Self {
        Self {
            on_create: Some(on_create),
            on_update: Some(on_update),
        }
    }

    pub fn check_create(&self, data: &S::Create) -> Result<(), String> {
        self.on_create.map_or(Ok(()), |hook| hook(data))
    }

    pub fn check_update(&self, data: &S::Patch) -> Result<(), String> {
        self.on_update.map_or(Ok(()), |hook| hook(data))
    }
}

impl<S: Section> Default for ValidationHooks<S> {
    fn default() -> Self {
        Self::none()
    }
}

impl<S: Section> Clone for ValidationHooks<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Section> Copy for ValidationHooks<S> {}

/// Ongoing entries (current job, studies in progress, active maintainer)
/// cannot also carry an end date.
pub fn current_entry_has_no_end_date(
    is_current: bool,
    end_date: Option<NaiveDate>,
) -> Result<(), String> {
    if is_current && end_date.is_some() {
        return Err("an ongoing entry cannot have an end date".to_string());
    }
    Ok(())
}

/// Patch variant: only the fields present in the patch are compared.
pub fn patched_current_entry_has_no_end_date(
    is_current: &PatchField<bool>,
    end_date: &PatchField<NaiveDate>,
) -> Result<(), String> {
    let is_current = matches!(is_current, PatchField::Value(true));
    current_entry_has_no_end_date(is_current, end_date.as_value().copied())
}
