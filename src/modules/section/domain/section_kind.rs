// src/modules/section/domain/section_kind.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ordering::OrderingStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Education,
    Skill,
    Project,
    Certification,
    Award,
    Publication,
    Talk,
    Hackathon,
    BugBounty,
    OpenSource,
    Language,
    Interest,
    Recommendation,
    Achievement,
}

/// Static facts about a section kind: what it is called, where it is stored
/// and how its items are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub kind: SectionKind,
    pub entity_name: &'static str,
    /// Path segment used by transport adapters.
    pub slug: &'static str,
    pub table: &'static str,
    pub ordering: OrderingStrategy,
}

const fn user_defined(
    kind: SectionKind,
    entity_name: &'static str,
    slug: &'static str,
    table: &'static str,
) -> SectionDescriptor {
    SectionDescriptor {
        kind,
        entity_name,
        slug,
        table,
        ordering: OrderingStrategy::UserDefined,
    }
}

const fn date_desc(
    kind: SectionKind,
    entity_name: &'static str,
    slug: &'static str,
    table: &'static str,
    date_column: &'static str,
) -> SectionDescriptor {
    SectionDescriptor {
        kind,
        entity_name,
        slug,
        table,
        ordering: OrderingStrategy::DateDesc { date_column },
    }
}

// Indexed by `SectionKind as usize`; keep in declaration order.
static SECTION_DESCRIPTORS: [SectionDescriptor; 15] = [
    user_defined(SectionKind::Experience, "Experience", "experiences", "experiences"),
    user_defined(SectionKind::Education, "Education", "educations", "educations"),
    SectionDescriptor {
        kind: SectionKind::Skill,
        entity_name: "Skill",
        slug: "skills",
        table: "skills",
        ordering: OrderingStrategy::MultiField {
            group_column: "category",
        },
    },
    user_defined(SectionKind::Project, "Project", "projects", "projects"),
    date_desc(
        SectionKind::Certification,
        "Certification",
        "certifications",
        "certifications",
        "issue_date",
    ),
    date_desc(SectionKind::Award, "Award", "awards", "awards", "date"),
    date_desc(
        SectionKind::Publication,
        "Publication",
        "publications",
        "publications",
        "publication_date",
    ),
    date_desc(SectionKind::Talk, "Talk", "talks", "talks", "date"),
    date_desc(SectionKind::Hackathon, "Hackathon", "hackathons", "hackathons", "date"),
    date_desc(
        SectionKind::BugBounty,
        "Bug bounty",
        "bug-bounties",
        "bug_bounties",
        "reported_at",
    ),
    user_defined(
        SectionKind::OpenSource,
        "Open source contribution",
        "open-source",
        "open_source_contributions",
    ),
    user_defined(SectionKind::Language, "Language", "languages", "languages"),
    user_defined(SectionKind::Interest, "Interest", "interests", "interests"),
    user_defined(
        SectionKind::Recommendation,
        "Recommendation",
        "recommendations",
        "recommendations",
    ),
    user_defined(SectionKind::Achievement, "Achievement", "achievements", "achievements"),
];

impl SectionKind {
    pub const ALL: [SectionKind; 15] = [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skill,
        SectionKind::Project,
        SectionKind::Certification,
        SectionKind::Award,
        SectionKind::Publication,
        SectionKind::Talk,
        SectionKind::Hackathon,
        SectionKind::BugBounty,
        SectionKind::OpenSource,
        SectionKind::Language,
        SectionKind::Interest,
        SectionKind::Recommendation,
        SectionKind::Achievement,
    ];

    pub fn descriptor(self) -> &'static SectionDescriptor {
        &SECTION_DESCRIPTORS[self as usize]
    }

    pub fn entity_name(self) -> &'static str {
        self.descriptor().entity_name
    }

    pub fn ordering(self) -> OrderingStrategy {
        self.descriptor().ordering
    }

    pub fn from_slug(slug: &str) -> Option<SectionKind> {
        SECTION_DESCRIPTORS
            .iter()
            .find(|d| d.slug.eq_ignore_ascii_case(slug.trim()))
            .map(|d| d.kind)
    }

    pub fn descriptors() -> &'static [SectionDescriptor] {
        &SECTION_DESCRIPTORS
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionKind {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::from_slug(s).ok_or_else(|| UnknownSection(s.to_string()))
    }
}
