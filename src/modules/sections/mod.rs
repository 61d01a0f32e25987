// src/modules/sections/mod.rs
//
// One binding per resume section: entity, payloads and storage mapping.

pub mod achievement;
pub mod award;
pub mod bug_bounty;
pub mod certification;
pub mod education;
pub mod experience;
pub mod hackathon;
pub mod interest;
pub mod language;
pub mod open_source;
pub mod project;
pub mod publication;
pub mod recommendation;
pub mod registry;
pub mod skill;
pub mod talk;

pub use achievement::AchievementSection;
pub use award::AwardSection;
pub use bug_bounty::BugBountySection;
pub use certification::CertificationSection;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use hackathon::HackathonSection;
pub use interest::InterestSection;
pub use language::LanguageSection;
pub use open_source::OpenSourceSection;
pub use project::ProjectSection;
pub use publication::PublicationSection;
pub use recommendation::RecommendationSection;
pub use registry::SectionServices;
pub use skill::SkillSection;
pub use talk::TalkSection;
