// src/modules/sections/registry.rs

use std::sync::Arc;

use sea_orm::{DatabaseConnection, FromQueryResult, IntoActiveModel};
use tracing::info;

use super::{
    education, experience, open_source, AchievementSection, AwardSection, BugBountySection,
    CertificationSection, EducationSection, ExperienceSection, HackathonSection, InterestSection,
    LanguageSection, OpenSourceSection, ProjectSection, PublicationSection, RecommendationSection,
    SkillSection, TalkSection,
};
use crate::modules::resume::application::OwnershipGuard;
use crate::modules::section::adapter::outgoing::{PostgresSection, SectionRepositoryPostgres};
use crate::modules::section::application::ports::incoming::use_cases::SectionUseCases;
use crate::modules::section::application::service::SectionService;
use crate::modules::section::application::validation::ValidationHooks;
use crate::modules::section::domain::{Section, SectionKind};
use crate::shared::pagination::PaginationConfig;

type Service<S> = Arc<dyn SectionUseCases<S> + Send + Sync>;

/// Every resume section, wired to storage and guarded by ownership.
#[derive(Clone)]
pub struct SectionServices {
    pub experiences: Service<ExperienceSection>,
    pub educations: Service<EducationSection>,
    pub skills: Service<SkillSection>,
    pub projects: Service<ProjectSection>,
    pub certifications: Service<CertificationSection>,
    pub awards: Service<AwardSection>,
    pub publications: Service<PublicationSection>,
    pub talks: Service<TalkSection>,
    pub hackathons: Service<HackathonSection>,
    pub bug_bounties: Service<BugBountySection>,
    pub open_source: Service<OpenSourceSection>,
    pub languages: Service<LanguageSection>,
    pub interests: Service<InterestSection>,
    pub recommendations: Service<RecommendationSection>,
    pub achievements: Service<AchievementSection>,
}

impl SectionServices {
    pub fn new(
        db: Arc<DatabaseConnection>,
        guard: OwnershipGuard,
        pagination: PaginationConfig,
    ) -> Self {
        let wiring = Wiring {
            db,
            guard,
            pagination,
        };

        let services = Self {
            experiences: wiring.service(experience::hooks()),
            educations: wiring.service(education::hooks()),
            skills: wiring.service(ValidationHooks::none()),
            projects: wiring.service(ValidationHooks::none()),
            certifications: wiring.service(ValidationHooks::none()),
            awards: wiring.service(ValidationHooks::none()),
            publications: wiring.service(ValidationHooks::none()),
            talks: wiring.service(ValidationHooks::none()),
            hackathons: wiring.service(ValidationHooks::none()),
            bug_bounties: wiring.service(ValidationHooks::none()),
            open_source: wiring.service(open_source::hooks()),
            languages: wiring.service(ValidationHooks::none()),
            interests: wiring.service(ValidationHooks::none()),
            recommendations: wiring.service(ValidationHooks::none()),
            achievements: wiring.service(ValidationHooks::none()),
        };

        info!(sections = SectionKind::ALL.len(), "Section services wired");

        services
    }
}

struct Wiring {
    db: Arc<DatabaseConnection>,
    guard: OwnershipGuard,
    pagination: PaginationConfig,
}

impl Wiring {
    fn service<S>(&self, hooks: ValidationHooks<S>) -> Service<S>
    where
        S: PostgresSection,
        <S as Section>::Item: IntoActiveModel<S::ActiveModel> + FromQueryResult,
    {
        let repository = SectionRepositoryPostgres::<S>::new(Arc::clone(&self.db));
        Arc::new(
            SectionService::new(self.guard.clone(), repository, self.pagination).with_hooks(hooks),
        )
    }
}
