use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::projects::{self, ActiveModel, Column, Entity};
use super::sql_support::{ensure_deleted, from_json, map_db_err, to_json};
use crate::modules::content::application::domain::entities::{Project, ProjectDraft};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository<Project> for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ContentRepositoryError> {
        Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_project)
            .collect()
    }

    async fn get(&self, id: Uuid) -> Result<Project, ContentRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContentRepositoryError::NotFound)?;

        model_to_project(model)
    }

    async fn create(&self, draft: ProjectDraft) -> Result<Project, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = draft_to_active_model(draft)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(now);

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_project(result)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ProjectDraft,
    ) -> Result<Project, ContentRepositoryError> {
        let model = draft_to_active_model(draft)?;

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ContentRepositoryError::NotFound)?;

        model_to_project(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(res)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn draft_to_active_model(draft: ProjectDraft) -> Result<ActiveModel, ContentRepositoryError> {
    Ok(ActiveModel {
        title: Set(draft.title),
        description: Set(draft.description),
        tech_stack: Set(to_json(&draft.tech_stack)?),
        github_url: Set(draft.github_url),
        live_url: Set(draft.live_url),
        thumbnail: Set(draft.thumbnail),
        featured: Set(draft.featured),
        coming_soon: Set(draft.coming_soon),
        display_order: Set(draft.display_order),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

fn model_to_project(model: projects::Model) -> Result<Project, ContentRepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        tech_stack: from_json(&model.tech_stack)?,
        github_url: model.github_url,
        live_url: model.live_url,
        thumbnail: model.thumbnail,
        featured: model.featured,
        coming_soon: model.coming_soon,
        display_order: model.display_order,
    })
}

// ============================================================================
// Tests
// ============================================================================
