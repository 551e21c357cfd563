use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::experiences::{self, ActiveModel, Column, Entity};
use super::sql_support::{ensure_deleted, map_db_err};
use crate::modules::content::application::domain::entities::{Experience, ExperienceDraft};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository<Experience> for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ContentRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_experience).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Experience, ContentRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_experience)
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn create(&self, draft: ExperienceDraft) -> Result<Experience, ContentRepositoryError> {
        let mut model = draft_to_active_model(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_experience(result))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<Experience, ContentRepositoryError> {
        Entity::update_many()
            .set(draft_to_active_model(draft))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .map(model_to_experience)
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(res)
    }
}

fn draft_to_active_model(draft: ExperienceDraft) -> ActiveModel {
    ActiveModel {
        role: Set(draft.role),
        company: Set(draft.company),
        period: Set(draft.period),
        description: Set(draft.description),
        icon: Set(draft.icon),
        entry_type: Set(draft.entry_type),
        display_order: Set(draft.display_order),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

fn model_to_experience(model: experiences::Model) -> Experience {
    Experience {
        id: model.id,
        role: model.role,
        company: model.company,
        period: model.period,
        description: model.description,
        icon: model.icon,
        entry_type: model.entry_type,
        display_order: model.display_order,
    }
}
