use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::skills::{self, ActiveModel, Column, Entity};
use super::sql_support::{ensure_deleted, map_db_err};
use crate::modules::content::application::domain::entities::{Skill, SkillDraft};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository<Skill> for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Skill>, ContentRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_skill).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Skill, ContentRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_skill)
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn create(&self, draft: SkillDraft) -> Result<Skill, ContentRepositoryError> {
        let mut model = draft_to_active_model(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_skill(result))
    }

    async fn update(&self, id: Uuid, draft: SkillDraft) -> Result<Skill, ContentRepositoryError> {
        Entity::update_many()
            .set(draft_to_active_model(draft))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .map(model_to_skill)
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

fn draft_to_active_model(draft: SkillDraft) -> ActiveModel {
    ActiveModel {
        name: Set(draft.name),
        category: Set(draft.category),
        icon: Set(draft.icon),
        description: Set(draft.description),
        display_order: Set(draft.display_order),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

fn model_to_skill(model: skills::Model) -> Skill {
    Skill {
        id: model.id,
        name: model.name,
        category: model.category,
        icon: model.icon,
        description: model.description,
        display_order: model.display_order,
    }
}
