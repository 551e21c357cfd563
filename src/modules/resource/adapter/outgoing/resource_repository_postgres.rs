use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::resources::{self, ActiveModel, Column, Entity};
use crate::resource::application::domain::entities::{NewResource, Resource, ResourceCategory};
use crate::resource::application::ports::outgoing::{ResourceRepository, ResourceRepositoryError};

#[derive(Clone)]
pub struct ResourceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResourceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ResourceRepositoryError {
    ResourceRepositoryError::DatabaseError(e.to_string())
}

fn model_to_resource(model: resources::Model) -> Result<Resource, ResourceRepositoryError> {
    let category = model
        .category
        .parse::<ResourceCategory>()
        .map_err(ResourceRepositoryError::DatabaseError)?;

    Ok(Resource {
        id: model.id,
        title: model.title,
        description: model.description,
        file_url: model.file_url,
        file_name: model.file_name,
        file_size: model.file_size,
        file_type: model.file_type,
        category,
        display_order: model.display_order,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

#[async_trait]
impl ResourceRepository for ResourceRepositoryPostgres {
    async fn list(
        &self,
        category: Option<ResourceCategory>,
    ) -> Result<Vec<Resource>, ResourceRepositoryError> {
        let mut query = Entity::find().order_by_asc(Column::DisplayOrder);
        if let Some(category) = category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }

        query
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_resource)
            .collect()
    }

    async fn get(&self, id: Uuid) -> Result<Resource, ResourceRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ResourceRepositoryError::NotFound)?;

        model_to_resource(model)
    }

    async fn insert(&self, resource: NewResource) -> Result<Resource, ResourceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(resource.title),
            description: Set(resource.description),
            file_url: Set(resource.file_url),
            file_name: Set(resource.file_name),
            file_size: Set(resource.file_size),
            file_type: Set(resource.file_type),
            category: Set(resource.category.as_str().to_string()),
            display_order: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_resource(inserted)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResourceRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ResourceRepositoryError::NotFound);
        }

        Ok(())
    }
}
