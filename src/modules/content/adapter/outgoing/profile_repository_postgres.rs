use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::personal_info::{self, ActiveModel, Column, Entity};
use super::sql_support::{ensure_deleted, from_json, map_db_err, to_json};
use crate::modules::content::application::domain::entities::{Profile, ProfileDraft};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

/// `personal_info` holds a single row; `list` reads it as "first or none".
#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository<Profile> for ProfileRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Profile>, ContentRepositoryError> {
        let first = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        first.map(model_to_profile).into_iter().collect()
    }

    async fn get(&self, id: Uuid) -> Result<Profile, ContentRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContentRepositoryError::NotFound)?;

        model_to_profile(model)
    }

    async fn create(&self, draft: ProfileDraft) -> Result<Profile, ContentRepositoryError> {
        let mut model = draft_to_active_model(draft)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let result = model.insert(&*self.db).await.map_err(map_singleton_err)?;

        model_to_profile(result)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ProfileDraft,
    ) -> Result<Profile, ContentRepositoryError> {
        let results = Entity::update_many()
            .set(draft_to_active_model(draft)?)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ContentRepositoryError::NotFound)?;

        model_to_profile(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(res)
    }
}

/// A second row trips the `personal_info_singleton` unique index.
fn map_singleton_err(e: DbErr) -> ContentRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("personal_info_singleton")
    {
        ContentRepositoryError::AlreadyExists
    } else {
        map_db_err(e)
    }
}

fn draft_to_active_model(draft: ProfileDraft) -> Result<ActiveModel, ContentRepositoryError> {
    Ok(ActiveModel {
        name: Set(draft.name),
        roles: Set(to_json(&draft.roles)?),
        location: Set(draft.location),
        bio: Set(draft.bio),
        email: Set(draft.email),
        phone: Set(draft.phone),
        address: Set(draft.address),
        cv_url: Set(draft.cv_url),
        profile_image: Set(draft.profile_image),
        stats_projects: Set(draft.stats_projects),
        stats_experience: Set(draft.stats_experience),
        stats_clients: Set(draft.stats_clients),
        stats_awards: Set(draft.stats_awards),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

fn model_to_profile(model: personal_info::Model) -> Result<Profile, ContentRepositoryError> {
    Ok(Profile {
        id: model.id,
        name: model.name,
        roles: from_json(&model.roles)?,
        location: model.location,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        address: model.address,
        cv_url: model.cv_url,
        profile_image: model.profile_image,
        stats_projects: model.stats_projects,
        stats_experience: model.stats_experience,
        stats_clients: model.stats_clients,
        stats_awards: model.stats_awards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_profile_model(id: Uuid) -> personal_info::Model {
        let now = Utc::now().fixed_offset();

        personal_info::Model {
            id,
            name: "Alex Doe".to_string(),
            roles: serde_json::json!(["Data Scientist", "Data Analyst"]),
            location: Some("Jakarta".to_string()),
            bio: None,
            email: Some("alex@example.com".to_string()),
            phone: None,
            address: None,
            cv_url: None,
            profile_image: None,
            stats_projects: 12,
            stats_experience: "5+".to_string(),
            stats_clients: 8,
            stats_awards: 2,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_returns_first_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_profile_model(id)]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let profiles = repo.list().await.unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, id);
        assert_eq!(profiles[0].roles, vec!["Data Scientist", "Data Analyst"]);
        assert_eq!(profiles[0].stats_experience, "5+");
    }

    #[tokio::test]
    async fn list_without_row_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<personal_info::Model>::new()])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert!(repo.list().await.unwrap().is_empty());
    }

    fn draft() -> ProfileDraft {
        ProfileDraft {
            name: "Alex Doe".to_string(),
            ..ProfileDraft::default()
        }
    }

    #[tokio::test]
    async fn concurrent_second_insert_hits_singleton_index() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"personal_info_singleton\""
                    .to_string(),
            )])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.create(draft()).await.unwrap_err(),
            ContentRepositoryError::AlreadyExists
        );
    }

    #[tokio::test]
    async fn other_insert_failures_stay_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create(draft()).await.unwrap_err(),
            ContentRepositoryError::DatabaseError(_)
        ));
    }
}
