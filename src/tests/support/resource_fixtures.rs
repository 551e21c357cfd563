use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::resource::application::domain::entities::{
    NewResource, Resource, ResourceCategory, StoragePath,
};
use crate::resource::application::domain::policies::UploadPolicy;
use crate::resource::application::ports::outgoing::{
    ObjectStorage, ObjectStorageError, ResourceRepository, ResourceRepositoryError,
};
use crate::resource::application::resource_use_cases::ResourceUseCases;
use crate::shared::cache::QueryCache;

const PUBLIC_BASE: &str = "https://storage.test/storage/v1/object/public";

pub fn resource(title: &str, category: ResourceCategory, order: i32) -> Resource {
    let file_name = format!("{}.pdf", title.to_lowercase().replace(' ', "-"));
    let now = Utc::now();

    Resource {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        file_url: format!("{}/resources/{}/1700000000000-{}", PUBLIC_BASE, category, file_name),
        file_name,
        file_size: Some(2048),
        file_type: Some("application/pdf".to_string()),
        category,
        display_order: order,
        created_at: now,
        updated_at: now,
    }
}

pub fn resource_use_cases(
    repository: Arc<InMemoryResourceRepository>,
    storage: Arc<FakeObjectStorage>,
) -> ResourceUseCases {
    ResourceUseCases::new(
        repository,
        storage,
        UploadPolicy::default(),
        Arc::new(QueryCache::new()),
    )
}

pub struct InMemoryResourceRepository {
    records: Mutex<Vec<Resource>>,
    read_error: Option<String>,
    write_error: Mutex<Option<String>>,
    list_calls: AtomicUsize,
}

impl InMemoryResourceRepository {
    pub fn with(records: Vec<Resource>) -> Self {
        Self {
            records: Mutex::new(records),
            read_error: None,
            write_error: Mutex::new(None),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            read_error: Some(message.to_string()),
            write_error: Mutex::new(Some(message.to_string())),
            ..Self::with(Vec::new())
        }
    }

    pub fn fail_writes(&self, message: &str) {
        *self.write_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn snapshot(&self) -> Vec<Resource> {
        self.records.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check_read(&self) -> Result<(), ResourceRepositoryError> {
        match &self.read_error {
            Some(msg) => Err(ResourceRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn check_write(&self) -> Result<(), ResourceRepositoryError> {
        match self.write_error.lock().unwrap().as_ref() {
            Some(msg) => Err(ResourceRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn list(
        &self,
        category: Option<ResourceCategory>,
    ) -> Result<Vec<Resource>, ResourceRepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_read()?;

        let mut rows: Vec<Resource> = self
            .snapshot()
            .into_iter()
            .filter(|r| category.map_or(true, |c| r.category == c))
            .collect();
        rows.sort_by_key(|r| r.display_order);
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Resource, ResourceRepositoryError> {
        self.check_read()?;
        self.snapshot()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(ResourceRepositoryError::NotFound)
    }

    async fn insert(&self, new: NewResource) -> Result<Resource, ResourceRepositoryError> {
        self.check_write()?;
        let now = Utc::now();
        let stored = Resource {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            file_url: new.file_url,
            file_name: new.file_name,
            file_size: new.file_size,
            file_type: new.file_type,
            category: new.category,
            display_order: 0,
            created_at: now,
            updated_at: now,
        };
        self.records.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResourceRepositoryError> {
        self.check_write()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ResourceRepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Bucket held in memory. Public URLs follow the hosted layout.
pub struct FakeObjectStorage {
    bucket: String,
    objects: Mutex<Vec<String>>,
    removed: Mutex<Vec<String>>,
    fail_puts: bool,
    fail_removes: bool,
}

impl FakeObjectStorage {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            objects: Mutex::new(Vec::new()),
            removed: Mutex::new(Vec::new()),
            fail_puts: false,
            fail_removes: false,
        }
    }

    pub fn failing_puts(mut self) -> Self {
        self.fail_puts = true;
        self
    }

    pub fn failing_removes(mut self) -> Self {
        self.fail_removes = true;
        self
    }

    /// Stores an object directly and returns its public URL.
    pub fn seed_object(&self, path: &str) -> String {
        self.objects.lock().unwrap().push(path.to_string());
        self.public_url(path)
    }

    pub fn object_paths(&self) -> Vec<String> {
        self.objects.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}/{}", PUBLIC_BASE, self.bucket, path)
    }
}

#[async_trait]
impl ObjectStorage for FakeObjectStorage {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put_object(
        &self,
        path: &StoragePath,
        _bytes: Vec<u8>,
        _content_type: Option<&str>,
    ) -> Result<String, ObjectStorageError> {
        if self.fail_puts {
            return Err(ObjectStorageError::Rejected("Bucket not found".to_string()));
        }
        Ok(self.seed_object(path.as_str()))
    }

    async fn remove_object(&self, path: &StoragePath) -> Result<(), ObjectStorageError> {
        if self.fail_removes {
            return Err(ObjectStorageError::Unreachable("connection reset".to_string()));
        }
        self.objects.lock().unwrap().retain(|p| p != path.as_str());
        self.removed.lock().unwrap().push(path.to_string());
        Ok(())
    }
}
