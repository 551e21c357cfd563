use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use utoipa::ToSchema;
use uuid::Uuid;

/// Query cache entity name for resource lists.
pub const RESOURCES_KEY: &str = "resources";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    StudyMaterial,
    Project,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::StudyMaterial => "study_material",
            ResourceCategory::Project => "project",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "study_material" => Ok(ResourceCategory::StudyMaterial),
            "project" => Ok(ResourceCategory::Project),
            other => Err(format!("Unknown resource category: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_name: String,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub category: ResourceCategory,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Metadata row written after the blob is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResource {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_name: String,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub category: ResourceCategory,
}

//
// ──────────────────────────────────────────────────────────
// Storage path
// ──────────────────────────────────────────────────────────
//

/// Object key inside the resources bucket, e.g.
/// `study_material/1718000000000-notes.pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("file name pattern is valid"))
}

impl StoragePath {
    pub fn for_upload(category: ResourceCategory, file_name: &str, unix_millis: i64) -> Self {
        let sanitized = unsafe_chars().replace_all(file_name.trim(), "_");
        let sanitized = sanitized.trim_matches('_');
        let sanitized = if sanitized.is_empty() { "file" } else { sanitized };

        Self(format!("{}/{}-{}", category, unix_millis, sanitized))
    }

    /// Recovers the object key from a public URL containing `/{bucket}/`.
    pub fn from_public_url(url: &str, bucket: &str) -> Option<Self> {
        let marker = format!("/{}/", bucket);
        let (_, path) = url.split_once(&marker)?;
        let path = path.split(['?', '#']).next().unwrap_or_default();

        if path.is_empty() {
            None
        } else {
            Some(Self(path.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Presentation helpers
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Document,
    Image,
    File,
}

impl FileKind {
    pub fn from_mime(file_type: Option<&str>) -> Self {
        match file_type {
            Some(t) if t.contains("pdf") || t.contains("document") || t.contains("word") => {
                FileKind::Document
            }
            Some(t) if t.contains("image") => FileKind::Image,
            _ => FileKind::File,
        }
    }
}

pub fn format_file_size(bytes: Option<i64>) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    match bytes {
        None | Some(0) => "Unknown size".to_string(),
        Some(b) if (b as f64) < KB => format!("{} B", b),
        Some(b) if (b as f64) < MB => format!("{:.1} KB", b as f64 / KB),
        Some(b) => format!("{:.1} MB", b as f64 / MB),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_path_is_namespaced_and_sanitized() {
        let path = StoragePath::for_upload(
            ResourceCategory::StudyMaterial,
            "Week 1 notes (final).pdf",
            1718000000000,
        );
        assert_eq!(path.as_str(), "study_material/1718000000000-Week_1_notes_final_.pdf");
    }

    #[test]
    fn upload_path_falls_back_for_empty_names() {
        let path = StoragePath::for_upload(ResourceCategory::Project, "???", 5);
        assert_eq!(path.as_str(), "project/5-file");
    }

    #[test]
    fn path_recovered_from_public_url() {
        let url = "https://abc.supabase.co/storage/v1/object/public/resources/project/17-deck.pptx";
        let path = StoragePath::from_public_url(url, "resources").unwrap();
        assert_eq!(path.as_str(), "project/17-deck.pptx");
    }

    #[test]
    fn upload_path_survives_url_round_trip() {
        let path = StoragePath::for_upload(ResourceCategory::Project, "deck.pptx", 17);
        let url = format!("https://host/storage/v1/object/public/resources/{}", path);
        assert_eq!(StoragePath::from_public_url(&url, "resources"), Some(path));
    }

    #[test]
    fn foreign_url_has_no_path() {
        assert!(StoragePath::from_public_url("https://cdn.example.com/deck.pptx", "resources")
            .is_none());
        assert!(StoragePath::from_public_url("https://h/resources/", "resources").is_none());
    }

    #[test]
    fn file_sizes_are_human_readable() {
        assert_eq!(format_file_size(None), "Unknown size");
        assert_eq!(format_file_size(Some(0)), "Unknown size");
        assert_eq!(format_file_size(Some(812)), "812 B");
        assert_eq!(format_file_size(Some(1536)), "1.5 KB");
        assert_eq!(format_file_size(Some(2 * 1024 * 1024)), "2.0 MB");
    }

    #[test]
    fn file_kind_from_mime() {
        assert_eq!(FileKind::from_mime(Some("application/pdf")), FileKind::Document);
        assert_eq!(
            FileKind::from_mime(Some(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            )),
            FileKind::Document
        );
        assert_eq!(FileKind::from_mime(Some("image/png")), FileKind::Image);
        assert_eq!(FileKind::from_mime(Some("application/zip")), FileKind::File);
        assert_eq!(FileKind::from_mime(None), FileKind::File);
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ResourceCategory::StudyMaterial).unwrap(),
            "study_material"
        );
        assert_eq!("project".parse::<ResourceCategory>(), Ok(ResourceCategory::Project));
    }
}
