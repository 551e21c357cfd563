use crate::shared::config::{self, ConfigError};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UploadPolicyError {
    #[error("Please provide a title and select a file")]
    MissingInput,
    #[error("File size must be less than {0}MB")]
    TooLarge(u64),
    #[error("File type .{0} is not allowed")]
    UnsupportedExtension(String),
    #[error("File name is missing an extension")]
    MissingExtension,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_extensions: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] = &[
        "pdf", "doc", "docx", "ppt", "pptx", "xls", "xlsx", "txt", "jpg", "jpeg", "png", "gif",
        "zip", "rar",
    ];

    /// Env var: `RESOURCE_MAX_FILE_SIZE` (bytes).
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_file_size_bytes =
            config::parse_or("RESOURCE_MAX_FILE_SIZE", Self::DEFAULT_MAX_FILE_SIZE_BYTES)?;

        if max_file_size_bytes == 0 {
            return Err(ConfigError::Invalid {
                key: "RESOURCE_MAX_FILE_SIZE",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            max_file_size_bytes,
            ..Self::default()
        })
    }

    pub fn max_file_size_mb(&self) -> u64 {
        self.max_file_size_bytes / (1024 * 1024)
    }

    /// Checks run before anything is written to storage.
    pub fn check(&self, title: &str, file_name: &str, size: u64) -> Result<(), UploadPolicyError> {
        if title.trim().is_empty() || file_name.trim().is_empty() || size == 0 {
            return Err(UploadPolicyError::MissingInput);
        }

        if size > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge(self.max_file_size_mb()));
        }

        let extension = match file_name.trim().rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
            _ => return Err(UploadPolicyError::MissingExtension),
        };

        if !self.allowed_extensions.contains(&extension.as_str()) {
            return Err(UploadPolicyError::UnsupportedExtension(extension));
        }

        Ok(())
    }
}
