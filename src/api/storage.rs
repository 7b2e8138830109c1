//
//  gcore-cli
//  api/storage.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Object storage API client.
//!
//! Buckets hold objects addressed by name. Uploads and downloads move raw
//! bytes rather than JSON and are streamed, so large files are never held
//! in memory.
//!
//! # Content Types
//!
//! When an upload does not name a content type it is guessed from the file
//! extension:
//!
//! | File | Content-Type |
//! |------|--------------|
//! | `index.html` | `text/html` |
//! | `photo.jpg` | `image/jpeg` |
//! | `blob.unknownext` | `application/octet-stream` |

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use super::client::{encode_path, ApiClient};
use super::common::{ApiResult, Entity};
use crate::auth::AuthProvider;

/// Base path of the storage API.
pub const STORAGE_BASE_PATH: &str = "/storage/v1";

/// Location used when the caller does not pick one.
pub const DEFAULT_LOCATION: &str = "eu-north-1";

/// Content type used when the extension gives no hint.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Bucket access policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketAccess {
    #[default]
    Private,
    PublicRead,
}

/// Request body for creating a bucket.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBucketRequest {
    pub name: String,
    pub location: String,
    pub access: BucketAccess,
}

impl CreateBucketRequest {
    /// A private bucket in [`DEFAULT_LOCATION`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: DEFAULT_LOCATION.to_string(),
            access: BucketAccess::Private,
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn access(mut self, access: BucketAccess) -> Self {
        self.access = access;
        self
    }
}

/// Guesses the content type of a file from its extension.
pub fn guess_content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string())
}

/// Returns the local filename a download of `object_name` defaults to: the
/// last path segment of the object name.
pub fn default_download_path(object_name: &str) -> PathBuf {
    let name = object_name
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(object_name);
    PathBuf::from(name)
}

/// Path of a bucket, optionally followed by more raw segments.
fn bucket_path<'a>(
    bucket_name: &'a str,
    rest: impl IntoIterator<Item = &'a str>,
) -> ApiResult<String> {
    encode_path(["buckets", bucket_name].into_iter().chain(rest))
}

/// Path of an object. `/` inside the key stays a path separator; every other
/// reserved character is escaped.
fn object_path(bucket_name: &str, object_name: &str) -> ApiResult<String> {
    bucket_path(
        bucket_name,
        std::iter::once("objects").chain(object_name.split('/')),
    )
}

/// Client for Gcore object storage.
#[derive(Debug, Clone)]
pub struct StorageClient {
    api: ApiClient,
}

impl StorageClient {
    pub fn new(auth: Arc<AuthProvider>) -> Self {
        Self {
            api: ApiClient::new(auth, STORAGE_BASE_PATH),
        }
    }

    pub async fn list_buckets(&self) -> ApiResult<Vec<Entity>> {
        self.api.get("/buckets").await
    }

    pub async fn create_bucket(&self, request: &CreateBucketRequest) -> ApiResult<Entity> {
        self.api.post("/buckets", request).await
    }

    pub async fn delete_bucket(&self, bucket_name: &str) -> ApiResult<()> {
        self.api.delete(&bucket_path(bucket_name, [])?).await
    }

    /// Lists objects in a bucket.
    ///
    /// `prefix` and `delimiter` are only sent when supplied. The listing is
    /// returned as-is; Gcore wraps the objects in an `objects` array.
    pub async fn list_objects(
        &self,
        bucket_name: &str,
        prefix: Option<&str>,
        delimiter: Option<&str>,
    ) -> ApiResult<Entity> {
        self.api
            .get_with_query(
                &bucket_path(bucket_name, ["objects"])?,
                &[("prefix", prefix), ("delimiter", delimiter)],
            )
            .await
    }

    /// Uploads a local file as `object_name`.
    ///
    /// The content type falls back to [`guess_content_type`] when `None`.
    pub async fn upload_object(
        &self,
        bucket_name: &str,
        object_name: &str,
        file_path: &Path,
        content_type: Option<&str>,
    ) -> ApiResult<Entity> {
        let content_type = content_type
            .map(str::to_string)
            .unwrap_or_else(|| guess_content_type(file_path));

        self.api
            .put_file(
                &object_path(bucket_name, object_name)?,
                file_path,
                &content_type,
            )
            .await
    }

    /// Downloads an object to a local file.
    ///
    /// The destination defaults to [`default_download_path`] in the current
    /// directory. Returns the path written.
    pub async fn download_object(
        &self,
        bucket_name: &str,
        object_name: &str,
        file_path: Option<&Path>,
    ) -> ApiResult<PathBuf> {
        let destination = file_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_download_path(object_name));

        self.api
            .get_to_file(
                &object_path(bucket_name, object_name)?,
                &destination,
            )
            .await?;

        Ok(destination)
    }

    pub async fn delete_object(&self, bucket_name: &str, object_name: &str) -> ApiResult<()> {
        self.api
            .delete(&object_path(bucket_name, object_name)?)
            .await
    }
}
