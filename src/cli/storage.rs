//
//  gcore-cli
//  cli/storage.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Object storage commands
//!
//! Uploads and downloads stream through the client, so large objects are
//! never held in memory. Upload content types are guessed from the file
//! extension unless `--content-type` is given.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde_json::{json, Value};

use crate::api::storage::{BucketAccess, CreateBucketRequest, DEFAULT_LOCATION};
use crate::api::{Entity, StorageClient};
use crate::interactive::confirm_destructive;
use crate::util::format_size;

use super::GlobalOptions;

const BUCKET_COLUMNS: &[(&str, &str)] = &[
    ("NAME", "name"),
    ("LOCATION", "location"),
    ("ACCESS", "access"),
    ("CREATED", "created_at"),
];

const OBJECT_COLUMNS: &[(&str, &str)] = &[
    ("KEY", "key"),
    ("SIZE", "size"),
    ("MODIFIED", "last_modified"),
];

/// Object storage buckets and objects
#[derive(Args, Debug)]
pub struct StorageCommand {
    #[command(subcommand)]
    pub command: StorageSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StorageSubcommand {
    /// Manage buckets
    #[command(subcommand)]
    Bucket(BucketSubcommand),

    /// Manage objects inside a bucket
    #[command(subcommand)]
    Object(ObjectSubcommand),
}

#[derive(Subcommand, Debug)]
pub enum BucketSubcommand {
    /// List buckets
    #[command(visible_alias = "ls")]
    List,

    /// Create a bucket
    Create(CreateBucketArgs),

    /// Delete a bucket
    Delete(DeleteBucketArgs),
}

#[derive(Subcommand, Debug)]
pub enum ObjectSubcommand {
    /// List objects in a bucket
    #[command(visible_alias = "ls")]
    List(ListObjectsArgs),

    /// Upload a local file
    #[command(visible_alias = "put")]
    Upload(UploadArgs),

    /// Download an object to a local file
    #[command(visible_alias = "get")]
    Download(DownloadArgs),

    /// Delete an object
    #[command(visible_alias = "rm")]
    Delete(DeleteObjectArgs),
}

#[derive(Args, Debug)]
pub struct CreateBucketArgs {
    /// Bucket name
    pub name: String,

    /// Storage location
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Access policy
    #[arg(long, value_enum, default_value_t = AccessArg::Private)]
    pub access: AccessArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessArg {
    Private,
    PublicRead,
}

impl From<AccessArg> for BucketAccess {
    fn from(access: AccessArg) -> Self {
        match access {
            AccessArg::Private => BucketAccess::Private,
            AccessArg::PublicRead => BucketAccess::PublicRead,
        }
    }
}

#[derive(Args, Debug)]
pub struct DeleteBucketArgs {
    /// Bucket name
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct ListObjectsArgs {
    /// Bucket name
    pub bucket: String,

    /// Only list keys starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Group keys by this delimiter, e.g. "/"
    #[arg(long)]
    pub delimiter: Option<String>,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Bucket name
    pub bucket: String,

    /// Local file to upload
    pub file: PathBuf,

    /// Object key. Defaults to the file name
    #[arg(long)]
    pub name: Option<String>,

    /// Content type. Guessed from the extension when omitted
    #[arg(long)]
    pub content_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Bucket name
    pub bucket: String,

    /// Object key
    pub object: String,

    /// Destination file. Defaults to the last segment of the key
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DeleteObjectArgs {
    /// Bucket name
    pub bucket: String,

    /// Object key
    pub object: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl StorageCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = StorageClient::new(global.auth_provider()?);

        match &self.command {
            StorageSubcommand::Bucket(cmd) => run_bucket(&client, cmd, global).await,
            StorageSubcommand::Object(cmd) => run_object(&client, cmd, global).await,
        }
    }
}

async fn run_bucket(
    client: &StorageClient,
    command: &BucketSubcommand,
    global: &GlobalOptions,
) -> Result<()> {
    let writer = global.output();

    match command {
        BucketSubcommand::List => {
            let buckets = client.list_buckets().await?;
            writer.write_list(&buckets, BUCKET_COLUMNS)
        }
        BucketSubcommand::Create(args) => {
            let request = CreateBucketRequest::new(args.name.as_str())
                .location(args.location.as_str())
                .access(args.access.into());
            let bucket = client.create_bucket(&request).await?;
            if !writer.is_json() {
                writer.write_success(&format!("Created bucket {}", args.name));
            }
            writer.write(&bucket)
        }
        BucketSubcommand::Delete(args) => {
            let prompt = format!("Delete bucket {}?", args.name);
            if !confirm_destructive(&prompt, args.yes)? {
                writer.write_info("Cancelled");
                return Ok(());
            }
            client.delete_bucket(&args.name).await?;
            writer.write_outcome(
                &format!("Deleted bucket {}", args.name),
                &json!({ "deleted": true, "bucket": args.name }),
            )
        }
    }
}

async fn run_object(
    client: &StorageClient,
    command: &ObjectSubcommand,
    global: &GlobalOptions,
) -> Result<()> {
    let writer = global.output();

    match command {
        ObjectSubcommand::List(args) => {
            let listing = client
                .list_objects(
                    &args.bucket,
                    args.prefix.as_deref(),
                    args.delimiter.as_deref(),
                )
                .await?;

            match listed_objects(&listing) {
                Some(objects) if !writer.is_json() => writer.write_list(&objects, OBJECT_COLUMNS),
                _ => writer.write(&listing),
            }
        }
        ObjectSubcommand::Upload(args) => {
            if !args.file.is_file() {
                bail!("{} is not a file", args.file.display());
            }

            let object_name = match &args.name {
                Some(name) => name.clone(),
                None => match args.file.file_name() {
                    Some(name) => name.to_string_lossy().into_owned(),
                    None => bail!("Cannot derive an object name from {}", args.file.display()),
                },
            };

            let result = client
                .upload_object(
                    &args.bucket,
                    &object_name,
                    &args.file,
                    args.content_type.as_deref(),
                )
                .await?;

            if writer.is_json() {
                return writer.write(&result);
            }
            let size = std::fs::metadata(&args.file).map(|m| m.len()).unwrap_or(0);
            writer.write_success(&format!(
                "Uploaded {} to {}/{} ({})",
                args.file.display(),
                args.bucket,
                object_name,
                format_size(size)
            ));
            Ok(())
        }
        ObjectSubcommand::Download(args) => {
            let path = client
                .download_object(&args.bucket, &args.object, args.output.as_deref())
                .await?;
            let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

            writer.write_outcome(
                &format!(
                    "Downloaded {}/{} to {} ({})",
                    args.bucket,
                    args.object,
                    path.display(),
                    format_size(size)
                ),
                &json!({
                    "bucket": args.bucket,
                    "object": args.object,
                    "path": path.display().to_string(),
                    "size": size,
                }),
            )
        }
        ObjectSubcommand::Delete(args) => {
            let prompt = format!("Delete {}/{}?", args.bucket, args.object);
            if !confirm_destructive(&prompt, args.yes)? {
                writer.write_info("Cancelled");
                return Ok(());
            }
            client.delete_object(&args.bucket, &args.object).await?;
            writer.write_outcome(
                &format!("Deleted {}/{}", args.bucket, args.object),
                &json!({ "deleted": true, "bucket": args.bucket, "object": args.object }),
            )
        }
    }
}

/// Pulls the object entries out of a listing for table display.
///
/// Gcore wraps objects in an `objects` array. `None` means the listing has
/// some other shape and is printed field by field instead.
fn listed_objects(listing: &Entity) -> Option<Vec<Entity>> {
    match listing.get("objects") {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(|item| item.as_object().cloned())
                .collect(),
        ),
        _ => None,
    }
}
