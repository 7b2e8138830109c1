//
//  gcore-cli
//  cli/ssl.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! SSL certificate commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde_json::json;

use crate::api::ssl::{RequestCertificateRequest, UploadCertificateRequest, ValidationMethod};
use crate::api::SslClient;
use crate::interactive::confirm_destructive;

use super::wait::{wait_for_task, WaitArgs};
use super::GlobalOptions;

const CERTIFICATE_COLUMNS: &[(&str, &str)] = &[
    ("ID", "id"),
    ("NAME", "name"),
    ("DOMAINS", "domains"),
    ("STATUS", "status"),
    ("EXPIRES", "expires_at"),
];

/// SSL certificates
#[derive(Args, Debug)]
pub struct SslCommand {
    #[command(subcommand)]
    pub command: SslSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SslSubcommand {
    /// List certificates
    #[command(visible_alias = "ls")]
    List,

    /// Show a certificate
    Get(CertIdArgs),

    /// Upload a custom certificate and private key
    Upload(UploadArgs),

    /// Request a Gcore-managed certificate
    Request(RequestArgs),

    /// Show domain validation progress of a requested certificate
    Validation(ValidationArgs),

    /// Delete a certificate
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct CertIdArgs {
    /// Certificate ID
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// PEM certificate file
    #[arg(long = "cert", value_name = "FILE")]
    pub certificate: PathBuf,

    /// PEM private key file
    #[arg(long = "key", value_name = "FILE")]
    pub private_key: PathBuf,

    /// PEM intermediate chain file
    #[arg(long, value_name = "FILE")]
    pub chain: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Domains to cover
    #[arg(required = true, num_args = 1..)]
    pub domains: Vec<String>,

    /// How domain ownership is proven
    #[arg(long = "validation", value_enum, default_value_t = ValidationArg::Dns)]
    pub validation_method: ValidationArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationArg {
    Dns,
    Http,
}

impl From<ValidationArg> for ValidationMethod {
    fn from(method: ValidationArg) -> Self {
        match method {
            ValidationArg::Dns => ValidationMethod::Dns,
            ValidationArg::Http => ValidationMethod::Http,
        }
    }
}

#[derive(Args, Debug)]
pub struct ValidationArgs {
    /// Certificate ID
    pub id: u64,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Certificate ID
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl SslCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = SslClient::new(global.auth_provider()?);
        let writer = global.output();

        match &self.command {
            SslSubcommand::List => {
                let certificates = client.list_certificates().await?;
                writer.write_list(&certificates, CERTIFICATE_COLUMNS)
            }
            SslSubcommand::Get(args) => {
                let certificate = client.get_certificate(args.id).await?;
                writer.write(&certificate)
            }
            SslSubcommand::Upload(args) => {
                let request = UploadCertificateRequest {
                    name: args.name.clone(),
                    certificate: read_pem(&args.certificate)?,
                    private_key: read_pem(&args.private_key)?,
                    chain: args.chain.as_deref().map(read_pem).transpose()?,
                };

                let certificate = client.upload_certificate(&request).await?;
                if !writer.is_json() {
                    writer.write_success(&format!("Uploaded certificate {}", args.name));
                }
                writer.write(&certificate)
            }
            SslSubcommand::Request(args) => {
                let mut request = RequestCertificateRequest::new(args.domains.clone());
                request.validation_method = args.validation_method.into();

                let certificate = client.request_certificate(&request).await?;
                if !writer.is_json() {
                    writer.write_success(&format!(
                        "Requested certificate for {}",
                        args.domains.join(", ")
                    ));
                }
                writer.write(&certificate)
            }
            SslSubcommand::Validation(args) => {
                let status = if args.wait.wait {
                    let id = args.id;
                    let client = &client;
                    wait_for_task("Validation", &args.wait, || client.get_validation_status(id))
                        .await?
                } else {
                    client.get_validation_status(args.id).await?
                };
                writer.write(&status)
            }
            SslSubcommand::Delete(args) => {
                let prompt = format!("Delete certificate {}?", args.id);
                if !confirm_destructive(&prompt, args.yes)? {
                    writer.write_info("Cancelled");
                    return Ok(());
                }
                client.delete_certificate(args.id).await?;
                writer.write_outcome(
                    &format!("Deleted certificate {}", args.id),
                    &json!({ "deleted": true, "id": args.id }),
                )
            }
        }
    }
}

fn read_pem(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_pem_missing_file_names_path() {
        let err = read_pem(Path::new("/nonexistent/cert.pem")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cert.pem"));
    }

    #[test]
    fn test_read_pem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cert.pem");
        std::fs::write(&path, "-----BEGIN CERTIFICATE-----\n").unwrap();
        assert!(read_pem(&path).unwrap().starts_with("-----BEGIN"));
    }

    #[test]
    fn test_validation_arg_values() {
        let method = ValidationArg::from_str("http", false).unwrap();
        assert_eq!(ValidationMethod::from(method), ValidationMethod::Http);
        assert_eq!(ValidationMethod::from(ValidationArg::Dns), ValidationMethod::Dns);
    }
}
