// file: src/cli/commands.rs
// version: 2.0.0
// guid: g7h8i9j0-k1l2-3456-7890-123456ghijkl

//! Command implementations for the CLI

use crate::{
    config::{
        identity_json_schema, loader::ConfigLoader, validate_identity, Answers,
        AutoinstallDocument,
    },
    controllers::{identity::IDENTITY_SECTION, Controller},
    error::AutoInstallError,
    session::InstallSession,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Validate the identity section of an autoinstall document
pub async fn validate_command(config_path: &Path) -> Result<()> {
    let doc = load_document(config_path)?;

    match doc.section(IDENTITY_SECTION.wire_key) {
        Some(section) => match validate_identity(section) {
            Ok(identity) => {
                println!(
                    "identity section is valid (user '{}', host '{}')",
                    identity.username, identity.hostname
                );
                Ok(())
            }
            Err(AutoInstallError::SchemaValidation { violations, .. }) => {
                for violation in &violations {
                    println!("  - {}", violation);
                }
                anyhow::bail!(
                    "identity section has {} schema violation(s)",
                    violations.len()
                )
            }
            Err(e) => Err(e.into()),
        },
        None if doc.has_user_data() => {
            println!("no identity section; users are provisioned through user-data");
            Ok(())
        }
        None => anyhow::bail!("no identity section and no user-data in {}", config_path.display()),
    }
}

/// Load and apply identity data, then emit the regenerated document
pub async fn run_command(
    config_path: Option<PathBuf>,
    answers_path: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let doc = config_path.as_deref().map(load_document).transpose()?;
    let answers = match answers_path {
        Some(path) => ConfigLoader::new()
            .load_answers(&path)
            .with_context(|| format!("Failed to load answers from {}", path.display()))?,
        None => Answers::default(),
    };

    let has_document = doc.is_some();
    let mut session = InstallSession::new(doc, answers);
    info!("Starting identity session {}", session.session_id());

    if has_document {
        session.load().context("Failed to load autoinstall data")?;
        let pending = session
            .apply()
            .await
            .context("Failed to apply autoinstall config")?;
        if !pending.is_empty() {
            info!("Interactive sections: {}", pending.join(", "));
        }
    }

    let completed = session.run_answers().context("Failed to apply answers")?;
    if !completed.is_empty() {
        info!("Completed from answers: {}", completed.join(", "));
    }

    for controller in session.controllers() {
        if !controller.is_configured() {
            warn!(
                "Section '{}' still requires interactive input",
                controller.section_key().section_name
            );
        }
    }

    let rendered = serde_yaml::to_string(&session.make_autoinstall()?)?;
    match output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote autoinstall document to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Report which steps must be confirmed interactively
pub async fn interactive_command(config_path: Option<PathBuf>) -> Result<()> {
    let doc = config_path.as_deref().map(load_document).transpose()?;
    let session = InstallSession::new(doc, Answers::default());

    for controller in session.controllers() {
        let mode = if controller.interactive() {
            "interactive"
        } else {
            "automatic"
        };
        println!("{}: {}", controller.section_key().section_name, mode);
    }
    Ok(())
}

/// Print the identity section JSON schema
pub async fn schema_command() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&identity_json_schema())?);
    Ok(())
}

fn load_document(path: &Path) -> Result<AutoinstallDocument> {
    ConfigLoader::new()
        .load_autoinstall(path)
        .with_context(|| format!("Failed to load autoinstall document {}", path.display()))
}
