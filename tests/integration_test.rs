// file: tests/integration_test.rs
// version: 2.0.0
// guid: z6a7b8c9-d0e1-2345-6789-012345zabcde

//! Integration tests for identity autoinstall

use autoinstall_identity::{
    config::{loader::ConfigLoader, Answers},
    controllers::{Controller, FlowEvent},
    logging::Credential,
    models::{HostnameData, IdentityData},
    AutoInstallError, InstallSession, Result,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_autoinstall_document_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("autoinstall.yaml");
    tokio::fs::write(
        &config_path,
        r#"
version: 1
identity:
  username: bob
  hostname: h1
  password: p
"#,
    )
    .await?;

    let doc = ConfigLoader::new().load_autoinstall(&config_path)?;
    let mut session = InstallSession::new(Some(doc), Answers::default());

    assert!(!session.identity().interactive());
    assert!(!session.hostname().interactive());

    session.load()?;
    assert_eq!(session.identity().model().user().unwrap().realname(), "bob");

    let pending = session.apply().await?;
    assert!(pending.is_empty());
    assert!(session.identity().is_configured());
    assert!(session.hostname().is_configured());

    Ok(())
}

#[tokio::test]
async fn test_schema_violation_surfaces_before_apply() -> Result<()> {
    let doc = ConfigLoader::new().parse_autoinstall(
        "identity:\n  username: bob\n  password: p\n  groups: wheel\n",
    )?;
    let mut session = InstallSession::new(Some(doc), Answers::default());

    let err = session.load().unwrap_err();
    assert!(matches!(err, AutoInstallError::SchemaValidation { .. }));
    assert!(session.identity().model().user().is_none());

    Ok(())
}

#[tokio::test]
async fn test_regenerated_document_reloads() -> Result<()> {
    let loader = ConfigLoader::new();
    let doc = loader.parse_autoinstall(
        "identity:\n  realname: Bob B\n  username: bob\n  hostname: h1\n  password: $6$x$y\n",
    )?;
    let mut session = InstallSession::new(Some(doc), Answers::default());
    session.load()?;
    session.apply().await?;

    let yaml = serde_yaml::to_string(&session.make_autoinstall()?)?;
    let reloaded = loader.parse_autoinstall(&yaml)?;
    let mut replay = InstallSession::new(Some(reloaded), Answers::default());
    replay.load()?;

    let user = replay.identity().model().user().unwrap();
    assert_eq!(user.realname(), "Bob B");
    assert_eq!(user.password().expose(), "$6$x$y");
    assert_eq!(replay.hostname().model().hostname(), Some("h1"));

    Ok(())
}

#[test]
fn test_interactive_front_end_flow() -> Result<()> {
    let mut session = InstallSession::new(None, Answers::default());
    assert!(session.identity().interactive());
    assert_eq!(session.identity().get().username, "");

    session.identity_mut().post(IdentityData {
        realname: String::new(),
        username: "al".to_string(),
        hostname: "x".to_string(),
        crypted_password: Credential::new("H"),
    })?;
    session.hostname_mut().post(HostnameData {
        hostname: "x".to_string(),
    })?;
    session.hostname().cancel();

    assert_eq!(session.identity().get().realname, "al");
    assert!(session.hostname().is_configured());
    assert_eq!(
        session.drain_events(),
        vec![
            FlowEvent::Configured("identity"),
            FlowEvent::Next("identity"),
            FlowEvent::Configured("identityhostname"),
            FlowEvent::Next("identityhostname"),
            FlowEvent::Back("identityhostname"),
        ]
    );

    Ok(())
}
