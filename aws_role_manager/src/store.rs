use crate::json::AssumeRoleOutput;
use anyhow::{Context, Result};
use file_manager::role_profiles::{ProfileStore, RoleProfile};
use std::io::Read;
use tracing::info;

pub const DEFAULT_PROFILE: &str = "default";

/// Reads one credential JSON document from `reader` and persists it under
/// the resolved profile name. Nothing is written unless parsing succeeds.
///
/// Profile name resolution: the explicit override wins; otherwise a payload
/// carrying an assumed-role ARN is stored as `<account>-<role>-<session>`;
/// otherwise the name falls back to `default`.
pub fn ingest<R: Read>(
    mut reader: R,
    store: &ProfileStore,
    profile_override: Option<&str>,
) -> Result<String> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("failed to read credential JSON from stdin")?;

    let output = AssumeRoleOutput::parse(&raw)?;

    let profile_name = match profile_override {
        Some(name) => name.to_owned(),
        None => output
            .assumed_role_user
            .as_ref()
            .and_then(|user| profile_name_from_arn(&user.arn))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_owned()),
    };

    let credentials = output.credentials;
    let profile = RoleProfile {
        aws_access_key_id: credentials.access_key_id,
        aws_secret_access_key: credentials.secret_access_key,
        aws_session_token: credentials.session_token,
        aws_expiration: credentials.expiration,
    };

    store.upsert(&profile_name, profile)?;

    info!("Credentials stored under profile: {}", profile_name);

    Ok(profile_name)
}

/// Derives `<account>-<role>-<session>` from an assumed-role ARN such as
/// `arn:aws:sts::123456789012:assumed-role/Admin/session`.
fn profile_name_from_arn(arn: &str) -> Option<String> {
    let account = arn.split(':').nth(4)?;
    let mut resource = arn.split('/');
    resource.next();
    let role = resource.next()?;
    let session = resource.next()?;

    if account.is_empty() || role.is_empty() || session.is_empty() {
        return None;
    }

    Some(format!("{}-{}-{}", account, role, session))
}
