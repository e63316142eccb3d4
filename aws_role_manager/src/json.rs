use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The JSON document printed by `aws sts assume-role`. Unknown fields such
/// as `ResponseMetadata` are ignored.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct AssumeRoleOutput {
    pub credentials: StsCredentials,
    pub assumed_role_user: Option<AssumedRoleUser>,
}

/// The `Credentials` object inside the STS output, also accepted bare.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct StsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub expiration: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct AssumedRoleUser {
    pub arn: String,
}

impl AssumeRoleOutput {
    /// Decodes one credential payload, either the full assume-role output or
    /// a bare `Credentials` object.
    pub fn parse(raw: &str) -> Result<Self> {
        match serde_json::from_str::<AssumeRoleOutput>(raw) {
            Ok(output) => Ok(output),
            Err(full_err) => match serde_json::from_str::<StsCredentials>(raw) {
                Ok(credentials) => Ok(Self {
                    credentials,
                    assumed_role_user: None,
                }),
                Err(_) => Err(anyhow!("malformed credential input: {}", full_err)),
            },
        }
    }
}
