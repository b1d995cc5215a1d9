use std::env;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Token/account variable pairs, one per account, in report order.
pub const ACCOUNT_VARIABLES: [(&str, &str); 2] = [
    ("ACCESS_TOKEN", "ACCOUNT_ID"),
    ("ACCESS_TOKEN2", "ACCOUNT_ID2"),
];

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Missing credential {0}")]
    Missing(&'static str),
    #[error("failed to load env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

#[derive(Clone)]
pub struct AccountCredentials {
    pub access_token: String,
    pub account_id: String,
}

pub struct Credentials {
    pub accounts: Vec<AccountCredentials>,
}

impl Credentials {
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<String, CredentialError> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(CredentialError::Missing(name)),
            }
        };

        let mut accounts = Vec::with_capacity(ACCOUNT_VARIABLES.len());
        for (token_name, account_name) in ACCOUNT_VARIABLES {
            let access_token = require(token_name)?;
            let account_id = require(account_name)?;
            accounts.push(AccountCredentials {
                access_token,
                account_id,
            });
        }

        Ok(Self { accounts })
    }
}

/// Loads `path`, or `./.env` when no path is given. Only an explicit file is required to exist.
pub fn load_env_file(path: Option<&Path>) -> Result<(), CredentialError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|err| CredentialError::EnvFile {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
            debug!(path = %path.display(), "loaded env file");
        }
        None => match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded env file"),
            Err(err) => debug!(error = %err, "no .env file loaded"),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    #[test]
    fn reads_both_accounts_in_order() {
        let lookup = lookup_from(&[
            ("ACCESS_TOKEN", "token-one"),
            ("ACCOUNT_ID", "111"),
            ("ACCESS_TOKEN2", "token-two"),
            ("ACCOUNT_ID2", "222"),
        ]);

        let credentials = Credentials::from_lookup(lookup).unwrap();
        assert_eq!(credentials.accounts.len(), 2);
        assert_eq!(credentials.accounts[0].access_token, "token-one");
        assert_eq!(credentials.accounts[0].account_id, "111");
        assert_eq!(credentials.accounts[1].access_token, "token-two");
        assert_eq!(credentials.accounts[1].account_id, "222");
    }

    #[test]
    fn empty_value_names_the_missing_variable() {
        let lookup = lookup_from(&[
            ("ACCESS_TOKEN", "token-one"),
            ("ACCOUNT_ID", "111"),
            ("ACCESS_TOKEN2", ""),
            ("ACCOUNT_ID2", "222"),
        ]);

        let err = Credentials::from_lookup(lookup).err().unwrap();
        assert!(matches!(err, CredentialError::Missing("ACCESS_TOKEN2")));
        assert_eq!(err.to_string(), "Missing credential ACCESS_TOKEN2");
    }

    #[test]
    fn unset_and_blank_values_are_missing() {
        let unset = lookup_from(&[("ACCESS_TOKEN", "token-one")]);
        let err = Credentials::from_lookup(unset).err().unwrap();
        assert!(matches!(err, CredentialError::Missing("ACCOUNT_ID")));

        let blank = lookup_from(&[("ACCESS_TOKEN", "   ")]);
        let err = Credentials::from_lookup(blank).err().unwrap();
        assert!(matches!(err, CredentialError::Missing("ACCESS_TOKEN")));
    }

    #[test]
    fn present_values_are_kept_verbatim() {
        let lookup = lookup_from(&[
            ("ACCESS_TOKEN", " token-one "),
            ("ACCOUNT_ID", "111"),
            ("ACCESS_TOKEN2", "token-two\t"),
            ("ACCOUNT_ID2", "222"),
        ]);

        let credentials = Credentials::from_lookup(lookup).unwrap();
        assert_eq!(credentials.accounts[0].access_token, " token-one ");
        assert_eq!(credentials.accounts[1].access_token, "token-two\t");
    }

    #[test]
    fn explicit_missing_env_file_is_an_error() {
        let path = Path::new("/nonexistent/harvest-hours/.env");
        let err = load_env_file(Some(path)).unwrap_err();
        assert!(matches!(err, CredentialError::EnvFile { .. }));
    }
}
