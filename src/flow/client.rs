use super::{
    account::{Account, AccountDecodeError, RawAccount},
    address::Address,
};
use reqwest::StatusCode;
use std::{fmt, time::Duration};

const USER_AGENT: &str = concat!("flow-account-tui/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub enum FetchError {
    NotFound(Address),
    Http(reqwest::Error),
    Parse(serde_json::Error),
    Decode(AccountDecodeError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound(address) => write!(f, "account {address} not found"),
            FetchError::Http(err) => write!(f, "network error: {err}"),
            FetchError::Parse(err) => write!(f, "response parse error: {err}"),
            FetchError::Decode(err) => write!(f, "account decode error: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(err) => Some(err),
            FetchError::Parse(err) => Some(err),
            FetchError::Decode(err) => Some(err),
            FetchError::NotFound(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        FetchError::Http(value)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        FetchError::Parse(value)
    }
}

impl From<AccountDecodeError> for FetchError {
    fn from(value: AccountDecodeError) -> Self {
        FetchError::Decode(value)
    }
}

/// Read-only client for the Flow REST Access API.
#[derive(Debug, Clone)]
pub struct AccessClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccessClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn account_url(&self, address: &Address) -> String {
        format!("{}/v1/accounts/{}", self.base_url, address.as_hex())
    }

    pub async fn fetch_account(&self, address: &Address) -> Result<Account, FetchError> {
        let url = self.account_url(address);
        tracing::debug!(%url, "requesting account");

        let response = self
            .http
            .get(&url)
            .query(&[("expand", "contracts,keys")])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(address.clone()));
        }
        let body = response.error_for_status()?.bytes().await?;
        parse_account(&body)
    }
}

pub(crate) fn parse_account(body: &[u8]) -> Result<Account, FetchError> {
    let raw: RawAccount = serde_json::from_slice(body)?;
    Ok(Account::try_from(raw)?)
}
