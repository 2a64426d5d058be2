use super::address::Address;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Deserializer, de};
use std::collections::BTreeMap;

/// A Flow account as returned by the access node. Never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub address: Address,
    /// Balance in the smallest unit (10^-8 FLOW).
    pub balance: Option<u64>,
    /// All contract sources joined in name order, blank line between each.
    pub code: Vec<u8>,
    pub contracts: Vec<String>,
    pub keys: Vec<AccountKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountKey {
    pub index: u64,
    pub weight: u64,
    pub sign_algo: String,
    pub hash_algo: String,
    pub public_key: String,
}

#[derive(Debug)]
pub enum AccountDecodeError {
    Address(super::address::AddressError),
    Contract { name: String, source: base64::DecodeError },
}

impl std::fmt::Display for AccountDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountDecodeError::Address(err) => write!(f, "invalid account address: {err}"),
            AccountDecodeError::Contract { name, source } => {
                write!(f, "contract {name} is not valid base64: {source}")
            }
        }
    }
}

impl std::error::Error for AccountDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AccountDecodeError::Address(err) => Some(err),
            AccountDecodeError::Contract { source, .. } => Some(source),
        }
    }
}

/// Wire shape of `GET /v1/accounts/{address}?expand=contracts,keys`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawAccount {
    address: String,
    #[serde(default, deserialize_with = "optional_u64")]
    balance: Option<u64>,
    #[serde(default)]
    keys: Vec<RawKey>,
    #[serde(default)]
    contracts: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawKey {
    #[serde(deserialize_with = "u64_from_any")]
    index: u64,
    public_key: String,
    signing_algorithm: String,
    hashing_algorithm: String,
    #[serde(deserialize_with = "u64_from_any")]
    weight: u64,
}

impl TryFrom<RawAccount> for Account {
    type Error = AccountDecodeError;

    fn try_from(raw: RawAccount) -> Result<Self, Self::Error> {
        let address = Address::parse(&raw.address).map_err(AccountDecodeError::Address)?;

        let mut code = Vec::new();
        let mut contracts = Vec::with_capacity(raw.contracts.len());
        for (name, encoded) in raw.contracts {
            let source = STANDARD
                .decode(encoded.trim())
                .map_err(|source| AccountDecodeError::Contract {
                    name: name.clone(),
                    source,
                })?;
            if !code.is_empty() {
                code.extend_from_slice(b"\n\n");
            }
            code.extend_from_slice(&source);
            contracts.push(name);
        }

        let keys = raw
            .keys
            .into_iter()
            .map(|key| AccountKey {
                index: key.index,
                weight: key.weight,
                sign_algo: key.signing_algorithm,
                hash_algo: key.hashing_algorithm,
                public_key: key.public_key,
            })
            .collect();

        Ok(Account {
            address,
            balance: raw.balance,
            code,
            contracts,
            keys,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

impl NumberOrString {
    fn into_u64<E: de::Error>(self) -> Result<u64, E> {
        match self {
            NumberOrString::Number(value) => Ok(value),
            NumberOrString::String(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected unsigned integer, got {text:?}"))),
        }
    }
}

// The REST API encodes uint64 as decimal strings.
fn u64_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_u64()
}

fn optional_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_u64)
        .transpose()
}
