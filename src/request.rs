//! Request building and signing logic for the CLB v2 API.

use std::collections::BTreeMap;

use rand::Rng;

use crate::action::Action;
use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::error::Result;
use crate::sign::{canonical_query, form_encode, sign_request, signing_host};

/// Every request is a signed GET.
pub(crate) const HTTP_METHOD: &str = "GET";

const NONCE_MIN: u32 = 10_000;
const NONCE_MAX: u32 = 99_999;

/// Generates a random nonce in `[10000, 99999]`.
///
/// Uses the thread-local RNG, so concurrent callers never share state.
pub(crate) fn generate_nonce() -> u32 {
    rand::rng().random_range(NONCE_MIN..=NONCE_MAX)
}

/// Current Unix time in seconds.
pub(crate) fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Builds the signed query string for a CLB v2 call.
///
/// This function:
/// 1. Adds the public parameters (Action, Region, Timestamp, Nonce, SecretId)
/// 2. Merges the action-specific parameters
/// 3. Signs the sorted set with HMAC-SHA1
/// 4. Returns the form-encoded query with `Signature` appended last
pub(crate) fn build_signed_query(
    action: Action,
    params: &[(&str, String)],
    credential: &Credential,
    config: &ClientConfig,
    timestamp: i64,
    nonce: u32,
) -> Result<String> {
    let mut all_params = BTreeMap::new();

    all_params.insert("Action".to_string(), action.as_str().to_string());
    all_params.insert("Region".to_string(), config.region.clone());
    all_params.insert("Timestamp".to_string(), timestamp.to_string());
    all_params.insert("Nonce".to_string(), nonce.to_string());
    all_params.insert("SecretId".to_string(), credential.secret_id.clone());

    for (key, value) in params {
        all_params.insert(key.to_string(), value.clone());
    }

    let signature = sign_request(
        &all_params,
        &credential.secret_key,
        HTTP_METHOD,
        signing_host(&config.endpoint),
    )?;

    // Signature is not part of the signed set and goes last
    Ok(format!(
        "{}&Signature={}",
        canonical_query(&all_params),
        form_encode(&signature)
    ))
}

/// Builds the full request URL with a fresh timestamp and nonce.
pub(crate) fn build_request_url(
    action: Action,
    params: &[(&str, String)],
    credential: &Credential,
    config: &ClientConfig,
) -> Result<String> {
    let query = build_signed_query(
        action,
        params,
        credential,
        config,
        current_timestamp(),
        generate_nonce(),
    )?;
    Ok(format!("{}?{}", config.endpoint, query))
}
