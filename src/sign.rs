//! Request signing for the CLB v2 API.
//!
//! The canonical string is `{METHOD}{HOST}?{query}` where `query` is the
//! form-encoded, key-sorted parameter set. It is signed with HMAC-SHA1 keyed
//! by the secret key and the digest is base64 encoded.
//!
//! The service documentation calls the method `HmacSHA256`, but the live API
//! accepts the SHA-1 signature produced here.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;

use crate::error::{ClbError, Result};

type HmacSha1 = Hmac<Sha1>;

/// Bytes left as-is by form encoding besides ASCII alphanumerics.
const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

/// Form-encodes a string (`application/x-www-form-urlencoded` flavour).
///
/// `A-Z`, `a-z`, `0-9`, `-`, `.` and `_` are kept, space becomes `+` and every
/// other byte is written as `%XX` (uppercase hex).
pub fn form_encode(s: &str) -> String {
    // '%' is always escaped, so a literal "%20" can only come from a space
    utf8_percent_encode(s, FORM).to_string().replace("%20", "+")
}

/// Joins key-sorted params into `k1=v1&k2=v2&...`, form-encoding both sides.
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Strips the scheme from an endpoint URL.
///
/// `https://lb.api.qcloud.com/v2/index.php` → `lb.api.qcloud.com/v2/index.php`
pub fn signing_host(endpoint: &str) -> &str {
    endpoint
        .split_once("://")
        .map_or(endpoint, |(_, rest)| rest)
}

/// Builds the exact byte sequence the signature is computed over.
pub fn string_to_sign(http_method: &str, host: &str, params: &BTreeMap<String, String>) -> String {
    format!("{}{}?{}", http_method, host, canonical_query(params))
}

/// Computes the CLB v2 signature for a set of request parameters.
///
/// Steps:
/// 1. Sort params by key (BTreeMap provides this, byte-wise).
/// 2. Build the canonical string `{method}{host}?{canonical_query}`.
/// 3. HMAC-SHA1 with key = `secret_key`.
/// 4. Base64 encode the HMAC result.
pub fn sign_request(
    params: &BTreeMap<String, String>,
    secret_key: &str,
    http_method: &str,
    host: &str,
) -> Result<String> {
    let canonical = string_to_sign(http_method, host, params);

    let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())
        .map_err(|e| ClbError::Signature(format!("HMAC key error: {}", e)))?;
    mac.update(canonical.as_bytes());
    let result = mac.finalize().into_bytes();

    Ok(BASE64.encode(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "lb.api.qcloud.com/v2/index.php";

    fn describe_params() -> BTreeMap<String, String> {
        [
            ("Action", "DescribeForwardLBBackends"),
            ("Nonce", "12345"),
            ("Region", "gz"),
            ("SecretId", "AKIDexample"),
            ("Timestamp", "1500000000"),
            ("loadBalancerId", "lb-abc123"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn form_encode_unreserved_chars() {
        assert_eq!(form_encode("abcXYZ019"), "abcXYZ019");
        assert_eq!(form_encode("-._"), "-._");
    }

    #[test]
    fn form_encode_spaces_as_plus() {
        assert_eq!(form_encode("hello world"), "hello+world");
        assert_eq!(form_encode("100%20"), "100%2520");
    }

    #[test]
    fn form_encode_special_chars() {
        assert_eq!(form_encode("/"), "%2F");
        assert_eq!(form_encode("="), "%3D");
        assert_eq!(form_encode("&"), "%26");
        assert_eq!(form_encode("+"), "%2B");
        assert_eq!(form_encode("*"), "%2A");
        assert_eq!(form_encode("~"), "%7E");
    }

    #[test]
    fn form_encode_chinese() {
        assert_eq!(form_encode("中文"), "%E4%B8%AD%E6%96%87");
    }

    #[test]
    fn signing_host_strips_scheme() {
        assert_eq!(signing_host("https://lb.api.qcloud.com/v2/index.php"), HOST);
        assert_eq!(
            signing_host("http://127.0.0.1:1234/v2/index.php"),
            "127.0.0.1:1234/v2/index.php"
        );
        assert_eq!(signing_host(HOST), HOST);
    }

    #[test]
    fn canonical_query_is_sorted_bytewise() {
        let mut params = BTreeMap::new();
        params.insert("loadBalancerId".to_string(), "lb-1".to_string());
        params.insert("backends.1.port".to_string(), "80".to_string());
        params.insert("Timestamp".to_string(), "1".to_string());
        params.insert("Action".to_string(), "X".to_string());
        assert_eq!(
            canonical_query(&params),
            "Action=X&Timestamp=1&backends.1.port=80&loadBalancerId=lb-1"
        );
    }

    #[test]
    fn canonical_query_ignores_insertion_order() {
        let forward = describe_params();
        let reversed: BTreeMap<String, String> = forward
            .iter()
            .rev()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        assert_eq!(canonical_query(&forward), canonical_query(&reversed));
    }

    #[test]
    fn string_to_sign_layout() {
        assert_eq!(
            string_to_sign("GET", HOST, &describe_params()),
            "GETlb.api.qcloud.com/v2/index.php?Action=DescribeForwardLBBackends&Nonce=12345\
             &Region=gz&SecretId=AKIDexample&Timestamp=1500000000&loadBalancerId=lb-abc123"
        );
    }

    #[test]
    fn sign_request_matches_reference_fixture() {
        let sig = sign_request(&describe_params(), "secretKeyExample", "GET", HOST).unwrap();
        assert_eq!(sig, "98ZxdFCGUMuqXtZ+Mi+MhQLc1+4=");
    }

    #[test]
    fn sign_request_with_dotted_keys_and_escapes() {
        let params: BTreeMap<String, String> = [
            ("Action", "ModifyForwardSeventhBackends"),
            ("Nonce", "54321"),
            ("Region", "bj"),
            ("SecretId", "AKIDexample"),
            ("Timestamp", "1500000000"),
            ("loadBalancerId", "lb-abc123"),
            ("listenerId", "lbl-xyz"),
            ("backends.1.instanceId", "ins-001"),
            ("backends.1.port", "8080"),
            ("backends.1.weight", "20"),
            ("domain", "www.example.com"),
            ("url", "/api v1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let sig = sign_request(&params, "secretKeyExample", "GET", HOST).unwrap();
        assert_eq!(sig, "9mTatFAP8kHa2RGo7kJLxBNcc7k=");
    }

    #[test]
    fn sign_request_deterministic() {
        let sig1 = sign_request(&describe_params(), "secret", "GET", HOST).unwrap();
        let sig2 = sign_request(&describe_params(), "secret", "GET", HOST).unwrap();
        assert_eq!(sig1, sig2, "signature must be deterministic");
    }

    #[test]
    fn sign_request_different_methods_differ() {
        let sig = sign_request(&describe_params(), "secretKeyExample", "POST", HOST).unwrap();
        assert_eq!(sig, "kqAkxO2IccfxOrvQnrz5H35BeCM=");
    }

    #[test]
    fn sign_request_different_secrets_differ() {
        let sig1 = sign_request(&describe_params(), "secret1", "GET", HOST).unwrap();
        let sig2 = sign_request(&describe_params(), "secret2", "GET", HOST).unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn sign_request_value_change_differs() {
        let mut params = describe_params();
        let before = sign_request(&params, "secret", "GET", HOST).unwrap();
        params.insert("loadBalancerId".to_string(), "lb-abc124".to_string());
        let after = sign_request(&params, "secret", "GET", HOST).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn sign_request_empty_key_still_signs() {
        let sig = sign_request(&describe_params(), "", "GET", HOST).unwrap();
        assert_eq!(sig, "rbGeW8Noe+n+Kuf17nOpcwtxHMc=");
    }

    #[test]
    fn sign_request_is_base64() {
        let sig = sign_request(&describe_params(), "key", "GET", HOST).unwrap();
        assert_eq!(BASE64.decode(&sig).unwrap().len(), 20);
    }
}
