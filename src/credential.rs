/// Tencent Cloud API credential.
///
/// Only `secret_id` ever leaves the process; `secret_key` is used solely as
/// the HMAC key. The `Debug` implementation redacts `secret_key` to prevent
/// accidental leakage in logs.
///
/// No validation happens here. An empty or wrong key still produces a
/// signature, which the service will reject.
#[derive(Clone, Default)]
pub struct Credential {
    pub secret_id: String,
    pub secret_key: String,
}

impl Credential {
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"****")
            .finish()
    }
}
