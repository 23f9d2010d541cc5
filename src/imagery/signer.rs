use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Errors constructing a [`Signer`].
#[derive(Debug, Clone, PartialEq)]
pub enum SignerError {
    Encoding(String),
    Empty,
}

impl std::fmt::Display for SignerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding(e) => write!(f, "signing secret is not url-safe base64: {}", e),
            Self::Empty => write!(f, "signing secret is empty"),
        }
    }
}

impl std::error::Error for SignerError {}

/// Signs imagery requests with the provider's URL signing secret.
///
/// The signature covers the path and query of the request, is computed as
/// HMAC-SHA1 under the decoded secret, and is appended as the final
/// `signature` query parameter in url-safe base64.
#[derive(Clone)]
pub struct Signer {
    key: Vec<u8>,
}

impl Signer {
    /// Accepts the secret exactly as the provider's console displays it.
    pub fn new(secret: &str) -> Result<Self, SignerError> {
        let key = URL_SAFE
            .decode(secret.trim())
            .map_err(|e| SignerError::Encoding(e.to_string()))?;
        match key.is_empty() {
            true => Err(SignerError::Empty),
            false => Ok(Self { key }),
        }
    }

    /// Signature for a `/path?query` resource.
    pub fn signature(&self, resource: &str) -> String {
        let mut mac = HmacSha1::new_from_slice(&self.key).expect("hmac accepts any key length");
        mac.update(resource.as_bytes());
        URL_SAFE.encode(mac.finalize().into_bytes())
    }

    /// Appends the signature to `origin` + `resource`.
    pub fn sign(&self, origin: &str, resource: &str) -> String {
        format!("{}{}&signature={}", origin, resource, self.signature(resource))
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}
