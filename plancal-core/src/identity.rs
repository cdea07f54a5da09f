//! Owner identity derived from session attributes.
//!
//! The identity partitions entries in the store. It is a filter, not an
//! access-control boundary: both inputs are client-supplied values.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const DEFAULT_CLIENT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_CLIENT_LABEL: &str = "streamlit";

/// Session-scoped attributes hashed into the owner identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAttributes {
    pub address: String,
    pub label: String,
}

impl Default for SessionAttributes {
    fn default() -> Self {
        SessionAttributes {
            address: DEFAULT_CLIENT_ADDRESS.to_string(),
            label: DEFAULT_CLIENT_LABEL.to_string(),
        }
    }
}

/// SHA-256 hex digest of `"{address}_{label}"`.
pub fn resolve_identity(session: &SessionAttributes) -> String {
    let hash = Sha256::digest(format!("{}_{}", session.address, session.label).as_bytes());
    format!("{hash:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_sha256_of_joined_attributes() {
        let session = SessionAttributes {
            address: String::new(),
            label: String::new(),
        };
        // sha256("_")
        assert_eq!(
            resolve_identity(&session),
            "d2e2adf7177b7a8afddbc12d1634cf23ea1a71020f6a1308070a16400fb68fde"
        );
    }

    #[test]
    fn identity_is_deterministic() {
        let session = SessionAttributes::default();
        let id = resolve_identity(&session);
        assert_eq!(id, resolve_identity(&session.clone()));
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn different_attributes_give_different_identities() {
        let a = SessionAttributes::default();
        let b = SessionAttributes {
            address: "10.0.0.2".into(),
            ..SessionAttributes::default()
        };
        assert_ne!(resolve_identity(&a), resolve_identity(&b));
    }
}
