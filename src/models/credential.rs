//! Tunnel credential models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::null_as_default;
use crate::client::paginated::ListEnvelope;

/// A tunnel credential: an ngrok agent authtoken.
///
/// The `token` is only returned by the create call. Store it then; later
/// reads leave it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// unique tunnel credential resource identifier
    pub id: String,
    /// URI of the tunnel credential API resource
    pub uri: String,
    /// timestamp when the tunnel credential was created, RFC 3339 format
    pub created_at: DateTime<Utc>,
    /// human-readable description of who or what will use the credential
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// arbitrary user-defined machine-readable data of this credential
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: String,
    /// the credential's authtoken, only set on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// ACL rules restricting what the token may bind, e.g. `bind:*.example.com`
    #[serde(default, deserialize_with = "null_as_default")]
    pub acl: Vec<String>,
}

/// One page of tunnel credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialList {
    /// the list of all tunnel credentials on this account
    pub credentials: Vec<Credential>,
    /// URI of the tunnel credential list API resource
    pub uri: String,
    /// URI of the next page, or null if there is no next page
    #[serde(default)]
    pub next_page_uri: Option<String>,
}

impl ListEnvelope for CredentialList {
    type Item = Credential;

    fn items(&self) -> &[Credential] {
        &self.credentials
    }

    fn into_items(self) -> Vec<Credential> {
        self.credentials
    }

    fn next_page_uri(&self) -> Option<&str> {
        self.next_page_uri.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_deserialize_without_token() {
        let json = r#"{
            "id": "cr_2Fdo4vZ8kQdQ9w",
            "uri": "https://api.ngrok.com/credentials/cr_2Fdo4vZ8kQdQ9w",
            "created_at": "2022-03-24T19:48:07Z",
            "description": "for ssh access",
            "metadata": "",
            "acl": ["bind:*.example.com"]
        }"#;

        let credential: Credential = serde_json::from_str(json).unwrap();
        assert_eq!(credential.id, "cr_2Fdo4vZ8kQdQ9w");
        assert!(credential.token.is_none());
        assert_eq!(credential.acl, vec!["bind:*.example.com"]);
    }

    #[test]
    fn test_credential_null_fields_read_as_empty() {
        let json = r#"{
            "id": "cr_2Fdo4vZ8kQdQ9w",
            "uri": "https://api.ngrok.com/credentials/cr_2Fdo4vZ8kQdQ9w",
            "created_at": "2022-03-24T19:48:07Z",
            "description": null,
            "metadata": null,
            "token": null,
            "acl": null
        }"#;

        let credential: Credential = serde_json::from_str(json).unwrap();
        assert_eq!(credential.description, "");
        assert_eq!(credential.metadata, "");
        assert!(credential.acl.is_empty());
    }

    #[test]
    fn test_credential_list_envelope() {
        let json = r#"{
            "credentials": [],
            "uri": "https://api.ngrok.com/credentials",
            "next_page_uri": null
        }"#;

        let list: CredentialList = serde_json::from_str(json).unwrap();
        assert!(list.items().is_empty());
        assert!(list.next_page_uri().is_none());
    }
}
