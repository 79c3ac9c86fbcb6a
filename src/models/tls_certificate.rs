//! TLS certificate models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::null_as_default;
use crate::client::paginated::ListEnvelope;

/// A TLS certificate uploaded to ngrok for terminating TLS on your domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TlsCertificate {
    /// unique identifier for this TLS certificate
    pub id: String,
    /// URI of the TLS certificate API resource
    pub uri: String,
    /// timestamp when the TLS certificate was created, RFC 3339 format
    pub created_at: DateTime<Utc>,
    /// human-readable description of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// arbitrary user-defined machine-readable data of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: String,
    /// chain of PEM-encoded certificates, leaf first
    pub certificate_pem: String,
    /// subject common name from the leaf of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject_common_name: String,
    /// subject alternative names from the leaf of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject_alternative_names: TlsCertificateSans,
    /// timestamp (in RFC 3339 format) when this TLS certificate was issued
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
    /// timestamp when this TLS certificate becomes valid, RFC 3339 format
    pub not_before: DateTime<Utc>,
    /// timestamp when this TLS certificate becomes invalid, RFC 3339 format
    pub not_after: DateTime<Utc>,
    /// set of actions the private key may be used for
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_usages: Vec<String>,
    /// extended set of actions the private key may be used for
    #[serde(default, deserialize_with = "null_as_default")]
    pub extended_key_usages: Vec<String>,
    /// type of the private key: `rsa`, `ecdsa` or `ed25519`
    #[serde(default, deserialize_with = "null_as_default")]
    pub private_key_type: String,
    /// issuer common name from the leaf of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuer_common_name: String,
    /// serial number of the leaf of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub serial_number: String,
    /// subject organization from the leaf of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject_organization: String,
    /// subject organizational unit from the leaf of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject_organizational_unit: String,
    /// subject locality from the leaf of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject_locality: String,
    /// subject province from the leaf of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject_province: String,
    /// subject country from the leaf of this TLS certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject_country: String,
}

/// Subject alternative names of a certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsCertificateSans {
    /// set of additional domains (including wildcards) this TLS certificate is valid for
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns_names: Vec<String>,
    /// set of IP addresses this TLS certificate is also valid for
    #[serde(default, deserialize_with = "null_as_default")]
    pub ips: Vec<String>,
}

/// One page of TLS certificates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TlsCertificateList {
    /// the list of all TLS certificates on this account
    pub tls_certificates: Vec<TlsCertificate>,
    /// URI of the TLS certificates list API resource
    pub uri: String,
    /// URI of the next page, or null if there is no next page
    #[serde(default)]
    pub next_page_uri: Option<String>,
}

impl ListEnvelope for TlsCertificateList {
    type Item = TlsCertificate;

    fn items(&self) -> &[TlsCertificate] {
        &self.tls_certificates
    }

    fn into_items(self) -> Vec<TlsCertificate> {
        self.tls_certificates
    }

    fn next_page_uri(&self) -> Option<&str> {
        self.next_page_uri.as_deref()
    }
}
