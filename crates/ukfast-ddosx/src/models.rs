//! DDoSX entities shared by the record client.

use serde::{Deserialize, Serialize};
use ukfast_core::uuid::{RecordUuid, SslUuid};
use ukfast_core::FieldAliasMap;

/// Wire/friendly aliases for [`Record`] fields whose spellings differ.
///
/// Single-word fields (name, type, content, priority) need no entry and pass
/// through unchanged in both directions.
pub const RECORD_ALIASES: FieldAliasMap = FieldAliasMap::new(&[
    ("domain_name", "domainName"),
    ("safedns_record_id", "safednsRecordId"),
    ("ssl_id", "sslId"),
]);

/// A DNS record under DDoSX protection.
///
/// Fields use the friendly (camelCase) convention on the wire-facing serde
/// side; [`RECORD_ALIASES`] translates to and from the API's snake_case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    /// Record identifier, absent on records not yet created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordUuid>,

    /// Domain the record belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    /// Record name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Record type (A, AAAA, CNAME, MX, TXT, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Record content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Linked SafeDNS record, when the record is managed there
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safedns_record_id: Option<u64>,

    /// SSL certificate attached to the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_id: Option<SslUuid>,

    /// Record priority (MX records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}
