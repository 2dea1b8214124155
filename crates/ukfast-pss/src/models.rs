//! PSS entities and their hydration.
//!
//! [`Request`] hydration mixes the generic alias-map rename with manual
//! per-field steps for nested sub-entities and conditional fields. Both
//! strategies coexist deliberately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ukfast_core::alias;
use ukfast_core::error::{Error, Result};
use ukfast_core::FieldAliasMap;

/// Wire/friendly aliases for the flat [`Request`] fields.
pub const REQUEST_ALIASES: FieldAliasMap = FieldAliasMap::new(&[
    ("created_at", "createdAt"),
    ("request_sms", "requestSms"),
    ("customer_reference", "customerReference"),
    ("system_reference", "systemReference"),
    ("unread_replies", "unreadReplies"),
    ("contact_method", "contactMethod"),
]);

/// Wire/friendly aliases applied to outbound request payloads.
///
/// Narrower than [`REQUEST_ALIASES`] on purpose: only the fields the API
/// accepts on create/update are renamed, matching what the service expects.
pub const REQUEST_PAYLOAD_ALIASES: FieldAliasMap = FieldAliasMap::new(&[
    ("request_sms", "requestSms"),
    ("customer_reference", "customerReference"),
]);

/// Wire/friendly aliases for [`Feedback`] fields.
pub const FEEDBACK_ALIASES: FieldAliasMap = FieldAliasMap::new(&[
    ("speed_resolved", "speedResolved"),
    ("nps_score", "npsScore"),
    ("thirdparty_consent", "thirdPartyConsent"),
    ("contact_id", "contactId"),
]);

/// The person who raised a support request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    /// Contact identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact type (client, staff, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub author_type: Option<String>,
}

/// The product a support request relates to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Product identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Product name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Product type (server, domain, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
}

/// A PSS support request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Request {
    /// Ticket identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The person who raised the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    /// Product the request relates to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,

    /// Request type (technical, billing, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,

    /// Whether the request is handled over the secure channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    /// Subject line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// When the request was raised
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Priority (Normal, High, Critical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Whether the request is archived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Current status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether SMS updates were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_sms: Option<bool>,

    /// Customer's own reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,

    /// UKFast internal reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_reference: Option<String>,

    /// Number of unread replies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_replies: Option<u32>,

    /// When the last reply was posted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_replied_at: Option<DateTime<Utc>>,

    /// Preferred contact method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,

    /// Additional addresses copied on updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
}

/// Feedback left against a resolved support request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Feedback {
    /// Feedback identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Contact the feedback was left by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,

    /// Overall score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,

    /// Free-text comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Whether the request was resolved quickly enough
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_resolved: Option<bool>,

    /// Quality score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,

    /// Net promoter score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nps_score: Option<u8>,

    /// Consent to share feedback with third parties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_consent: Option<bool>,
}

impl Request {
    /// Hydrate a request from its wire shape.
    ///
    /// The flat fields go through [`REQUEST_ALIASES`]; author, product, the
    /// last-reply timestamp and the CC list are handled manually:
    /// the timestamp is parsed only when present, and the CC list is set
    /// only when non-empty.
    pub fn from_wire(item: &Value) -> Result<Self> {
        let mut flat = item.clone();
        if let Some(object) = flat.as_object_mut() {
            object.remove("author");
            object.remove("product");
            object.remove("last_replied_at");
            object.remove("cc");
        }

        let mut request: Self = alias::hydrate(&flat, &REQUEST_ALIASES)?;

        if let Some(author) = item.get("author").filter(|v| v.is_object()) {
            request.author = Some(alias::hydrate(author, &FieldAliasMap::empty())?);
        }

        if let Some(product) = item.get("product").filter(|v| v.is_object()) {
            request.product = Some(alias::hydrate(product, &FieldAliasMap::empty())?);
        }

        if let Some(raw) = item.get("last_replied_at").and_then(Value::as_str) {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .map_err(|err| Error::Parse(format!("Invalid last_replied_at: {err}")))?;
            request.last_replied_at = Some(parsed.with_timezone(&Utc));
        }

        if let Some(cc) = item.get("cc").and_then(Value::as_array) {
            if !cc.is_empty() {
                let addresses = cc
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
                request.cc = Some(addresses);
            }
        }

        Ok(request)
    }

    /// Build the wire payload for a create or update call.
    ///
    /// Only [`REQUEST_PAYLOAD_ALIASES`] entries are renamed; author and
    /// product are serialized as nested objects when set.
    pub fn to_payload(&self) -> Result<Value> {
        alias::dehydrate(self, &REQUEST_PAYLOAD_ALIASES)
    }
}

impl Feedback {
    /// Hydrate feedback from its wire shape.
    pub fn from_wire(raw: &Value) -> Result<Self> {
        alias::hydrate(raw, &FEEDBACK_ALIASES)
    }

    /// Build the feedback submission payload.
    ///
    /// The API accepts exactly these seven keys; identifiers assigned by the
    /// service are never sent back.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        serde_json::json!({
            "speed_resolved": self.speed_resolved,
            "comment": self.comment,
            "contact_id": self.contact_id,
            "quality": self.quality,
            "score": self.score,
            "nps_score": self.nps_score,
            "thirdparty_consent": self.third_party_consent,
        })
    }
}
