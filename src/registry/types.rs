//! Registry (RDAP) data structures.
//!
//! Only the fields the service consumes are modeled; unknown fields in
//! registry responses are ignored, and absent fields decode to empty values.

use serde::{Deserialize, Serialize};

/// A remark attached to a registry response or entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Remark {
    /// Remark title (e.g. "description").
    pub title: String,
    /// Description lines, in original order. May be empty.
    pub description: Vec<String>,
}

/// A registered entity (organization or contact) in a registry response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryEntity {
    /// jCard elements, kept as opaque JSON values until the name guesser
    /// decodes them.
    pub vcard_array: Vec<serde_json::Value>,
    /// Entity-level remarks.
    pub remarks: Vec<Remark>,
}

/// The subset of an RDAP IP network object modeled by this service.
///
/// Immutable after creation; the five regional registries populate these
/// fields very differently, which is what the name guesser papers over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryResponse {
    /// Network name (e.g. "APNIC-LABS").
    pub name: String,
    /// ISO country code, when the registry provides one.
    pub country: String,
    /// Registry handle of the network.
    pub handle: String,
    /// Handle of the parent allocation.
    pub parent_handle: String,
    /// First address of the allocated range.
    pub start_address: String,
    /// Last address of the allocated range.
    pub end_address: String,
    /// Registered entities, in response order.
    pub entities: Vec<RegistryEntity>,
    /// Top-level remarks, in response order.
    pub remarks: Vec<Remark>,
    /// Legacy WHOIS server for this allocation.
    pub port43: String,
}

/// Registry lookup result: the parsed response, the verbatim payload, and
/// the guessed organization name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRegistryResult {
    /// Parsed registry response.
    pub rdap_response: RegistryResponse,
    /// Literal bytes received from the registry, preserved for audit.
    pub rdap_response_raw: String,
    /// Best-effort organization name; empty when no guess was possible.
    pub guessed_name: String,
}
