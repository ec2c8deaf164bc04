//! Heuristic organization-name extraction from registry responses.
//!
//! The five regional registries format "organization name" in incompatible
//! ways: APNIC carries a human-readable description in the top-level remarks,
//! ARIN and AFRINIC put a formatted-name property in an entity jCard, LACNIC
//! has a top-level remark that is present but empty. The guess is
//! best-effort: it returns an empty string rather than failing the request.

use serde_json::Value;

use super::types::{RegistryEntity, RegistryResponse};

/// jCard property tag for the formatted display name.
const FORMATTED_NAME_PROPERTY: &str = "fn";

/// One decoded element of a jCard `vcardArray`.
///
/// The wire encoding alternates the literal string `"vcard"` with a list of
/// property entries, each entry itself an array of JSON values. Anything
/// else is a shape mismatch and aborts the guess.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum VcardElement {
    /// The `"vcard"` type literal; carries no properties.
    Literal(String),
    /// Property entries, e.g. `[["fn", {}, "text", "Google LLC"], ...]`.
    Properties(Vec<Vec<Value>>),
}

/// Guesses a display name for the organization behind a registry response.
///
/// Total: always returns a string, empty when no guess is possible.
/// Priority order, first match wins:
///
/// 1. The first top-level remark's description lines, joined with newlines.
///    A remark with an empty description falls through rather than producing
///    an empty guess.
/// 2. The value of the first `fn` property found while scanning entity
///    jCards in response order.
pub fn guess_name(response: &RegistryResponse) -> String {
    if let Some(remark) = response.remarks.first() {
        // APNIC puts the organization description directly on the response.
        // LACNIC also has a top-level remark, but its description is empty.
        if !remark.description.is_empty() {
            return remark.description.join("\n");
        }
    }
    scan_entities(&response.entities)
}

/// Scans entity jCards for the first `fn` property.
///
/// Any element that does not decode as the expected shape aborts the whole
/// scan and yields an empty guess; a malformed vcard never fails the request.
fn scan_entities(entities: &[RegistryEntity]) -> String {
    for entity in entities {
        for element in &entity.vcard_array {
            let element: VcardElement = match serde_json::from_value(element.clone()) {
                Ok(parsed) => parsed,
                Err(e) => {
                    log::debug!("vcard element has an unexpected shape, no guess: {}", e);
                    return String::new();
                }
            };
            let entries = match element {
                VcardElement::Literal(_) => continue,
                VcardElement::Properties(entries) => entries,
            };
            for entry in &entries {
                // First string in the entry is the property name, last string
                // is its value; non-string fields (parameter objects, nested
                // arrays) are skipped.
                let mut name: Option<&str> = None;
                let mut value: Option<&str> = None;
                for field in entry {
                    if let Value::String(s) = field {
                        if name.is_none() {
                            name = Some(s);
                        }
                        value = Some(s);
                    }
                }
                if name == Some(FORMATTED_NAME_PROPERTY) {
                    return value.unwrap_or_default().to_string();
                }
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::Remark;
    use serde_json::json;

    fn entity(vcard_array: Vec<Value>) -> RegistryEntity {
        RegistryEntity {
            vcard_array,
            remarks: Vec::new(),
        }
    }

    #[test]
    fn test_remark_description_takes_precedence() {
        let response = RegistryResponse {
            remarks: vec![Remark {
                title: "description".to_string(),
                description: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            }],
            entities: vec![entity(vec![
                json!("vcard"),
                json!([["fn", {}, "text", "Ignored Org"]]),
            ])],
            ..Default::default()
        };
        assert_eq!(guess_name(&response), "A\nB\nC");
    }

    #[test]
    fn test_empty_remark_description_falls_through_to_vcard() {
        let response = RegistryResponse {
            remarks: vec![Remark {
                title: "description".to_string(),
                description: Vec::new(),
            }],
            entities: vec![entity(vec![
                json!("vcard"),
                json!([
                    ["version", {}, "text", "4.0"],
                    ["fn", {}, "text", "Google LLC"]
                ]),
            ])],
            ..Default::default()
        };
        assert_eq!(guess_name(&response), "Google LLC");
    }

    #[test]
    fn test_first_fn_short_circuits_the_scan() {
        let response = RegistryResponse {
            entities: vec![
                entity(vec![
                    json!("vcard"),
                    json!([["fn", {}, "text", "First Org"]]),
                ]),
                entity(vec![
                    json!("vcard"),
                    json!([["fn", {}, "text", "Second Org"]]),
                ]),
            ],
            ..Default::default()
        };
        assert_eq!(guess_name(&response), "First Org");
    }

    #[test]
    fn test_entity_without_fn_is_skipped() {
        let response = RegistryResponse {
            entities: vec![
                entity(vec![
                    json!("vcard"),
                    json!([["version", {}, "text", "4.0"], ["kind", {}, "text", "org"]]),
                ]),
                entity(vec![json!("vcard"), json!([["fn", {}, "text", "Found"]])]),
            ],
            ..Default::default()
        };
        assert_eq!(guess_name(&response), "Found");
    }

    #[test]
    fn test_non_array_vcard_element_yields_empty_guess() {
        // An object where a string-or-array was expected aborts the scan.
        let response = RegistryResponse {
            entities: vec![
                entity(vec![json!({"unexpected": "object"})]),
                entity(vec![json!("vcard"), json!([["fn", {}, "text", "Never"]])]),
            ],
            ..Default::default()
        };
        assert_eq!(guess_name(&response), "");
    }

    #[test]
    fn test_non_array_property_entry_yields_empty_guess() {
        // A property entry that is not itself an array is a shape mismatch.
        let response = RegistryResponse {
            entities: vec![entity(vec![json!("vcard"), json!(["fn", "Google LLC"])])],
            ..Default::default()
        };
        assert_eq!(guess_name(&response), "");
    }

    #[test]
    fn test_no_entities_and_no_remarks() {
        assert_eq!(guess_name(&RegistryResponse::default()), "");
    }

    #[test]
    fn test_last_string_in_entry_is_the_value() {
        // The value picks the last string field, skipping parameter objects
        // and the type tag position.
        let response = RegistryResponse {
            entities: vec![entity(vec![
                json!("vcard"),
                json!([["fn", {"language": "en"}, "text", "Multi", "Final Name"]]),
            ])],
            ..Default::default()
        };
        assert_eq!(guess_name(&response), "Final Name");
    }

    #[test]
    fn test_fn_only_entry_returns_the_tag_itself() {
        // Degenerate entry ["fn"]: the single string is both name and value.
        let response = RegistryResponse {
            entities: vec![entity(vec![json!("vcard"), json!([["fn"]])])],
            ..Default::default()
        };
        assert_eq!(guess_name(&response), "fn");
    }
}
