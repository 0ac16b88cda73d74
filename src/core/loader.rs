use crate::core::Record;
use crate::utils::error::{Result, TicketError};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content)
}

/// Parses `{"tickets": [ {...}, ... ]}` into raw records. All or nothing.
pub fn parse_document(bytes: &[u8]) -> Result<Vec<Record>> {
    let content = std::str::from_utf8(bytes).map_err(|e| TicketError::DocumentError {
        message: format!("input is not valid UTF-8: {}", e),
    })?;

    let document: serde_json::Value = serde_json::from_str(strip_bom(content))?;

    let root = document
        .as_object()
        .ok_or_else(|| TicketError::DocumentError {
            message: "top-level JSON value must be an object".to_string(),
        })?;

    let tickets = root
        .get("tickets")
        .ok_or_else(|| TicketError::DocumentError {
            message: "missing required field `tickets`".to_string(),
        })?
        .as_array()
        .ok_or_else(|| TicketError::DocumentError {
            message: "field `tickets` must be an array".to_string(),
        })?;

    tickets
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            serde_json::Value::Object(obj) => Ok(Record {
                data: obj
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            }),
            _ => Err(TicketError::DocumentError {
                message: format!("ticket #{} is not a JSON object", index),
            }),
        })
        .collect()
}
