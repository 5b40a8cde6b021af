// The wire protocol wraps every entity in a one-element list named after
// the YANG list: `{"node": [ {...} ]}`. Encode always writes exactly one
// element; decode takes element 0 and rejects an empty or missing list.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CodecError;

pub(super) fn wrap<W: Serialize>(key: &'static str, element: &W) -> Result<Vec<u8>, CodecError> {
    let mut envelope = Map::with_capacity(1);
    envelope.insert(
        key.to_owned(),
        Value::Array(vec![serde_json::to_value(element)?]),
    );
    Ok(serde_json::to_vec(&Value::Object(envelope))?)
}

pub(super) fn unwrap<W: DeserializeOwned>(key: &'static str, bytes: &[u8]) -> Result<W, CodecError> {
    let root: Value = serde_json::from_slice(bytes)?;
    let Value::Object(mut members) = root else {
        return Err(CodecError::MissingList { key });
    };

    // RFC 8040 servers qualify top-level members with the module name
    // (`network-topology:node`); older draft servers do not.
    let member = members
        .keys()
        .find(|name| *name == key || name.rsplit_once(':').is_some_and(|(_, local)| local == key))
        .cloned()
        .ok_or(CodecError::MissingList { key })?;

    let Some(Value::Array(items)) = members.remove(&member) else {
        return Err(CodecError::NotAList { key });
    };

    let first = items
        .into_iter()
        .next()
        .ok_or(CodecError::EmptyList { key })?;
    Ok(serde_json::from_value(first)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Element {
        name: String,
    }

    #[test]
    fn wrap_writes_exactly_one_element() {
        let bytes = wrap("node", &Element { name: "xr-1".into() }).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({ "node": [{ "name": "xr-1" }] }));
    }

    #[test]
    fn unwrap_takes_first_element() {
        let bytes = br#"{"node":[{"name":"a"},{"name":"b"}]}"#;
        let element: Element = unwrap("node", bytes).unwrap();
        assert_eq!(element.name, "a");
    }

    #[test]
    fn unwrap_accepts_module_qualified_key() {
        let bytes = br#"{"network-topology:node":[{"name":"a"}]}"#;
        let element: Element = unwrap("node", bytes).unwrap();
        assert_eq!(element.name, "a");
    }

    #[test]
    fn empty_list_is_malformed() {
        let result = unwrap::<Element>("node", br#"{"node":[]}"#);
        assert!(matches!(result, Err(CodecError::EmptyList { key: "node" })));
    }

    #[test]
    fn missing_list_is_malformed() {
        let result = unwrap::<Element>("node", br#"{"topology":[]}"#);
        assert!(matches!(result, Err(CodecError::MissingList { key: "node" })));
    }

    #[test]
    fn non_list_member_is_malformed() {
        let result = unwrap::<Element>("node", br#"{"node":{"name":"a"}}"#);
        assert!(matches!(result, Err(CodecError::NotAList { key: "node" })));
    }

    #[test]
    fn non_object_root_is_malformed() {
        let result = unwrap::<Element>("node", b"[1, 2]");
        assert!(matches!(result, Err(CodecError::MissingList { .. })));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let result = unwrap::<Element>("node", b"<rpc-reply/>");
        assert!(matches!(result, Err(CodecError::Json(_))));
    }

    #[test]
    fn element_shape_mismatch_is_malformed() {
        let result = unwrap::<Element>("node", br#"{"node":[{"id":1}]}"#);
        assert!(matches!(result, Err(CodecError::Json(_))));
    }
}
