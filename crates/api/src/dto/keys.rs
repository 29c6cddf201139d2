use keyscope_domain::{KeyInspection, KeyValue};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Deserialize, Debug, Default)]
pub struct KeyQuery {
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct KeyInspectionResponse {
    pub ok: bool,
    pub key: String,
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: Value,
}

impl KeyInspectionResponse {
    pub fn from_inspection(inspection: KeyInspection) -> Self {
        Self {
            ok: true,
            key: inspection.key,
            key_type: inspection.key_type,
            value: inspection.value.map(value_to_json).unwrap_or(Value::Null),
        }
    }
}

fn value_to_json(value: KeyValue) -> Value {
    match value {
        KeyValue::String(s) => Value::String(s),
        KeyValue::Hash(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect::<Map<String, Value>>(),
        ),
        KeyValue::List(items) | KeyValue::Set(items) => {
            Value::Array(items.into_iter().map(Value::String).collect())
        }
        KeyValue::SortedSet(members) => Value::Array(
            members
                .into_iter()
                .map(|m| json!({ "member": m.member, "score": m.score }))
                .collect(),
        ),
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct KeyMemoryResponse {
    pub ok: bool,
    pub key: String,
    pub bytes: Option<u64>,
}
