use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::serde_json::{self, Map, Value};
use near_sdk::{env, AccountId};
use near_sdk_macros::NearSchema;

use super::{PREFIX, STANDARD, VERSION};

#[derive(NearSchema, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event {
    pub(crate) standard: String,
    pub(crate) version: String,
    pub(crate) event: String,
    pub(crate) data: Vec<EventData>,
}

#[derive(NearSchema, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct EventData {
    pub(crate) operation: String,
    pub(crate) author: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

// --- Value conversion ---

pub(crate) trait IntoEventValue {
    fn into_event_value(self) -> Value;
}

impl IntoEventValue for &str {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for String {
    fn into_event_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoEventValue for &AccountId {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for u16 {
    fn into_event_value(self) -> Value {
        Value::Number(self.into())
    }
}

impl IntoEventValue for u64 {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for u128 {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for U128 {
    fn into_event_value(self) -> Value {
        Value::String(self.0.to_string())
    }
}

impl IntoEventValue for bool {
    fn into_event_value(self) -> Value {
        Value::Bool(self)
    }
}

// --- EventBuilder ---

pub(crate) struct EventBuilder {
    event_type: &'static str,
    operation: &'static str,
    author: String,
    fields: Map<String, Value>,
}

impl EventBuilder {
    pub(crate) fn new(
        event_type: &'static str,
        operation: &'static str,
        author: &AccountId,
    ) -> Self {
        Self {
            event_type,
            operation,
            author: author.to_string(),
            fields: Map::new(),
        }
    }

    pub(crate) fn field(mut self, key: &str, value: impl IntoEventValue) -> Self {
        self.fields.insert(key.into(), value.into_event_value());
        self
    }

    pub(crate) fn field_opt(mut self, key: &str, value: Option<impl IntoEventValue>) -> Self {
        if let Some(v) = value {
            self.fields.insert(key.into(), v.into_event_value());
        }
        self
    }

    pub(crate) fn emit(self) {
        let event = Event {
            standard: STANDARD.into(),
            version: VERSION.into(),
            event: self.event_type.into(),
            data: vec![EventData {
                operation: self.operation.into(),
                author: self.author,
                extra: self.fields,
            }],
        };
        env::log_str(&format!(
            "{PREFIX}{}",
            serde_json::to_string(&event).expect("event serialization failed")
        ));
    }
}
