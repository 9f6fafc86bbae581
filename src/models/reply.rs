// Ganesha D-Bus Probe - Reply Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Textual form of a method reply.

use std::fmt;

use zbus::zvariant::{Structure, Value};
use zbus::Message;

use crate::bus::BusError;

/// A decoded method reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    /// Reply body signature, empty for a reply without a body.
    pub signature: String,
    /// Rendered text of each returned value, in order.
    pub values: Vec<String>,
}

impl Reply {
    /// Build a reply directly from rendered values.
    pub fn new(signature: &str, values: Vec<String>) -> Self {
        Self {
            signature: signature.to_string(),
            values,
        }
    }

    /// Build a reply holding a single string value.
    pub fn text(value: &str) -> Self {
        Self::new("s", vec![value.to_string()])
    }

    /// Decode the body of a method return message.
    pub fn from_message(message: &Message) -> Result<Self, BusError> {
        let body = message.body();
        let signature = body
            .signature()
            .map(|sig| sig.as_str().to_string())
            .unwrap_or_default();

        if signature.is_empty() {
            return Ok(Self::default());
        }

        let fields: Structure<'_> = body
            .deserialize()
            .map_err(|e| BusError::Reply(e.to_string()))?;
        let values = fields.fields().iter().map(render_value).collect();

        Ok(Self { signature, values })
    }

    /// Whether the reply carried no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.values.as_slice() {
            [] => f.write_str("None"),
            [single] => f.write_str(single),
            many => write!(f, "({})", many.join(", ")),
        }
    }
}

/// Render one reply value the way a dynamic bus binding prints it.
///
/// Strings, object paths and signatures print raw. Booleans print as
/// `1`/`0`, integers bare and doubles always with a decimal point.
/// Containers use the GVariant text format.
pub fn render_value(value: &Value<'_>) -> String {
    match value {
        Value::Str(s) => s.as_str().to_string(),
        Value::ObjectPath(path) => path.as_str().to_string(),
        Value::Signature(sig) => sig.as_str().to_string(),
        Value::Bool(b) => u8::from(*b).to_string(),
        Value::U8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F64(v) => format!("{v:?}"),
        Value::Value(inner) => render_value(inner),
        other => other.to_string(),
    }
}
