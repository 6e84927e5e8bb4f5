//! Request shapes submitted to the generative service.

use serde_json::{json, Map, Value};

/// MIME type asking the service for JSON output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Primitive type of a schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
}

impl SchemaType {
    /// Wire name of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
        }
    }
}

/// A flat object schema used as a response-shape hint.
///
/// Properties keep their declaration order. `required` lists the fields the
/// service is asked to guarantee; an empty list makes the schema advisory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSchema {
    properties: Vec<(String, SchemaType)>,
    required: Vec<String>,
}

impl ResponseSchema {
    /// Start an empty object schema.
    pub fn object() -> Self {
        Self::default()
    }

    /// Declare a property.
    pub fn property(mut self, name: impl Into<String>, kind: SchemaType) -> Self {
        self.properties.push((name.into(), kind));
        self
    }

    /// Mark properties as required.
    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declared properties in order.
    pub fn properties(&self) -> &[(String, SchemaType)] {
        &self.properties
    }

    /// Names of the required properties.
    pub fn required_fields(&self) -> &[String] {
        &self.required
    }

    /// Whether the service is asked to guarantee every field.
    pub fn is_enforced(&self) -> bool {
        !self.required.is_empty()
    }

    /// Render the schema as the JSON object sent on the wire.
    pub fn to_value(&self) -> Value {
        let mut properties = Map::new();
        for (name, kind) in &self.properties {
            properties.insert(name.clone(), json!({ "type": kind.as_str() }));
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("OBJECT".to_string()));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !self.required.is_empty() {
            schema.insert("required".to_string(), json!(self.required));
        }
        Value::Object(schema)
    }
}

/// A text completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    /// Model to use.
    pub model: String,
    /// User prompt text.
    pub prompt: String,
    /// Optional system instruction.
    pub system_instruction: Option<String>,
    /// Requested response MIME type (always JSON for this application).
    pub response_mime_type: String,
    /// Optional response-shape hint.
    pub response_schema: Option<ResponseSchema>,
    /// Optional sampling temperature.
    pub temperature: Option<f32>,
}

impl TextRequest {
    /// Create a JSON-output text request.
    pub fn json(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system_instruction: None,
            response_mime_type: JSON_MIME_TYPE.to_string(),
            response_schema: None,
            temperature: None,
        }
    }

    /// Set the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Set the response schema hint.
    pub fn with_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Raw image bytes sent inline with a vision request.
#[derive(Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// MIME type declared to the service.
    pub mime_type: String,
    /// Image bytes, passed through verbatim.
    pub data: Vec<u8>,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }
}

// Image payloads can be megabytes.
impl std::fmt::Debug for InlineImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineImage")
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// A vision completion request: one inline image followed by a text part.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionRequest {
    /// Model to use.
    pub model: String,
    /// The image part.
    pub image: InlineImage,
    /// The text part.
    pub prompt: String,
    /// Requested response MIME type.
    pub response_mime_type: String,
    /// Response schema; vision requests always declare one.
    pub response_schema: ResponseSchema,
}

impl VisionRequest {
    /// Create a JSON-output vision request.
    pub fn json(
        model: impl Into<String>,
        image: InlineImage,
        prompt: impl Into<String>,
        schema: ResponseSchema,
    ) -> Self {
        Self {
            model: model.into(),
            image,
            prompt: prompt.into(),
            response_mime_type: JSON_MIME_TYPE.to_string(),
            response_schema: schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_wire_shape() {
        let schema = ResponseSchema::object()
            .property("diagnosis", SchemaType::String)
            .property("confidence", SchemaType::Number)
            .required(["diagnosis", "confidence"]);

        let value = schema.to_value();
        assert_eq!(value["type"], "OBJECT");
        assert_eq!(value["properties"]["diagnosis"]["type"], "STRING");
        assert_eq!(value["properties"]["confidence"]["type"], "NUMBER");
        assert_eq!(value["required"], json!(["diagnosis", "confidence"]));
        assert!(schema.is_enforced());
    }

    #[test]
    fn test_advisory_schema_omits_required() {
        let schema = ResponseSchema::object().property("soil", SchemaType::String);
        let value = schema.to_value();
        assert!(value.get("required").is_none());
        assert!(!schema.is_enforced());
    }

    #[test]
    fn test_text_request_builder() {
        let request = TextRequest::json("gemini-3-pro-preview", "Mahindi")
            .with_system_instruction("Wewe ni mtaalamu")
            .with_temperature(0.7);

        assert_eq!(request.response_mime_type, JSON_MIME_TYPE);
        assert_eq!(request.system_instruction.as_deref(), Some("Wewe ni mtaalamu"));
        assert_eq!(request.temperature, Some(0.7));
        assert!(request.response_schema.is_none());
    }

    #[test]
    fn test_inline_image_debug_hides_bytes() {
        let image = InlineImage::new("image/jpeg", vec![0xff; 2048]);
        let rendered = format!("{:?}", image);
        assert!(rendered.contains("2048"));
        assert!(!rendered.contains("255"));
    }
}
