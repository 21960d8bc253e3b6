use serde::Serialize;
use serde_json::{Map, Value};

/// One entry of the field-error list returned with a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    /// Path of the offending field inside the request body.
    #[schema(example = json!(["owner"]))]
    pub loc: Vec<String>,
    /// Human-readable message.
    #[schema(example = "field required")]
    pub msg: String,
    /// Machine-readable error kind.
    #[serde(rename = "type")]
    #[schema(example = "value_error.missing")]
    pub kind: String,
}

impl FieldError {
    fn new(loc: &str, msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: vec![loc.to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, "field required", "value_error.missing")
    }

    pub fn null_not_allowed(field: &str) -> Self {
        Self::new(
            field,
            "none is not an allowed value",
            "type_error.none.not_allowed",
        )
    }

    pub fn not_a_string(field: &str) -> Self {
        Self::new(field, "str type expected", "type_error.str")
    }

    pub fn not_an_object() -> Self {
        Self::new("__root__", "value is not a valid dict", "type_error.dict")
    }

    /// The body could not be read as JSON at all.
    pub fn undecodable_body(detail: impl Into<String>) -> Self {
        Self::new("body", detail, "value_error.jsondecode")
    }
}

/// A request payload that is validated from raw JSON instead of plain serde
/// deserialization, so that every bad field is reported, not just the first.
pub trait RequestSchema: Sized {
    fn from_json(body: &Value) -> Result<Self, Vec<FieldError>>;
}

/// Reads string fields out of a JSON object.
pub(crate) struct ObjectFields<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> ObjectFields<'a> {
    pub fn new(body: &'a Value) -> Result<Self, Vec<FieldError>> {
        match body {
            Value::Object(object) => Ok(Self { object }),
            _ => Err(vec![FieldError::not_an_object()]),
        }
    }

    /// A field that must be present and hold a string.
    pub fn required_str(&self, field: &str) -> Result<String, FieldError> {
        match self.object.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Err(FieldError::null_not_allowed(field)),
            Some(value) => string(field, value),
        }
    }

    /// A field that may be absent or `null`; both mean "not provided".
    pub fn optional_str(&self, field: &str) -> Result<Option<String>, FieldError> {
        match self.object.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => string(field, value).map(Some),
        }
    }
}

fn string(field: &str, value: &Value) -> Result<String, FieldError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(FieldError::not_a_string(field)),
    }
}

/// Errors of a set of field reads, in read order.
pub(crate) fn field_errors<const N: usize>(errors: [Option<FieldError>; N]) -> Vec<FieldError> {
    errors.into_iter().flatten().collect()
}
