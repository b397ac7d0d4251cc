//! Request bodies and their wire encoding.

use serde::Serialize;

use crate::errors::TransportError;

/// A single part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File {
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

/// Multipart form payload.
///
/// Sent as-is; the transport picks the multipart boundary and sets the
/// matching `Content-Type` itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), FormValue::Text(value.into())));
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FormValue::File {
                file_name: file_name.into(),
                content_type,
                bytes: bytes.into(),
            },
        ));
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Body supplied by the caller of [`crate::fetcher::Fetcher::request`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    /// No body at all. Nothing is put on the wire.
    #[default]
    Empty,
    /// Any JSON value, encoded with `serde_json` before sending. `Json(Value::Null)`
    /// is sent as the text `null`.
    Json(serde_json::Value),
    Form(FormData),
}

impl Body {
    /// Builds a JSON body from any serializable value.
    pub fn json<T>(value: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value).map(Body::Json)
    }

    pub fn is_form(&self) -> bool {
        matches!(self, Body::Form(_))
    }

    /// Encodes the body for the transport. Form payloads are moved through
    /// untouched.
    pub(crate) fn prepare(self) -> Result<Option<PreparedBody>, TransportError> {
        match self {
            Body::Empty => Ok(None),
            Body::Json(value) => serde_json::to_string(&value)
                .map(|text| Some(PreparedBody::Text(text)))
                .map_err(|e| TransportError::Encode(e.to_string())),
            Body::Form(form) => Ok(Some(PreparedBody::Form(form))),
        }
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Json(value)
    }
}

impl From<FormData> for Body {
    fn from(form: FormData) -> Self {
        Body::Form(form)
    }
}

/// Body as it goes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedBody {
    Text(String),
    Form(FormData),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_sends_nothing() {
        assert_eq!(Body::Empty.prepare().unwrap(), None);
    }

    #[test]
    fn json_body_is_encoded() {
        let prepared = Body::Json(json!({"name": "kettle", "count": 2}))
            .prepare()
            .unwrap();
        let Some(PreparedBody::Text(text)) = prepared else {
            panic!("expected a text body, got {prepared:?}");
        };
        let decoded: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, json!({"name": "kettle", "count": 2}));
    }

    #[test]
    fn json_null_and_strings_are_still_encoded() {
        assert_eq!(
            Body::Json(serde_json::Value::Null).prepare().unwrap(),
            Some(PreparedBody::Text("null".to_string()))
        );
        assert_eq!(
            Body::Json(json!("")).prepare().unwrap(),
            Some(PreparedBody::Text("\"\"".to_string()))
        );
    }

    #[test]
    fn form_body_passes_through_unchanged() {
        let form = FormData::new()
            .text("title", "holiday")
            .file("photo", "beach.png", Some("image/png".to_string()), vec![1, 2, 3]);

        let prepared = Body::Form(form.clone()).prepare().unwrap();
        assert_eq!(prepared, Some(PreparedBody::Form(form)));
    }

    #[test]
    fn body_from_serializable_struct() {
        #[derive(Serialize)]
        struct Note<'a> {
            text: &'a str,
        }

        let body = Body::json(&Note { text: "hi" }).unwrap();
        assert_eq!(body, Body::Json(json!({"text": "hi"})));
        assert!(!body.is_form());
    }
}
