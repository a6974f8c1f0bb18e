use thiserror::Error;

/// Failures while reading the live document. Every caller treats these as
/// "do nothing this frame", they are never surfaced to the visitor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    #[error("no browser window available")]
    NoWindow,
    #[error("element `{0}` is not mounted")]
    Unmounted(&'static str),
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Parse(#[from] serde_json::Error),
}
