use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("missing DOM element: {0}")]
    MissingElement(&'static str),
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("response was not valid UTF-8 text")]
    Utf8,
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WebError {
    pub fn js(value: &wasm_bindgen::JsValue) -> Self {
        Self::Js(crate::dom::js_error_message(value))
    }
}

impl From<portfolio_core::CatalogError> for WebError {
    fn from(err: portfolio_core::CatalogError) -> Self {
        match err {
            portfolio_core::CatalogError::Json(inner) => Self::Json(inner),
        }
    }
}
