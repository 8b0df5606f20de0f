use wasm_bindgen::JsValue;

/// Failure while wiring one page behavior.
///
/// None of these are fatal to the page: the entry point logs the error and
/// moves on to the next behavior.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error(transparent)]
    Config(#[from] motion::MotionError),
    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
