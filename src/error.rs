use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum ReadingsError {
    NoWindow,
    Transport(String),
    Status(u16),
    Parse(String),
    MissingSlot(String),
}

impl std::fmt::Display for ReadingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no window"),
            Self::Transport(e) => write!(f, "transport: {}", e),
            Self::Status(code) => write!(f, "HTTP error: {}", code),
            Self::Parse(e) => write!(f, "parse: {}", e),
            Self::MissingSlot(id) => write!(f, "missing element #{}", id),
        }
    }
}

impl std::error::Error for ReadingsError {}

impl From<JsValue> for ReadingsError {
    fn from(e: JsValue) -> Self {
        Self::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }
}

impl From<serde_json::Error> for ReadingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ReadingsError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(ReadingsError::Status(404).to_string(), "HTTP error: 404");
        assert_eq!(
            ReadingsError::MissingSlot("sessionTitleArray3".into()).to_string(),
            "missing element #sessionTitleArray3"
        );
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: ReadingsError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, ReadingsError::Parse(_)));
    }
}
