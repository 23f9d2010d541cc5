/// Rejected loader requests.
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderError {
    Callback(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Callback(name) => write!(f, "invalid callback name: {:?}", name),
        }
    }
}

impl std::error::Error for LoaderError {}

/// Serves the snippet that pulls in the Maps JavaScript API,
/// so the browser never ships the key in static files.
#[derive(Clone)]
pub struct Loader {
    origin: String,
    key: String,
}

impl Loader {
    pub fn new(origin: impl Into<String>, key: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            key: key.into(),
        }
    }

    /// Script that appends the API `<script>` tag, invoking `callback` once loaded.
    pub fn script(&self, callback: Option<&str>) -> Result<String, LoaderError> {
        let callback = callback.unwrap_or(crate::DEFAULT_MAPS_CALLBACK);
        Self::check(callback)?;
        Ok(format!(
            concat!(
                "const script = document.createElement('script');\n",
                "script.src = \"{}/maps/api/js?key={}&callback={}\";\n",
                "document.body.appendChild(script);\n",
            ),
            self.origin, self.key, callback
        ))
    }

    /// Dotted JavaScript identifier path, e.g. `initializeMap` or `app.init`.
    fn check(callback: &str) -> Result<(), LoaderError> {
        let ident = |part: &str| {
            let mut chars = part.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        };
        match callback.split('.').all(ident) {
            true => Ok(()),
            false => Err(LoaderError::Callback(callback.to_string())),
        }
    }
}
