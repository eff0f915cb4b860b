use std::borrow::Cow;

/// Shorthand for results produced by this crate.
pub type Result<T, E = KernelError> = std::result::Result<T, E>;

/// A specialized [`KernelError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// The catalog document could not be read.
    #[error("Catalog I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The catalog document is not JSON or does not match the schema.
    #[error("Catalog parse error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The catalog parsed but breaks an identifier invariant.
    #[error("Invalid catalog{}: {message}", format_context(.context))]
    InvalidCatalog { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Layered settings could not be built or deserialized.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal kernel error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Attaches a human-readable context to kernel results.
pub trait KernelErrorExt<T> {
    /// Wraps the error with `context`, replacing any previous one.
    ///
    /// # Errors
    /// Returns the original error converted into [`KernelError`].
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> KernelErrorExt<T> for Result<T> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                KernelError::Io { context: c, .. }
                | KernelError::Parse { context: c, .. }
                | KernelError::InvalidCatalog { context: c, .. }
                | KernelError::Internal { context: c, .. } => *c = Some(context.into()),
                #[cfg(not(target_arch = "wasm32"))]
                KernelError::Config { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> KernelErrorExt<T> for std::result::Result<T, std::io::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| KernelError::Io { source, context: Some(context.into()) })
    }
}

impl<T> KernelErrorExt<T> for std::result::Result<T, serde_json::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| KernelError::Parse { source, context: Some(context.into()) })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<T> KernelErrorExt<T> for std::result::Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| KernelError::Config { source, context: Some(context.into()) })
    }
}

impl From<std::io::Error> for KernelError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

impl From<serde_json::Error> for KernelError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source, context: None }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<config::ConfigError> for KernelError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

impl From<&'static str> for KernelError {
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for KernelError {
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

#[allow(clippy::ref_option)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_message() {
        let err: Result<()> = Err("boom".into());
        let err = err.context("loading catalog").unwrap_err();
        assert_eq!(err.to_string(), "Internal kernel error (loading catalog): boom");
    }

    #[test]
    fn json_errors_convert_with_context() {
        let raw: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err = raw.context("sites.json").unwrap_err();
        assert!(matches!(err, KernelError::Parse { context: Some(_), .. }));
        assert!(err.to_string().starts_with("Catalog parse error (sites.json): "));
    }

    #[test]
    fn missing_context_renders_nothing() {
        let err = KernelError::InvalidCatalog { message: "duplicate id".into(), context: None };
        assert_eq!(err.to_string(), "Invalid catalog: duplicate id");
    }
}
