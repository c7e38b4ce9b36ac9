//! Application route paths.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A navigable application path gated by authorization.
///
/// Routes are compared by exact string equality everywhere in this system;
/// there is no prefix or hierarchical matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Cow<'static, str>);

impl Route {
    /// Wrap a compile-time route literal.
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Parse a route supplied as configuration data.
    pub fn parse(path: impl Into<Cow<'static, str>>) -> Result<Self, DomainError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(DomainError::validation(format!(
                "route must start with '/': {path}"
            )));
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_relative_paths() {
        let err = Route::parse("starter").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn routes_compare_by_exact_path() {
        let configured = Route::parse("/starter".to_string()).unwrap();
        assert_eq!(configured, Route::from_static("/starter"));
        assert_ne!(configured, Route::from_static("/starter/overview"));
    }
}
