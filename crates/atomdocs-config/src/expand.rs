//! `${VAR}` and `${VAR:-default}` expansion for config strings.

use crate::ConfigError;

/// Expand environment variable references in a config value.
///
/// Only the braced form is recognised; a value without `${` is returned as-is,
/// so bare `$` characters in paths or hostnames survive untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar {
            name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

/// Lookup failure carried through `shellexpand`.
struct UnsetVar {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("ATOMDOCS_EXPAND_SET", "docs.local");
        }
        let result = expand_env("${ATOMDOCS_EXPAND_SET}", "server.host").unwrap();
        assert_eq!(result, "docs.local");
        unsafe {
            std::env::remove_var("ATOMDOCS_EXPAND_SET");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("ATOMDOCS_EXPAND_UNSET");
        }
        let result = expand_env("${ATOMDOCS_EXPAND_UNSET:-app/docs}", "docs.source_dir").unwrap();
        assert_eq!(result, "app/docs");
    }

    #[test]
    fn test_expand_embedded_in_path() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("ATOMDOCS_EXPAND_ROOT", "/srv/site");
        }
        let result = expand_env("${ATOMDOCS_EXPAND_ROOT}/docs", "docs.source_dir").unwrap();
        assert_eq!(result, "/srv/site/docs");
        unsafe {
            std::env::remove_var("ATOMDOCS_EXPAND_ROOT");
        }
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("ATOMDOCS_EXPAND_MISSING");
        }
        let err = expand_env("${ATOMDOCS_EXPAND_MISSING}", "site.name").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("ATOMDOCS_EXPAND_MISSING"));
        assert!(msg.contains("site.name"));
    }

    #[test]
    fn test_bare_dollar_left_alone() {
        let result = expand_env("docs/$version", "docs.source_dir").unwrap();
        assert_eq!(result, "docs/$version");
    }
}
