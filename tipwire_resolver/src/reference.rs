// Copyright 2025 the Tipwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference strings: parsing `handler@method` into a target.

use thiserror::Error;

/// Why a reference string could not be parsed.
///
/// All of these degrade to empty content at the [`Registry`](crate::registry::Registry)
/// boundary; the typed error is available from
/// [`Reference::parse`] and
/// [`Registry::try_resolve`](crate::registry::Registry::try_resolve).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    /// The reference string was empty.
    #[error("empty reference")]
    Empty,
    /// A bare method name with no default handler configured.
    #[error("no default handler configured for bare method `{0}`")]
    NoDefault(String),
    /// Nothing before the `@` separator.
    #[error("empty handler identity in `{0}`")]
    EmptyHandler(String),
    /// Nothing after the `@` separator.
    #[error("empty method name in `{0}`")]
    EmptyMethod(String),
}

/// A parsed content reference: which handler, which method.
///
/// Lifetime is one hover event; references are parsed fresh each time and
/// never cached.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Reference {
    /// Registered handler identity.
    pub handler: String,
    /// Method to invoke on the handler.
    pub method: String,
}

impl Reference {
    /// Parse a raw reference string.
    ///
    /// Doubled path separators are normalized first (`\\` pairs collapse to
    /// one `\`), since markup generators tend to double-escape handler
    /// identities. A string without `@` is a bare method name resolved
    /// against `default_handler`; otherwise the string splits on the
    /// *first* `@`.
    ///
    /// ```
    /// use tipwire_resolver::Reference;
    /// let r = Reference::parse("app.users@card", None).unwrap();
    /// assert_eq!((r.handler.as_str(), r.method.as_str()), ("app.users", "card"));
    ///
    /// let r = Reference::parse("card", Some("app.users")).unwrap();
    /// assert_eq!(r.handler, "app.users");
    /// ```
    pub fn parse(raw: &str, default_handler: Option<&str>) -> Result<Self, ReferenceError> {
        if raw.is_empty() {
            return Err(ReferenceError::Empty);
        }
        let normalized = raw.replace("\\\\", "\\");
        let Some((handler, method)) = normalized.split_once('@') else {
            return match default_handler {
                Some(handler) => Ok(Self {
                    handler: handler.to_owned(),
                    method: normalized,
                }),
                None => Err(ReferenceError::NoDefault(normalized)),
            };
        };
        if handler.is_empty() {
            return Err(ReferenceError::EmptyHandler(normalized.clone()));
        }
        if method.is_empty() {
            return Err(ReferenceError::EmptyMethod(normalized.clone()));
        }
        Ok(Self {
            handler: handler.to_owned(),
            method: method.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_separator() {
        let r = Reference::parse("app.users@card", None).unwrap();
        assert_eq!(r.handler, "app.users");
        assert_eq!(r.method, "card");

        // Only the first `@` separates; the rest belongs to the method.
        let r = Reference::parse("a@b@c", None).unwrap();
        assert_eq!(r.handler, "a");
        assert_eq!(r.method, "b@c");
    }

    #[test]
    fn bare_method_uses_default_handler() {
        let r = Reference::parse("card", Some("app.users")).unwrap();
        assert_eq!(r.handler, "app.users");
        assert_eq!(r.method, "card");
    }

    #[test]
    fn bare_method_without_default_fails() {
        assert_eq!(
            Reference::parse("card", None),
            Err(ReferenceError::NoDefault("card".to_owned()))
        );
    }

    #[test]
    fn empty_reference_fails() {
        assert_eq!(Reference::parse("", None), Err(ReferenceError::Empty));
        assert_eq!(
            Reference::parse("", Some("app.users")),
            Err(ReferenceError::Empty)
        );
    }

    #[test]
    fn empty_handler_or_method_fails() {
        assert_eq!(
            Reference::parse("@card", None),
            Err(ReferenceError::EmptyHandler("@card".to_owned()))
        );
        assert_eq!(
            Reference::parse("app.users@", None),
            Err(ReferenceError::EmptyMethod("app.users@".to_owned()))
        );
    }

    #[test]
    fn doubled_separators_are_normalized() {
        let r = Reference::parse("App\\\\Widgets\\\\Users@card", None).unwrap();
        assert_eq!(r.handler, "App\\Widgets\\Users");

        // Already-single separators pass through untouched.
        let r = Reference::parse("App\\Widgets@card", None).unwrap();
        assert_eq!(r.handler, "App\\Widgets");
    }
}
