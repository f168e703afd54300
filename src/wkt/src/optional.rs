// Copyright 2025 Azure Rust Client Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An explicit tagged optional for model fields.

use crate::CodecError;

/// The state of one model field: absent from the payload, or present with a
/// value.
///
/// A field that was never set must not appear in the serialized payload. A
/// field explicitly set to a native default (empty string, zero) still
/// serializes. For schema-nullable fields use `Optional<Option<T>>`, which
/// keeps absent, null, and value as three distinct states.
///
/// Unlike `std::option::Option`, this type offers no implicit conversions or
/// defaulting accessors: presence checks are visible at every call site.
///
/// # Example
/// ```
/// use azure_client_wkt::Optional;
/// let ttl = Optional::set(3600_i64);
/// assert!(ttl.is_set());
/// assert_eq!(ttl.value(), Some(&3600));
/// assert_eq!(Optional::<i64>::unset().value(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// The field was never set, and never appears on the wire.
    Unset,
    /// The field holds a value, possibly a native default.
    Set(T),
}

// Not derived: the derive would require `T: Default`, and unset needs no
// value.
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Optional<T> {
    /// Creates an optional holding `value`.
    pub fn set(value: T) -> Self {
        Self::Set(value)
    }

    /// Creates an unset optional. Equivalent to `Optional::default()`.
    pub fn unset() -> Self {
        Self::Unset
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the contained value, or `None` if unset.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Set(v) => Some(v),
            Self::Unset => None,
        }
    }

    /// Consumes the optional, returning the contained value if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Set(v) => Some(v),
            Self::Unset => None,
        }
    }

    /// Returns the contained value, or [CodecError::MissingRequiredField]
    /// naming `field` if unset.
    ///
    /// This is the consumption point for required fields: the codec leaves a
    /// required field unset when it is absent or null on the wire, and the
    /// error surfaces here.
    ///
    /// # Example
    /// ```
    /// use azure_client_wkt::Optional;
    /// let id = Optional::<String>::unset();
    /// let err = id.require("id").unwrap_err();
    /// assert!(err.to_string().contains("id"));
    /// ```
    pub fn require(&self, field: &str) -> Result<&T, CodecError> {
        self.value()
            .ok_or_else(|| CodecError::missing_required_field(field))
    }

    /// Applies `f` to the contained value, preserving the set/unset state.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Set(v) => Optional::Set(f(v)),
            Self::Unset => Optional::Unset,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Set(v),
            None => Self::Unset,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset() {
        let v = Optional::<String>::default();
        assert!(v.is_unset());
        assert!(!v.is_set());
        assert_eq!(v.value(), None);
    }

    #[test]
    fn set_native_default_is_still_set() {
        let v = Optional::set(String::new());
        assert!(v.is_set());
        assert_eq!(v.value(), Some(&String::new()));
        let v = Optional::set(0_i64);
        assert!(v.is_set());
    }

    #[test]
    fn require_reports_field_name() {
        let v = Optional::<bool>::unset();
        let err = v.require("enabled").unwrap_err();
        assert!(
            matches!(&err, CodecError::MissingRequiredField(f) if f == "enabled"),
            "{err:?}"
        );
        let v = Optional::set(true);
        assert_eq!(v.require("enabled").unwrap(), &true);
    }

    #[test]
    fn nullable_keeps_three_states() {
        let absent = Optional::<Option<i32>>::unset();
        let null = Optional::set(None::<i32>);
        let value = Optional::set(Some(7));
        assert!(absent.is_unset());
        assert_eq!(null.value(), Some(&None));
        assert_eq!(value.value(), Some(&Some(7)));
    }

    #[test]
    fn conversions() {
        let v: Optional<i32> = Some(5).into();
        assert_eq!(v, Optional::Set(5));
        let v: Optional<i32> = None.into();
        assert!(v.is_unset());
        let o: Option<i32> = Optional::set(5).into();
        assert_eq!(o, Some(5));
    }

    #[test]
    fn map_preserves_state() {
        let v = Optional::set(2).map(|x| x * 2);
        assert_eq!(v.value(), Some(&4));
        let v = Optional::<i32>::unset().map(|x| x * 2);
        assert!(v.is_unset());
    }
}
