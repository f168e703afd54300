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

//! The error type returned by all client surfaces.

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// Errors come from multiple sources: the service may reject a request, the
/// request model may fail to serialize, or a response payload may fail to
/// deserialize. Most applications just return or log the error. Applications
/// that need to interrogate it can use the kind predicates and accessors, and
/// query [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use azure_client_core::error::Error;
/// match example_function() {
///     Err(e) if e.is_service() => {
///         println!("service rejected the request: {e}");
///     }
///     Err(e) => println!("client-side error: {e}"),
///     Ok(_) => {}
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::service(404, "room not found"))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use azure_client_core::error::Error;
    /// let error = Error::service(404, "room not found");
    /// assert_eq!(error.http_status_code(), Some(404));
    /// ```
    pub fn service<T: Into<String>>(status_code: u16, message: T) -> Self {
        let details = ServiceDetails {
            status_code,
            message: message.into(),
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing a request that could not be serialized.
    ///
    /// This is always a client-side error, generated before any request is
    /// made. It is never transient: the serialization is deterministic and
    /// will fail again with the same input.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// Creates an error representing a response that could not be
    /// deserialized, or a response payload missing a required field.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// The HTTP status code, if the service returned one.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.status_code),
            _ => None,
        }
    }

    /// The service-provided error message, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.message.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::Service(d) => {
                write!(
                    f,
                    "the service rejected the request with HTTP status {}: {}",
                    d.status_code, d.message
                )
            }
            ErrorKind::Serialization => write!(f, "cannot serialize the request"),
            ErrorKind::Deserialization => write!(f, "cannot deserialize the response"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

impl From<wkt::CodecError> for Error {
    fn from(value: wkt::CodecError) -> Self {
        use wkt::CodecError;
        match &value {
            CodecError::SchemaViolation(_) | CodecError::Serialization(_) => Self::ser(value),
            CodecError::MissingRequiredField(_) | CodecError::Deserialization(_) => {
                Self::deser(value)
            }
            // `CodecError` is `#[non_exhaustive]`; all current variants are
            // matched above, so this arm is unreachable today.
            _ => Self::deser(value),
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: u16,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service() {
        let error = Error::service(400, "invalid participants");
        assert!(error.is_service());
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.message(), Some("invalid participants"));
        let display = error.to_string();
        assert!(display.contains("400"), "{display}");
        assert!(display.contains("invalid participants"), "{display}");
    }

    #[test]
    fn serialization_has_source() {
        let cause = serde_json::from_str::<serde_json::Value>("bad").unwrap_err();
        let error = Error::ser(cause);
        assert!(error.is_serialization());
        assert!(error.source().is_some(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
    }

    #[test]
    fn from_codec_error() {
        let error = Error::from(wkt::CodecError::missing_required_field("room"));
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.source().unwrap().to_string().contains("room"));

        let error = Error::from(wkt::CodecError::schema_violation("null timeout"));
        assert!(error.is_serialization(), "{error:?}");
    }
}
