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

//! Response types.
//!
//! A service response consists of a typed body plus some transport metadata.
//! The transport layer constructs one [Response] per request/response round
//! trip; it is never mutated afterwards and never shared across requests.

/// Represents a service response: a typed body and its transport metadata.
///
/// # Example
/// ```
/// # use azure_client_core::response::Response;
/// let response = Response::from("test".to_string());
/// assert_eq!(response.body().as_str(), "test");
/// assert_eq!(response.status(), http::StatusCode::OK);
/// ```
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with default metadata.
    ///
    /// Useful when mocking clients in tests.
    pub fn from(body: T) -> Self {
        Self {
            parts: Parts::default(),
            body,
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use azure_client_core::response::{Parts, Response};
    /// let parts = Parts::new().set_status(http::StatusCode::CREATED);
    /// let response = Response::from_parts(parts, ());
    /// assert_eq!(response.status(), http::StatusCode::CREATED);
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the HTTP status code of this response.
    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response, other than the body.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status: http::StatusCode,
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Default for Parts {
    fn default() -> Self {
        Self {
            status: http::StatusCode::OK,
            headers: http::HeaderMap::new(),
        }
    }
}

impl Parts {
    /// Create a new instance with status `200 OK` and no headers.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the HTTP status code.
    pub fn set_status<V>(mut self, v: V) -> Self
    where
        V: Into<http::StatusCode>,
    {
        self.status = v.into();
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.into_body().as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new()
            .set_status(http::StatusCode::CREATED)
            .set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.status(), http::StatusCode::CREATED);
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.status, http::StatusCode::CREATED);
        assert_eq!(parts.headers, headers);
    }
}
