// Copyright 2025 Google LLC
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

use crate::query_parameter::QueryParameters;

/// A request that encodes itself into an ordered query parameter
/// mapping.
///
/// Implementations validate first and encode second: a request with a
/// blank mandatory field or a violated cross-field precondition fails
/// with the corresponding [error][crate::error::Error] before any
/// parameter is produced. Encoding never mutates the request, performs
/// no I/O, and is idempotent: encoding the same unchanged request twice
/// yields identical mappings.
pub trait QueryStringRequest {
    /// The fixed operation base path, e.g. `maps/api/directions/json`.
    fn path(&self) -> &'static str;

    /// Validates the request and returns the parameter mapping.
    fn query_parameters(&self) -> crate::Result<QueryParameters>;
}

/// Parameters common to every operation, applied before any
/// operation-specific field.
///
/// The only common parameter at this layer is the static API key; the
/// output format is part of the operation path. Requests hold a
/// `ClientParameters` by value and apply it first, so the key always
/// leads the mapping.
///
/// # Example
/// ```
/// # use google_api_gax::request::ClientParameters;
/// # use google_api_gax::query_parameter::QueryParameters;
/// let client = ClientParameters::new().set_key("my-api-key");
/// let mut params = QueryParameters::new();
/// client.apply(&mut params);
/// assert_eq!(params.get("key"), Some("my-api-key"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ClientParameters {
    /// The API key attached to every request, if any.
    pub key: Option<String>,
}

impl ClientParameters {
    /// Creates parameters with no key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [key][Self::key] field.
    pub fn set_key<V: Into<String>>(mut self, v: V) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Appends the common parameters to `params`.
    pub fn apply(&self, params: &mut QueryParameters) {
        if let Some(key) = &self.key {
            params.push("key", key.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_leads_the_mapping() {
        let client = ClientParameters::new().set_key("test-key");
        let mut params = QueryParameters::new();
        client.apply(&mut params);
        params.push("origin", "A");
        let got = params.iter().next();
        assert_eq!(got, Some(("key", "test-key")));
    }

    #[test]
    fn absent_key_emits_nothing() {
        let client = ClientParameters::new();
        let mut params = QueryParameters::new();
        client.apply(&mut params);
        assert!(params.is_empty());
    }
}
