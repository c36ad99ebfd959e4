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

//! Google Web API helpers.
//!
//! This crate contains types and functions shared by the per-service
//! client model crates: the error type raised when a request cannot be
//! encoded, the ordered query parameter mapping, the wire-token tables
//! for enumerations, and the shared base request parameters.
//!
//! The types here do not perform any I/O. Rendering the parameter
//! mapping into a percent-encoded URL, sending the request, and parsing
//! the response body belong to the HTTP layer built on top of these
//! crates.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type returned by every query string encoder.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The errors raised when a request cannot be encoded.
pub mod error;

/// The ordered query parameter mapping and wire-token helpers.
pub mod query_parameter;

/// The trait implemented by every encodable request, and the shared
/// base parameters.
pub mod request;

/// The `Language` enumeration shared by all services.
pub mod language;
