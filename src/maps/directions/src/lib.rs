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

//! Client models for the Google Maps Directions API.
//!
//! This crate defines the typed request for the directions operation,
//! its validation and query-string encoding rules, and the response
//! record shapes. It performs no I/O: the encoded parameter mapping is
//! handed to an HTTP layer for percent-encoding and transport.
//!
//! # Example
//! ```
//! # use google_api_maps_directions::model::DirectionsRequest;
//! use google_api_gax::request::QueryStringRequest;
//! let request = DirectionsRequest::new("Copenhagen", "Aarhus");
//! let params = request.query_parameters()?;
//! assert_eq!(params.get("origin"), Some("Copenhagen"));
//! assert_eq!(params.get("units"), Some("metric"));
//! # Ok::<(), google_api_gax::error::Error>(())
//! ```

pub use google_api_gax as gax;

/// The request, enumerations, and response records for the directions
/// operation.
pub mod model;
