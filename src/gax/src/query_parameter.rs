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

//! Defines the ordered query parameter mapping and wire-token helpers.
//!
//! Query parameters in the Google web APIs are typed fields in the
//! request object: enumerations with canonical lowercase tokens,
//! flag-style enumerations joined with `|`, timestamps encoded as Unix
//! epoch seconds, and plain scalars. This module holds the pieces every
//! service crate shares: the ordered name/value mapping the encoders
//! produce, and the token tables for enumerations.
//!
//! The mapping is not percent-encoded. Rendering it into a URL is the
//! HTTP layer's job.

/// The delimiter joining the active tokens of a flag-style enumeration
/// and the entries of joined list parameters.
pub const FLAG_DELIMITER: &str = "|";

/// An ordered mapping of parameter names to string values.
///
/// Built fresh by every encode call and handed to the HTTP layer for
/// query-string rendering. Keys are unique per request; insertion order
/// is stable for a given request but recipients are order-insensitive.
///
/// # Example
/// ```
/// # use google_api_gax::query_parameter::QueryParameters;
/// let mut params = QueryParameters::new();
/// params.push("origin", "Copenhagen");
/// params.push("units", "metric");
/// assert_eq!(params.get("origin"), Some("Copenhagen"));
/// assert!(!params.contains("region"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParameters(Vec<(String, String)>);

impl QueryParameters {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter. Callers are responsible for pushing each
    /// name at most once.
    pub fn push<V: Into<String>>(&mut self, name: &'static str, value: V) {
        self.0.push((name.to_string(), value.into()));
    }

    /// Returns the value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the mapping contains `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no parameter has been pushed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for QueryParameters {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// The canonical wire representation of an enumeration value.
///
/// Each service enumeration carries an explicit, exhaustive mapping
/// between its variants and the exact string sent on the wire. The
/// mapping is a plain match in both directions, so decoding the token
/// of any variant yields that variant back.
pub trait WireToken: Sized {
    /// The exact string this value serializes to.
    fn token(&self) -> &'static str;

    /// The inverse of [token][WireToken::token]. Returns `None` for
    /// strings outside the closed set.
    fn from_token(token: &str) -> Option<Self>;
}

/// The error returned when a wire string contains an unrecognized token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized wire token `{0}`")]
pub struct UnknownToken(pub String);

/// Joins the active tokens of a flag set with [FLAG_DELIMITER].
///
/// An empty set is the "none" sentinel; callers never emit it.
pub fn join_flags<T: WireToken>(flags: &[T]) -> String {
    flags
        .iter()
        .map(WireToken::token)
        .collect::<Vec<_>>()
        .join(FLAG_DELIMITER)
}

/// Splits a joined wire string back into the active flag set.
///
/// This is the inverse of [join_flags]: for any set of variants,
/// parsing the joined string reconstructs the set in order.
pub fn parse_flags<T: WireToken>(joined: &str) -> std::result::Result<Vec<T>, UnknownToken> {
    joined
        .split(FLAG_DELIMITER)
        .filter(|t| !t.is_empty())
        .map(|t| T::from_token(t).ok_or_else(|| UnknownToken(t.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    impl WireToken for Color {
        fn token(&self) -> &'static str {
            match self {
                Self::Red => "red",
                Self::Green => "green",
                Self::Blue => "blue",
            }
        }
        fn from_token(token: &str) -> Option<Self> {
            match token {
                "red" => Some(Self::Red),
                "green" => Some(Self::Green),
                "blue" => Some(Self::Blue),
                _ => None,
            }
        }
    }

    #[test]
    fn push_preserves_order() {
        let mut params = QueryParameters::new();
        params.push("origin", "A");
        params.push("destination", "B");
        params.push("units", "metric");
        let got = params.iter().map(|(n, _)| n).collect::<Vec<_>>();
        assert_eq!(got, vec!["origin", "destination", "units"]);
        assert_eq!(params.len(), 3);
        assert!(!params.is_empty());
    }

    #[test]
    fn get_and_contains() {
        let mut params = QueryParameters::new();
        params.push("language", "en");
        assert_eq!(params.get("language"), Some("en"));
        assert_eq!(params.get("region"), None);
        assert!(params.contains("language"));
        assert!(!params.contains("region"));
    }

    #[test]
    fn into_iter_yields_pairs() {
        let mut params = QueryParameters::new();
        params.push("alternatives", "true");
        let got = params.into_iter().collect::<Vec<_>>();
        assert_eq!(got, vec![("alternatives".to_string(), "true".to_string())]);
    }

    #[test_case(&[], ""; "empty set")]
    #[test_case(&[Color::Red], "red"; "single")]
    #[test_case(&[Color::Red, Color::Blue], "red|blue"; "pair")]
    #[test_case(&[Color::Blue, Color::Green, Color::Red], "blue|green|red"; "order preserved")]
    fn join(flags: &[Color], want: &str) {
        assert_eq!(join_flags(flags), want);
    }

    #[test_case("red|blue"; "pair")]
    #[test_case("blue|green|red"; "all")]
    #[test_case(""; "empty")]
    fn flags_round_trip(joined: &str) -> anyhow::Result<()> {
        let set = parse_flags::<Color>(joined)?;
        assert_eq!(join_flags(&set), joined);
        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_token() {
        let got = parse_flags::<Color>("red|mauve");
        assert_eq!(got, Err(UnknownToken("mauve".to_string())));
    }
}
