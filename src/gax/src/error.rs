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

/// The error returned when a request cannot be encoded.
///
/// Encoding a request validates it first. Validation failures are
/// caller-input bugs, not transient failures: there is no retry or
/// recovery at this layer, and no partial parameter mapping is ever
/// returned. Applications are expected to surface these errors
/// directly.
///
/// # Example
/// ```
/// use google_api_gax::error::Error;
/// fn report(e: &Error) {
///     match e {
///         Error::MissingRequiredField(field) => {
///             println!("fill in `{field}` before sending the request");
///         }
///         Error::InvalidCombination { fields, rule } => {
///             println!("fields {fields:?} violate: {rule}");
///         }
///         _ => println!("unexpected error {e}"),
///     }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A mandatory field was blank or absent at encode time.
    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),

    /// A cross-field precondition failed, e.g. a transit directions
    /// request with neither an arrival nor a departure time.
    #[error("invalid combination of fields {fields:?}: {rule}")]
    InvalidCombination {
        /// The offending fields.
        fields: &'static [&'static str],
        /// The violated rule, in plain words.
        rule: &'static str,
    },
}

impl Error {
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField(field)
    }
}

/// Fails with [Error::MissingRequiredField] if `value` is blank.
///
/// Required string fields default to the empty string; a field
/// containing only whitespace is treated as absent too.
///
/// # Example
/// ```
/// # use google_api_gax::error::{required, Error};
/// assert!(required("origin", "Copenhagen").is_ok());
/// assert_eq!(
///     required("origin", "  "),
///     Err(Error::MissingRequiredField("origin"))
/// );
/// ```
pub fn required<'v>(field: &'static str, value: &'v str) -> crate::Result<&'v str> {
    if value.trim().is_empty() {
        return Err(Error::missing(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_present() -> anyhow::Result<()> {
        let got = required("origin", "Copenhagen")?;
        assert_eq!(got, "Copenhagen");
        Ok(())
    }

    #[test]
    fn required_blank() {
        for value in ["", " ", "\t\n"] {
            let got = required("destination", value);
            assert_eq!(got, Err(Error::MissingRequiredField("destination")));
        }
    }

    #[test]
    fn display_names_the_field() {
        let e = Error::MissingRequiredField("origin");
        assert!(e.to_string().contains("origin"), "{e}");

        let e = Error::InvalidCombination {
            fields: &["arrival_time", "departure_time"],
            rule: "transit requests need an arrival or departure time",
        };
        let msg = e.to_string();
        assert!(msg.contains("arrival_time"), "{msg}");
        assert!(msg.contains("departure_time"), "{msg}");
    }
}
