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

use google_api_gax as gax;

use google_api_gax::error::Error;
use google_api_gax::language::Language;
use google_api_gax::query_parameter::{FLAG_DELIMITER, QueryParameters, WireToken, join_flags};
use google_api_gax::request::{ClientParameters, QueryStringRequest};
use time::OffsetDateTime;

/// The unit system used for distance text in the results.
///
/// This setting only affects the text displayed within distance fields;
/// the numeric values are always expressed in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    /// Distances in kilometers and meters.
    #[default]
    Metric,
    /// Distances in miles and feet.
    Imperial,
}

impl WireToken for Units {
    fn token(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "metric" => Some(Self::Metric),
            "imperial" => Some(Self::Imperial),
            _ => None,
        }
    }
}

/// The mode of transport used when calculating directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    /// Requires an arrival or departure time.
    Transit,
}

impl WireToken for TravelMode {
    fn token(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "driving" => Some(Self::Driving),
            "walking" => Some(Self::Walking),
            "bicycling" => Some(Self::Bicycling),
            "transit" => Some(Self::Transit),
            _ => None,
        }
    }
}

/// A route feature the calculated routes should avoid.
///
/// Flag style: any combination may be active, joined with `|` on the
/// wire. An empty set means no restriction and emits nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvoidWay {
    Tolls,
    Highways,
    Ferries,
    Indoor,
}

impl WireToken for AvoidWay {
    fn token(&self) -> &'static str {
        match self {
            Self::Tolls => "tolls",
            Self::Highways => "highways",
            Self::Ferries => "ferries",
            Self::Indoor => "indoor",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "tolls" => Some(Self::Tolls),
            "highways" => Some(Self::Highways),
            "ferries" => Some(Self::Ferries),
            "indoor" => Some(Self::Indoor),
            _ => None,
        }
    }
}

/// A preferred mode of transit.
///
/// Flag style, joined with `|` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitMode {
    Bus,
    Train,
    Subway,
    Tram,
    /// Train, tram, and subway combined.
    Rail,
}

impl TransitMode {
    /// The set preferred when the caller expresses no preference.
    pub fn preferred_default() -> Vec<Self> {
        vec![Self::Bus, Self::Train, Self::Subway, Self::Tram]
    }
}

impl WireToken for TransitMode {
    fn token(&self) -> &'static str {
        match self {
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Subway => "subway",
            Self::Tram => "tram",
            Self::Rail => "rail",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "bus" => Some(Self::Bus),
            "train" => Some(Self::Train),
            "subway" => Some(Self::Subway),
            "tram" => Some(Self::Tram),
            "rail" => Some(Self::Rail),
            _ => None,
        }
    }
}

/// A bias for transit route selection, replacing the service's default
/// best-route choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitRoutingPreference {
    LessWalking,
    FewerTransfers,
}

impl WireToken for TransitRoutingPreference {
    fn token(&self) -> &'static str {
        match self {
            Self::LessWalking => "less_walking",
            Self::FewerTransfers => "fewer_transfers",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "less_walking" => Some(Self::LessWalking),
            "fewer_transfers" => Some(Self::FewerTransfers),
            _ => None,
        }
    }
}

/// The parameters for a directions request.
///
/// Construct with [new][DirectionsRequest::new] and the `set_*`
/// builders; every default is explicit at construction time and the
/// request is never mutated after that. Encoding reads the request
/// through [QueryStringRequest::query_parameters].
///
/// # Example
/// ```
/// # use google_api_maps_directions::model::*;
/// use google_api_gax::request::QueryStringRequest;
/// let request = DirectionsRequest::new("Copenhagen", "Aarhus")
///     .set_units(Units::Imperial)
///     .set_alternatives(true);
/// let params = request.query_parameters()?;
/// assert_eq!(params.get("units"), Some("imperial"));
/// assert_eq!(params.get("alternatives"), Some("true"));
/// # Ok::<(), google_api_gax::error::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DirectionsRequest {
    /// Common parameters (API key), applied before any other field.
    pub client: ClientParameters,

    /// The address or textual latitude/longitude value from which to
    /// calculate directions. Required.
    pub origin: String,

    /// The address or textual latitude/longitude value to which to
    /// calculate directions. Required.
    pub destination: String,

    /// The unit system for distance text. Always emitted.
    pub units: Units,

    /// Route features to avoid. Emitted joined with `|` when non-empty.
    pub avoid: Vec<AvoidWay>,

    /// The mode of transport. Transit requests must also supply an
    /// arrival or departure time.
    pub travel_mode: TravelMode,

    /// The preferred transit modes. Emitted under `mode` whenever
    /// non-empty and additionally under `transit_mode` for transit
    /// requests; an emptied set emits neither.
    pub transit_mode: Vec<TransitMode>,

    /// Bias for transit route selection. Transit requests only.
    pub transit_routing_preference: Option<TransitRoutingPreference>,

    /// The desired arrival time. Transit requests only; encoded as Unix
    /// epoch seconds.
    pub arrival_time: Option<OffsetDateTime>,

    /// The desired departure time. Transit requests only; encoded as
    /// Unix epoch seconds.
    pub departure_time: Option<OffsetDateTime>,

    /// Waypoints altering the route. Joined with `|`; prefix a waypoint
    /// with `via:` to route through it without a stopover.
    pub waypoints: Vec<String>,

    /// Reorder the waypoints into a more efficient route. Prepends the
    /// `optimize:true` sentinel to the joined waypoint list.
    pub optimize_waypoints: bool,

    /// Allow more than one route alternative in the response. Emitted
    /// as `alternatives=true` only when set.
    pub alternatives: bool,

    /// Region bias, as a ccTLD two-character value.
    pub region: Option<String>,

    /// The language for the results. Always emitted.
    pub language: Language,
}

impl DirectionsRequest {
    /// Creates a request with the given endpoints and every other field
    /// at its default.
    pub fn new<O: Into<String>, D: Into<String>>(origin: O, destination: D) -> Self {
        Self {
            client: ClientParameters::new(),
            origin: origin.into(),
            destination: destination.into(),
            units: Units::default(),
            avoid: Vec::new(),
            travel_mode: TravelMode::default(),
            transit_mode: TransitMode::preferred_default(),
            transit_routing_preference: None,
            arrival_time: None,
            departure_time: None,
            waypoints: Vec::new(),
            optimize_waypoints: false,
            alternatives: false,
            region: None,
            language: Language::default(),
        }
    }

    /// Sets the [client][Self::client] field.
    pub fn set_client(mut self, v: ClientParameters) -> Self {
        self.client = v;
        self
    }

    /// Sets the [units][Self::units] field.
    pub fn set_units(mut self, v: Units) -> Self {
        self.units = v;
        self
    }

    /// Sets the [avoid][Self::avoid] field.
    pub fn set_avoid<I: IntoIterator<Item = AvoidWay>>(mut self, v: I) -> Self {
        self.avoid = v.into_iter().collect();
        self
    }

    /// Sets the [travel_mode][Self::travel_mode] field.
    pub fn set_travel_mode(mut self, v: TravelMode) -> Self {
        self.travel_mode = v;
        self
    }

    /// Sets the [transit_mode][Self::transit_mode] field.
    pub fn set_transit_mode<I: IntoIterator<Item = TransitMode>>(mut self, v: I) -> Self {
        self.transit_mode = v.into_iter().collect();
        self
    }

    /// Sets the [transit_routing_preference][Self::transit_routing_preference] field.
    pub fn set_transit_routing_preference(mut self, v: TransitRoutingPreference) -> Self {
        self.transit_routing_preference = Some(v);
        self
    }

    /// Sets the [arrival_time][Self::arrival_time] field.
    pub fn set_arrival_time(mut self, v: OffsetDateTime) -> Self {
        self.arrival_time = Some(v);
        self
    }

    /// Sets the [departure_time][Self::departure_time] field.
    pub fn set_departure_time(mut self, v: OffsetDateTime) -> Self {
        self.departure_time = Some(v);
        self
    }

    /// Sets the [waypoints][Self::waypoints] field.
    pub fn set_waypoints<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.waypoints = v.into_iter().map(|w| w.into()).collect();
        self
    }

    /// Sets the [optimize_waypoints][Self::optimize_waypoints] field.
    pub fn set_optimize_waypoints(mut self, v: bool) -> Self {
        self.optimize_waypoints = v;
        self
    }

    /// Sets the [alternatives][Self::alternatives] field.
    pub fn set_alternatives(mut self, v: bool) -> Self {
        self.alternatives = v;
        self
    }

    /// Sets the [region][Self::region] field.
    pub fn set_region<V: Into<String>>(mut self, v: V) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets the [language][Self::language] field.
    pub fn set_language(mut self, v: Language) -> Self {
        self.language = v;
        self
    }
}

impl QueryStringRequest for DirectionsRequest {
    fn path(&self) -> &'static str {
        "maps/api/directions/json"
    }

    fn query_parameters(&self) -> gax::Result<QueryParameters> {
        let origin = gax::error::required("origin", &self.origin)?;
        let destination = gax::error::required("destination", &self.destination)?;
        if self.travel_mode == TravelMode::Transit
            && self.arrival_time.is_none()
            && self.departure_time.is_none()
        {
            return Err(Error::InvalidCombination {
                fields: &["arrival_time", "departure_time"],
                rule: "transit directions require an arrival time or a departure time",
            });
        }

        let mut params = QueryParameters::new();
        self.client.apply(&mut params);
        params.push("origin", origin);
        params.push("destination", destination);
        params.push("units", self.units.token());
        // The service reads the preferred transit modes from `mode` on
        // every request. An emptied set is the "none" sentinel and
        // emits nothing.
        if !self.transit_mode.is_empty() {
            params.push("mode", join_flags(&self.transit_mode));
        }
        params.push("language", self.language.token());
        if let Some(region) = &self.region {
            params.push("region", region.clone());
        }
        if self.alternatives {
            params.push("alternatives", "true");
        }
        if !self.avoid.is_empty() {
            params.push("avoid", join_flags(&self.avoid));
        }
        if !self.waypoints.is_empty() {
            let mut tokens = Vec::with_capacity(self.waypoints.len() + 1);
            if self.optimize_waypoints {
                tokens.push("optimize:true".to_string());
            }
            tokens.extend(self.waypoints.iter().cloned());
            params.push("waypoints", tokens.join(FLAG_DELIMITER));
        }
        if self.travel_mode == TravelMode::Transit {
            if !self.transit_mode.is_empty() {
                params.push("transit_mode", join_flags(&self.transit_mode));
            }
            if let Some(preference) = self.transit_routing_preference {
                params.push("transit_routing_preference", preference.token());
            }
            if let Some(t) = &self.arrival_time {
                params.push("arrival_time", t.unix_timestamp().to_string());
            }
            if let Some(t) = &self.departure_time {
                params.push("departure_time", t.unix_timestamp().to_string());
            }
        }
        tracing::trace!(
            path = self.path(),
            count = params.len(),
            "encoded directions request"
        );
        Ok(params)
    }
}

/// A distance or duration with both display text and numeric value.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: i64,
}

/// An encoded polyline.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Polyline {
    #[serde(default)]
    pub points: String,
}

/// A single step of a route leg.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Step {
    #[serde(default)]
    pub html_instructions: String,
    pub travel_mode: Option<String>,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub polyline: Option<Polyline>,
}

/// A leg of a route, between an origin, destination, or stopover
/// waypoint.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Leg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single route from the origin to the destination.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Route {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub copyrights: String,
    #[serde(default)]
    pub warnings: Vec<String>,
    /// The order the waypoints were visited, present when the request
    /// asked for waypoint optimization.
    #[serde(default)]
    pub waypoint_order: Vec<u32>,
    pub overview_polyline: Option<Polyline>,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// How a waypoint of the request was geocoded.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GeocodedWaypoint {
    pub geocoder_status: Option<String>,
    pub place_id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// The response for a directions request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub geocoded_waypoints: Vec<GeocodedWaypoint>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_api_gax::query_parameter::parse_flags;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Units::Metric, "metric")]
    #[test_case(Units::Imperial, "imperial")]
    fn units_tokens(units: Units, want: &str) {
        assert_eq!(units.token(), want);
        assert_eq!(Units::from_token(want), Some(units));
    }

    #[test_case(TravelMode::Driving, "driving")]
    #[test_case(TravelMode::Walking, "walking")]
    #[test_case(TravelMode::Bicycling, "bicycling")]
    #[test_case(TravelMode::Transit, "transit")]
    fn travel_mode_tokens(mode: TravelMode, want: &str) {
        assert_eq!(mode.token(), want);
        assert_eq!(TravelMode::from_token(want), Some(mode));
    }

    #[test]
    fn transit_mode_round_trip() -> anyhow::Result<()> {
        let set = TransitMode::preferred_default();
        let joined = join_flags(&set);
        assert_eq!(joined, "bus|train|subway|tram");
        let parsed = parse_flags::<TransitMode>(&joined)?;
        assert_eq!(parsed, set);
        Ok(())
    }

    #[test]
    fn avoid_round_trip() -> anyhow::Result<()> {
        let set = vec![AvoidWay::Tolls, AvoidWay::Ferries];
        let parsed = parse_flags::<AvoidWay>(&join_flags(&set))?;
        assert_eq!(parsed, set);
        Ok(())
    }

    #[test]
    fn defaults() {
        let request = DirectionsRequest::new("A", "B");
        assert_eq!(request.units, Units::Metric);
        assert_eq!(request.travel_mode, TravelMode::Driving);
        assert_eq!(request.transit_mode, TransitMode::preferred_default());
        assert_eq!(request.language, Language::English);
        assert!(request.avoid.is_empty());
        assert!(!request.alternatives);
        assert_eq!(request.region, None);
    }

    #[test]
    fn missing_origin() {
        let request = DirectionsRequest::new("", "B");
        let got = request.query_parameters();
        assert_eq!(got, Err(Error::MissingRequiredField("origin")));
    }

    #[test]
    fn missing_destination() {
        let request = DirectionsRequest::new("A", "  ");
        let got = request.query_parameters();
        assert_eq!(got, Err(Error::MissingRequiredField("destination")));
    }

    #[test]
    fn transit_requires_a_time() {
        let request = DirectionsRequest::new("A", "B").set_travel_mode(TravelMode::Transit);
        let got = request.query_parameters();
        assert!(
            matches!(
                got,
                Err(Error::InvalidCombination { fields, .. })
                    if fields == ["arrival_time", "departure_time"]
            ),
            "{got:?}"
        );
    }

    #[test]
    fn encode_does_not_mutate() -> anyhow::Result<()> {
        let request = DirectionsRequest::new("A", "B").set_alternatives(true);
        let snapshot = request.clone();
        let first = request.query_parameters()?;
        let second = request.query_parameters()?;
        assert_eq!(first, second);
        assert_eq!(request, snapshot);
        Ok(())
    }

    #[test]
    fn key_applied_first() -> anyhow::Result<()> {
        let request = DirectionsRequest::new("A", "B")
            .set_client(ClientParameters::new().set_key("test-key"));
        let params = request.query_parameters()?;
        assert_eq!(params.iter().next(), Some(("key", "test-key")));
        Ok(())
    }

    #[test]
    fn response_from_json() -> anyhow::Result<()> {
        let body = json!({
            "status": "OK",
            "routes": [{
                "summary": "E45",
                "waypoint_order": [1, 0],
                "legs": [{
                    "distance": { "text": "187 km", "value": 187000 },
                    "duration": { "text": "2 hours", "value": 7200 },
                    "start_address": "Copenhagen",
                    "end_address": "Aarhus",
                    "steps": []
                }]
            }]
        });
        let response = serde_json::from_value::<DirectionsResponse>(body)?;
        assert_eq!(response.status, "OK");
        assert_eq!(response.error_message, None);
        let route = &response.routes[0];
        assert_eq!(route.summary, "E45");
        assert_eq!(route.waypoint_order, vec![1, 0]);
        assert_eq!(
            route.legs[0].distance,
            Some(TextValue {
                text: "187 km".into(),
                value: 187000
            })
        );
        Ok(())
    }

    #[test]
    fn response_absent_fields_are_empty() -> anyhow::Result<()> {
        let response = serde_json::from_value::<DirectionsResponse>(json!({}))?;
        assert_eq!(response.status, "");
        assert!(response.routes.is_empty());
        assert!(response.geocoded_waypoints.is_empty());
        Ok(())
    }
}
