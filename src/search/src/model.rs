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

/// The SafeSearch filtering level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SafetyLevel {
    /// No filtering. The API default; emits nothing.
    #[default]
    Off,
    /// Moderate filtering.
    Medium,
    /// Highest level of filtering.
    High,
}

impl WireToken for SafetyLevel {
    fn token(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "off" => Some(Self::Off),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Whether results are limited to webpages or images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchType {
    /// The API default; emits nothing.
    #[default]
    Web,
    Image,
}

impl WireToken for SearchType {
    fn token(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Image => "image",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "web" => Some(Self::Web),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}

/// The unit for a date restriction.
///
/// Encoded as `<token><number>`, e.g. `d7` for the past seven days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateRestrictType {
    Day,
    Week,
    Month,
    Year,
}

impl WireToken for DateRestrictType {
    fn token(&self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "m",
            Self::Year => "y",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "d" => Some(Self::Day),
            "w" => Some(Self::Week),
            "m" => Some(Self::Month),
            "y" => Some(Self::Year),
            _ => None,
        }
    }
}

/// A licensing filter.
///
/// Flag style: any combination may be active, joined with `|` on the
/// wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RightsType {
    PublicDomain,
    Attribute,
    ShareAlike,
    NonCommercial,
    NonDerived,
}

impl WireToken for RightsType {
    fn token(&self) -> &'static str {
        match self {
            Self::PublicDomain => "cc_publicdomain",
            Self::Attribute => "cc_attribute",
            Self::ShareAlike => "cc_sharealike",
            Self::NonCommercial => "cc_noncommercial",
            Self::NonDerived => "cc_nonderived",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "cc_publicdomain" => Some(Self::PublicDomain),
            "cc_attribute" => Some(Self::Attribute),
            "cc_sharealike" => Some(Self::ShareAlike),
            "cc_noncommercial" => Some(Self::NonCommercial),
            "cc_nonderived" => Some(Self::NonDerived),
            _ => None,
        }
    }
}

/// Whether the site named in `site_search` is included or excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteSearchFilter {
    Include,
    Exclude,
}

impl WireToken for SiteSearchFilter {
    fn token(&self) -> &'static str {
        match self {
            Self::Include => "i",
            Self::Exclude => "e",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "i" => Some(Self::Include),
            "e" => Some(Self::Exclude),
            _ => None,
        }
    }
}

/// A country, used for geolocation boosting (`gl`) and country
/// restriction (`cr`).
///
/// The wire representation is the two-letter country code; the `cr`
/// parameter wraps it in the `countryXX` collection form via
/// [collection][Country::collection].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Country {
    Australia,
    Austria,
    Belgium,
    Brazil,
    Canada,
    China,
    Czechia,
    Denmark,
    Finland,
    France,
    Germany,
    Greece,
    India,
    Indonesia,
    Ireland,
    Italy,
    Japan,
    Korea,
    Mexico,
    Netherlands,
    Norway,
    Poland,
    Portugal,
    Russia,
    Spain,
    Sweden,
    Switzerland,
    Taiwan,
    Turkey,
    UnitedKingdom,
    UnitedStates,
}

impl Country {
    /// The country collection token used by the `cr` parameter.
    pub fn collection(&self) -> String {
        format!("country{}", self.token().to_uppercase())
    }
}

impl WireToken for Country {
    fn token(&self) -> &'static str {
        match self {
            Self::Australia => "au",
            Self::Austria => "at",
            Self::Belgium => "be",
            Self::Brazil => "br",
            Self::Canada => "ca",
            Self::China => "cn",
            Self::Czechia => "cz",
            Self::Denmark => "dk",
            Self::Finland => "fi",
            Self::France => "fr",
            Self::Germany => "de",
            Self::Greece => "gr",
            Self::India => "in",
            Self::Indonesia => "id",
            Self::Ireland => "ie",
            Self::Italy => "it",
            Self::Japan => "jp",
            Self::Korea => "kr",
            Self::Mexico => "mx",
            Self::Netherlands => "nl",
            Self::Norway => "no",
            Self::Poland => "pl",
            Self::Portugal => "pt",
            Self::Russia => "ru",
            Self::Spain => "es",
            Self::Sweden => "se",
            Self::Switzerland => "ch",
            Self::Taiwan => "tw",
            Self::Turkey => "tr",
            Self::UnitedKingdom => "uk",
            Self::UnitedStates => "us",
        }
    }
    fn from_token(token: &str) -> Option<Self> {
        let v = match token {
            "au" => Self::Australia,
            "at" => Self::Austria,
            "be" => Self::Belgium,
            "br" => Self::Brazil,
            "ca" => Self::Canada,
            "cn" => Self::China,
            "cz" => Self::Czechia,
            "dk" => Self::Denmark,
            "fi" => Self::Finland,
            "fr" => Self::France,
            "de" => Self::Germany,
            "gr" => Self::Greece,
            "in" => Self::India,
            "id" => Self::Indonesia,
            "ie" => Self::Ireland,
            "it" => Self::Italy,
            "jp" => Self::Japan,
            "kr" => Self::Korea,
            "mx" => Self::Mexico,
            "nl" => Self::Netherlands,
            "no" => Self::Norway,
            "pl" => Self::Poland,
            "pt" => Self::Portugal,
            "ru" => Self::Russia,
            "es" => Self::Spain,
            "se" => Self::Sweden,
            "ch" => Self::Switzerland,
            "tw" => Self::Taiwan,
            "tr" => Self::Turkey,
            "uk" => Self::UnitedKingdom,
            "us" => Self::UnitedStates,
            _ => return None,
        };
        Some(v)
    }
}

/// The parameters for a web search request.
///
/// Construct with [new][WebSearchRequest::new] and the `set_*`
/// builders; every default is explicit at construction time and the
/// request is never mutated after that.
///
/// # Example
/// ```
/// # use google_api_search::model::*;
/// use google_api_gax::request::QueryStringRequest;
/// let request = WebSearchRequest::new("rust", "engine-id")
///     .set_number(5)
///     .set_safety_level(SafetyLevel::High);
/// let params = request.query_parameters()?;
/// assert_eq!(params.get("num"), Some("5"));
/// assert_eq!(params.get("safe"), Some("high"));
/// # Ok::<(), google_api_gax::error::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct WebSearchRequest {
    /// Common parameters (API key), applied before any other field.
    pub client: ClientParameters,

    /// The search expression. Required.
    pub query: String,

    /// The identifier of the custom search engine. Required.
    pub search_engine_id: String,

    /// Number of results to return, between 1 and 10 inclusive.
    pub number: Option<i32>,

    /// The user interface language. Always emitted; setting it
    /// explicitly improves result quality.
    pub interface_language: Language,

    /// Geolocation of the end user, boosting matching results.
    pub geo_location: Option<Country>,

    /// Restricts results to documents originating in a country.
    pub country_restriction: Option<Country>,

    /// The duplicate content filter. On by default; only turning it
    /// off emits a parameter (`filter=0`).
    pub filter: bool,

    /// The Simplified and Traditional Chinese Search feature. On by
    /// default; only turning it off emits a parameter (`c2coff=1`).
    pub chinese_translation: bool,

    /// The local Google domain to perform the search on, e.g.
    /// `google.de`.
    pub googlehost: Option<String>,

    /// Restricts results to pages from the given site.
    pub site_search: Option<String>,

    /// Include or exclude the `site_search` site.
    pub site_search_filter: Option<SiteSearchFilter>,

    /// A phrase all result documents must contain.
    pub exact_terms: Option<String>,

    /// A word or phrase no result document may contain.
    pub exclude_terms: Option<String>,

    /// Additional terms of which each result must contain at least one.
    pub or_terms: Option<String>,

    /// Terms appended to the query as if combined with AND.
    pub and_terms: Option<String>,

    /// All results must link to this URL.
    pub link_site: Option<String>,

    /// All results must be pages related to this URL.
    pub related_site: Option<String>,

    /// The index of the first result. Always emitted; defaults to 1.
    pub start_index: i32,

    /// The sort expression to apply to the results.
    pub sort: Option<String>,

    /// SafeSearch level. Emitted when not [SafetyLevel::Off].
    pub safety_level: SafetyLevel,

    /// Licensing filters, joined with `|` when non-empty.
    pub rights: Vec<RightsType>,

    /// File extensions to restrict results to, joined with `|` when
    /// non-empty.
    pub file_types: Vec<String>,

    /// The unit of the date restriction. Must be set together with
    /// [date_restrict_number][Self::date_restrict_number].
    pub date_restrict_type: Option<DateRestrictType>,

    /// How many past days, weeks, months, or years to restrict to.
    pub date_restrict_number: Option<i32>,

    /// Web or image results. Emitted when not [SearchType::Web].
    pub search_type: SearchType,

    /// Starting value of an inclusive search range.
    pub low_range: Option<i32>,

    /// Ending value of an inclusive search range.
    pub high_range: Option<i32>,
}

impl WebSearchRequest {
    /// Creates a request with the given query and engine and every
    /// other field at its default.
    pub fn new<Q: Into<String>, E: Into<String>>(query: Q, search_engine_id: E) -> Self {
        Self {
            client: ClientParameters::new(),
            query: query.into(),
            search_engine_id: search_engine_id.into(),
            number: None,
            interface_language: Language::default(),
            geo_location: None,
            country_restriction: None,
            filter: true,
            chinese_translation: true,
            googlehost: None,
            site_search: None,
            site_search_filter: None,
            exact_terms: None,
            exclude_terms: None,
            or_terms: None,
            and_terms: None,
            link_site: None,
            related_site: None,
            start_index: 1,
            sort: None,
            safety_level: SafetyLevel::default(),
            rights: Vec::new(),
            file_types: Vec::new(),
            date_restrict_type: None,
            date_restrict_number: None,
            search_type: SearchType::default(),
            low_range: None,
            high_range: None,
        }
    }

    /// Sets the [client][Self::client] field.
    pub fn set_client(mut self, v: ClientParameters) -> Self {
        self.client = v;
        self
    }

    /// Sets the [number][Self::number] field.
    pub fn set_number(mut self, v: i32) -> Self {
        self.number = Some(v);
        self
    }

    /// Sets the [interface_language][Self::interface_language] field.
    pub fn set_interface_language(mut self, v: Language) -> Self {
        self.interface_language = v;
        self
    }

    /// Sets the [geo_location][Self::geo_location] field.
    pub fn set_geo_location(mut self, v: Country) -> Self {
        self.geo_location = Some(v);
        self
    }

    /// Sets the [country_restriction][Self::country_restriction] field.
    pub fn set_country_restriction(mut self, v: Country) -> Self {
        self.country_restriction = Some(v);
        self
    }

    /// Sets the [filter][Self::filter] field.
    pub fn set_filter(mut self, v: bool) -> Self {
        self.filter = v;
        self
    }

    /// Sets the [chinese_translation][Self::chinese_translation] field.
    pub fn set_chinese_translation(mut self, v: bool) -> Self {
        self.chinese_translation = v;
        self
    }

    /// Sets the [googlehost][Self::googlehost] field.
    pub fn set_googlehost<V: Into<String>>(mut self, v: V) -> Self {
        self.googlehost = Some(v.into());
        self
    }

    /// Sets the [site_search][Self::site_search] field.
    pub fn set_site_search<V: Into<String>>(mut self, v: V) -> Self {
        self.site_search = Some(v.into());
        self
    }

    /// Sets the [site_search_filter][Self::site_search_filter] field.
    pub fn set_site_search_filter(mut self, v: SiteSearchFilter) -> Self {
        self.site_search_filter = Some(v);
        self
    }

    /// Sets the [exact_terms][Self::exact_terms] field.
    pub fn set_exact_terms<V: Into<String>>(mut self, v: V) -> Self {
        self.exact_terms = Some(v.into());
        self
    }

    /// Sets the [exclude_terms][Self::exclude_terms] field.
    pub fn set_exclude_terms<V: Into<String>>(mut self, v: V) -> Self {
        self.exclude_terms = Some(v.into());
        self
    }

    /// Sets the [or_terms][Self::or_terms] field.
    pub fn set_or_terms<V: Into<String>>(mut self, v: V) -> Self {
        self.or_terms = Some(v.into());
        self
    }

    /// Sets the [and_terms][Self::and_terms] field.
    pub fn set_and_terms<V: Into<String>>(mut self, v: V) -> Self {
        self.and_terms = Some(v.into());
        self
    }

    /// Sets the [link_site][Self::link_site] field.
    pub fn set_link_site<V: Into<String>>(mut self, v: V) -> Self {
        self.link_site = Some(v.into());
        self
    }

    /// Sets the [related_site][Self::related_site] field.
    pub fn set_related_site<V: Into<String>>(mut self, v: V) -> Self {
        self.related_site = Some(v.into());
        self
    }

    /// Sets the [start_index][Self::start_index] field.
    pub fn set_start_index(mut self, v: i32) -> Self {
        self.start_index = v;
        self
    }

    /// Sets the [sort][Self::sort] field.
    pub fn set_sort<V: Into<String>>(mut self, v: V) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets the [safety_level][Self::safety_level] field.
    pub fn set_safety_level(mut self, v: SafetyLevel) -> Self {
        self.safety_level = v;
        self
    }

    /// Sets the [rights][Self::rights] field.
    pub fn set_rights<I: IntoIterator<Item = RightsType>>(mut self, v: I) -> Self {
        self.rights = v.into_iter().collect();
        self
    }

    /// Sets the [file_types][Self::file_types] field.
    pub fn set_file_types<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.file_types = v.into_iter().map(|t| t.into()).collect();
        self
    }

    /// Sets the date restriction to the given number of units.
    pub fn set_date_restrict(mut self, unit: DateRestrictType, number: i32) -> Self {
        self.date_restrict_type = Some(unit);
        self.date_restrict_number = Some(number);
        self
    }

    /// Sets the [search_type][Self::search_type] field.
    pub fn set_search_type(mut self, v: SearchType) -> Self {
        self.search_type = v;
        self
    }

    /// Sets the [low_range][Self::low_range] field.
    pub fn set_low_range(mut self, v: i32) -> Self {
        self.low_range = Some(v);
        self
    }

    /// Sets the [high_range][Self::high_range] field.
    pub fn set_high_range(mut self, v: i32) -> Self {
        self.high_range = Some(v);
        self
    }
}

impl QueryStringRequest for WebSearchRequest {
    fn path(&self) -> &'static str {
        "customsearch/v1"
    }

    fn query_parameters(&self) -> gax::Result<QueryParameters> {
        let query = gax::error::required("query", &self.query)?;
        let engine = gax::error::required("search_engine_id", &self.search_engine_id)?;
        if self.date_restrict_type.is_some() != self.date_restrict_number.is_some() {
            return Err(Error::InvalidCombination {
                fields: &["date_restrict_type", "date_restrict_number"],
                rule: "a date restriction needs both its unit and its number",
            });
        }

        let mut params = QueryParameters::new();
        self.client.apply(&mut params);
        params.push("cx", engine);
        params.push("q", query);
        if let Some(number) = self.number {
            params.push("num", number.to_string());
        }
        params.push("hl", self.interface_language.token());
        if let Some(country) = self.geo_location {
            params.push("gl", country.token());
        }
        if let Some(country) = self.country_restriction {
            params.push("cr", country.collection());
        }
        if !self.filter {
            params.push("filter", "0");
        }
        if !self.chinese_translation {
            params.push("c2coff", "1");
        }
        if let Some(host) = &self.googlehost {
            params.push("googlehost", host.clone());
        }
        if let Some(site) = &self.site_search {
            params.push("siteSearch", site.clone());
        }
        if let Some(filter) = self.site_search_filter {
            params.push("siteSearchFilter", filter.token());
        }
        if let Some(terms) = &self.exact_terms {
            params.push("exactTerms", terms.clone());
        }
        if let Some(terms) = &self.exclude_terms {
            params.push("excludeTerms", terms.clone());
        }
        if let Some(terms) = &self.or_terms {
            params.push("orTerms", terms.clone());
        }
        if let Some(terms) = &self.and_terms {
            params.push("hq", terms.clone());
        }
        if let Some(site) = &self.link_site {
            params.push("linkSite", site.clone());
        }
        if let Some(site) = &self.related_site {
            params.push("relatedSite", site.clone());
        }
        params.push("start", self.start_index.to_string());
        if let Some(sort) = &self.sort {
            params.push("sort", sort.clone());
        }
        if self.safety_level != SafetyLevel::Off {
            params.push("safe", self.safety_level.token());
        }
        if !self.rights.is_empty() {
            params.push("rights", join_flags(&self.rights));
        }
        if !self.file_types.is_empty() {
            params.push("fileType", self.file_types.join(FLAG_DELIMITER));
        }
        if let (Some(unit), Some(number)) = (self.date_restrict_type, self.date_restrict_number) {
            params.push("dateRestrict", format!("{}{}", unit.token(), number));
        }
        if self.search_type != SearchType::Web {
            params.push("searchType", self.search_type.token());
        }
        if let Some(low) = self.low_range {
            params.push("lowRange", low.to_string());
        }
        if let Some(high) = self.high_range {
            params.push("highRange", high.to_string());
        }
        tracing::trace!(
            path = self.path(),
            count = params.len(),
            "encoded web search request"
        );
        Ok(params)
    }
}

/// A refinement facet of the search engine.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Facet {
    pub label: Option<String>,
    pub anchor: Option<String>,
    pub label_with_op: Option<String>,
}

/// Metadata about the search engine that performed the query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Context {
    /// The name of the search engine used for the query.
    #[serde(default)]
    pub title: String,
    /// Facets for refining the search.
    #[serde(default)]
    pub facets: Vec<Facet>,
}

/// Search metadata for the result set.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInformation {
    pub search_time: Option<f64>,
    /// The total number of results, as reported by the service.
    pub total_results: Option<String>,
}

/// A single search result.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub title: String,
    pub html_title: Option<String>,
    #[serde(default)]
    pub link: String,
    pub display_link: Option<String>,
    pub snippet: Option<String>,
    pub html_snippet: Option<String>,
    pub mime: Option<String>,
    pub file_format: Option<String>,
}

/// The response for a web search request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub kind: String,
    pub context: Option<Context>,
    pub search_information: Option<SearchInformation>,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_api_gax::query_parameter::parse_flags;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(SafetyLevel::Off, "off")]
    #[test_case(SafetyLevel::Medium, "medium")]
    #[test_case(SafetyLevel::High, "high")]
    fn safety_tokens(level: SafetyLevel, want: &str) {
        assert_eq!(level.token(), want);
        assert_eq!(SafetyLevel::from_token(want), Some(level));
    }

    #[test_case(DateRestrictType::Day, "d")]
    #[test_case(DateRestrictType::Week, "w")]
    #[test_case(DateRestrictType::Month, "m")]
    #[test_case(DateRestrictType::Year, "y")]
    fn date_restrict_tokens(unit: DateRestrictType, want: &str) {
        assert_eq!(unit.token(), want);
        assert_eq!(DateRestrictType::from_token(want), Some(unit));
    }

    #[test]
    fn rights_round_trip() -> anyhow::Result<()> {
        let set = vec![RightsType::PublicDomain, RightsType::ShareAlike];
        let joined = join_flags(&set);
        assert_eq!(joined, "cc_publicdomain|cc_sharealike");
        assert_eq!(parse_flags::<RightsType>(&joined)?, set);
        Ok(())
    }

    #[test]
    fn country_collection() {
        assert_eq!(Country::Denmark.token(), "dk");
        assert_eq!(Country::Denmark.collection(), "countryDK");
        assert_eq!(Country::from_token("dk"), Some(Country::Denmark));
    }

    #[test]
    fn missing_query() {
        let request = WebSearchRequest::new("", "engine");
        let got = request.query_parameters();
        assert_eq!(got, Err(Error::MissingRequiredField("query")));
    }

    #[test]
    fn missing_engine() {
        let request = WebSearchRequest::new("rust", " ");
        let got = request.query_parameters();
        assert_eq!(got, Err(Error::MissingRequiredField("search_engine_id")));
    }

    #[test]
    fn half_formed_date_restriction() {
        let mut request = WebSearchRequest::new("rust", "engine");
        request.date_restrict_type = Some(DateRestrictType::Day);
        let got = request.query_parameters();
        assert!(
            matches!(
                got,
                Err(Error::InvalidCombination { fields, .. })
                    if fields == ["date_restrict_type", "date_restrict_number"]
            ),
            "{got:?}"
        );
    }

    #[test]
    fn defaults_emit_only_the_meaningful() -> anyhow::Result<()> {
        let request = WebSearchRequest::new("rust", "engine");
        let params = request.query_parameters()?;
        let got = params.iter().map(|(n, _)| n).collect::<Vec<_>>();
        assert_eq!(got, vec!["cx", "q", "hl", "start"]);
        assert_eq!(params.get("hl"), Some("en"));
        assert_eq!(params.get("start"), Some("1"));
        Ok(())
    }

    #[test]
    fn coded_booleans() -> anyhow::Result<()> {
        let request = WebSearchRequest::new("rust", "engine")
            .set_filter(false)
            .set_chinese_translation(false);
        let params = request.query_parameters()?;
        assert_eq!(params.get("filter"), Some("0"));
        assert_eq!(params.get("c2coff"), Some("1"));
        Ok(())
    }

    #[test]
    fn date_restriction() -> anyhow::Result<()> {
        let request =
            WebSearchRequest::new("rust", "engine").set_date_restrict(DateRestrictType::Day, 7);
        let params = request.query_parameters()?;
        assert_eq!(params.get("dateRestrict"), Some("d7"));
        Ok(())
    }

    #[test]
    fn response_from_json() -> anyhow::Result<()> {
        let body = json!({
            "kind": "customsearch#search",
            "context": {
                "title": "example engine",
                "facets": [
                    { "label": "shopping", "anchor": "Shopping", "label_with_op": "more:shopping" }
                ]
            },
            "searchInformation": {
                "searchTime": 0.21,
                "totalResults": "1234"
            },
            "items": [{
                "title": "Example",
                "htmlTitle": "<b>Example</b>",
                "link": "https://example.com/",
                "displayLink": "example.com",
                "snippet": "an example"
            }]
        });
        let response = serde_json::from_value::<SearchResponse>(body)?;
        let context = response.context.as_ref().unwrap();
        assert_eq!(context.title, "example engine");
        assert_eq!(context.facets[0].label.as_deref(), Some("shopping"));
        assert_eq!(
            context.facets[0].label_with_op.as_deref(),
            Some("more:shopping")
        );
        let info = response.search_information.as_ref().unwrap();
        assert_eq!(info.total_results.as_deref(), Some("1234"));
        assert_eq!(response.items[0].link, "https://example.com/");
        Ok(())
    }

    #[test]
    fn response_absent_fields_are_empty() -> anyhow::Result<()> {
        let response = serde_json::from_value::<SearchResponse>(json!({}))?;
        assert_eq!(response.kind, "");
        assert_eq!(response.context, None);
        assert!(response.items.is_empty());
        Ok(())
    }
}
