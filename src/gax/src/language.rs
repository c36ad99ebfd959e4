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

use crate::query_parameter::WireToken;

/// The language in which to return results.
///
/// Shared by all services; the wire representation is the supported
/// language code (`en`, `pt-BR`, ...). The services regularly extend
/// the supported list, so this set tracks the documented codes rather
/// than any standard's full registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Language {
    Arabic,
    Bulgarian,
    Bengali,
    Catalan,
    Czech,
    Danish,
    German,
    Greek,
    #[default]
    English,
    Spanish,
    Basque,
    Finnish,
    French,
    Hindi,
    Hungarian,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Dutch,
    Norwegian,
    Polish,
    PortugueseBrazil,
    PortuguesePortugal,
    Russian,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
    ChineseSimplified,
    ChineseTraditional,
}

impl WireToken for Language {
    fn token(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Bulgarian => "bg",
            Self::Bengali => "bn",
            Self::Catalan => "ca",
            Self::Czech => "cs",
            Self::Danish => "da",
            Self::German => "de",
            Self::Greek => "el",
            Self::English => "en",
            Self::Spanish => "es",
            Self::Basque => "eu",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::Hindi => "hi",
            Self::Hungarian => "hu",
            Self::Indonesian => "id",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Dutch => "nl",
            Self::Norwegian => "no",
            Self::Polish => "pl",
            Self::PortugueseBrazil => "pt-BR",
            Self::PortuguesePortugal => "pt-PT",
            Self::Russian => "ru",
            Self::Swedish => "sv",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Ukrainian => "uk",
            Self::Vietnamese => "vi",
            Self::ChineseSimplified => "zh-CN",
            Self::ChineseTraditional => "zh-TW",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        let v = match token {
            "ar" => Self::Arabic,
            "bg" => Self::Bulgarian,
            "bn" => Self::Bengali,
            "ca" => Self::Catalan,
            "cs" => Self::Czech,
            "da" => Self::Danish,
            "de" => Self::German,
            "el" => Self::Greek,
            "en" => Self::English,
            "es" => Self::Spanish,
            "eu" => Self::Basque,
            "fi" => Self::Finnish,
            "fr" => Self::French,
            "hi" => Self::Hindi,
            "hu" => Self::Hungarian,
            "id" => Self::Indonesian,
            "it" => Self::Italian,
            "ja" => Self::Japanese,
            "ko" => Self::Korean,
            "nl" => Self::Dutch,
            "no" => Self::Norwegian,
            "pl" => Self::Polish,
            "pt-BR" => Self::PortugueseBrazil,
            "pt-PT" => Self::PortuguesePortugal,
            "ru" => Self::Russian,
            "sv" => Self::Swedish,
            "th" => Self::Thai,
            "tr" => Self::Turkish,
            "uk" => Self::Ukrainian,
            "vi" => Self::Vietnamese,
            "zh-CN" => Self::ChineseSimplified,
            "zh-TW" => Self::ChineseTraditional,
            _ => return None,
        };
        Some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().token(), "en");
    }

    #[test_case(Language::Danish, "da")]
    #[test_case(Language::PortugueseBrazil, "pt-BR")]
    #[test_case(Language::ChineseTraditional, "zh-TW")]
    fn tokens(language: Language, want: &str) {
        assert_eq!(language.token(), want);
        assert_eq!(Language::from_token(want), Some(language));
    }

    #[test]
    fn unknown_code() {
        assert_eq!(Language::from_token("tlh"), None);
    }
}
