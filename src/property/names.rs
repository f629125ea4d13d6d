//! プロパティID→正規名の対応表
//!
//! ここでの文字列はリモートサービスとのワイヤ互換キーそのもの。
//! 表記揺れ（ハイフン/アンダースコア/PascalCase）も含めて変更しないこと。
use tracing::error;

use super::{PropertyError, PropertyId};

pub const SUBSCRIPTION_KEY: &str = "SPEECH-SubscriptionKey";
pub const ENDPOINT: &str = "SPEECH-Endpoint";
pub const REGION: &str = "SPEECH-Region";
pub const AUTH_TOKEN: &str = "SPEECH-AuthToken";
pub const AUTHORIZATION_TYPE: &str = "SpeechServiceAuthorization_Type";
pub const MODEL_ID: &str = "SPEECH-ModelId";

pub const TRANSLATION_TO_LANGUAGES: &str = "TRANSLATION-ToLanguages";
pub const TRANSLATION_VOICE: &str = "TRANSLATION-Voice";
pub const TRANSLATION_FEATURES: &str = "TRANSLATION-Features";
pub const INTENT_REGION: &str = "INTENT-region";

pub const RECO_MODE: &str = "SPEECH-RecoMode";
pub const RECO_LANGUAGE: &str = "SPEECH-RecoLanguage";
pub const SESSION_ID: &str = "SessionId";

pub const REQUEST_DETAILED_RESULT: &str = "SpeechServiceResponse_RequestDetailedResultTrueFalse";
pub const REQUEST_PROFANITY_FILTER: &str = "SpeechServiceResponse_RequestProfanityFilterTrueFalse";

pub const RESULT_JSON: &str = "RESULT-Json";
pub const RESULT_ERROR_DETAILS: &str = "RESULT-ErrorDetails";
pub const RESULT_LANGUAGE_UNDERSTANDING_JSON: &str = "RESULT-LanguageUnderstandingJson";

pub const CANCELLATION_REASON: &str = "CancellationDetails_Reason";
pub const CANCELLATION_REASON_TEXT: &str = "CancellationDetails_ReasonText";
pub const CANCELLATION_REASON_DETAILED_TEXT: &str = "CancellationDetails_ReasonDetailedText";

/// 正規名を返す。未定義IDはエラーログを1件出して `UnmappedIdentifier` を返す
pub fn resolve(id: PropertyId) -> Result<&'static str, PropertyError> {
    match lookup(id) {
        Some(name) => Ok(name),
        None => {
            error!(property_id = id.raw(), "undefined PropertyId of {}", id.raw());
            Err(PropertyError::unmapped(id))
        }
    }
}

/// ログを出さない内部用の参照
pub(crate) const fn lookup(id: PropertyId) -> Option<&'static str> {
    let name = match id {
        PropertyId::SPEECH_SERVICE_CONNECTION_KEY => SUBSCRIPTION_KEY,
        PropertyId::SPEECH_SERVICE_CONNECTION_ENDPOINT => ENDPOINT,
        PropertyId::SPEECH_SERVICE_CONNECTION_REGION => REGION,
        PropertyId::SPEECH_SERVICE_AUTHORIZATION_TOKEN => AUTH_TOKEN,
        PropertyId::SPEECH_SERVICE_AUTHORIZATION_TYPE => AUTHORIZATION_TYPE,
        PropertyId::SPEECH_SERVICE_CONNECTION_ENDPOINT_ID => MODEL_ID,
        PropertyId::SPEECH_SERVICE_CONNECTION_TRANSLATION_TO_LANGUAGES => TRANSLATION_TO_LANGUAGES,
        PropertyId::SPEECH_SERVICE_CONNECTION_TRANSLATION_VOICE => TRANSLATION_VOICE,
        PropertyId::SPEECH_SERVICE_CONNECTION_TRANSLATION_FEATURES => TRANSLATION_FEATURES,
        PropertyId::SPEECH_SERVICE_CONNECTION_INTENT_REGION => INTENT_REGION,
        PropertyId::SPEECH_SERVICE_CONNECTION_RECO_MODE => RECO_MODE,
        PropertyId::SPEECH_SERVICE_CONNECTION_RECO_LANGUAGE => RECO_LANGUAGE,
        PropertyId::SPEECH_SESSION_ID => SESSION_ID,
        PropertyId::SPEECH_SERVICE_RESPONSE_REQUEST_DETAILED_RESULT_TRUE_FALSE => {
            REQUEST_DETAILED_RESULT
        }
        PropertyId::SPEECH_SERVICE_RESPONSE_REQUEST_PROFANITY_FILTER_TRUE_FALSE => {
            REQUEST_PROFANITY_FILTER
        }
        PropertyId::SPEECH_SERVICE_RESPONSE_JSON_RESULT => RESULT_JSON,
        PropertyId::LANGUAGE_UNDERSTANDING_SERVICE_RESPONSE_JSON_RESULT => {
            RESULT_LANGUAGE_UNDERSTANDING_JSON
        }
        PropertyId::SPEECH_SERVICE_RESPONSE_JSON_ERROR_DETAILS => RESULT_ERROR_DETAILS,
        PropertyId::CANCELLATION_DETAILS_REASON => CANCELLATION_REASON,
        PropertyId::CANCELLATION_DETAILS_REASON_TEXT => CANCELLATION_REASON_TEXT,
        PropertyId::CANCELLATION_DETAILS_REASON_DETAILED_TEXT => CANCELLATION_REASON_DETAILED_TEXT,
        _ => return None,
    };
    Some(name)
}
