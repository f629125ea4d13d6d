//! プロパティID モジュール
//!
//! `PropertyId` は音声サービスの設定キー/結果メタデータの種別を表します。
//! C 側の列挙型と同じく任意の整数値を保持できるため、未定義の値も表現でき、
//! その場合は `resolve` が `PropertyError::UnmappedIdentifier` を返します。
mod error;
pub mod names;

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use error::PropertyError;
pub use names::resolve;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(i32);

impl PropertyId {
    pub const SPEECH_SERVICE_CONNECTION_KEY: Self = Self(1000);
    pub const SPEECH_SERVICE_CONNECTION_ENDPOINT: Self = Self(1001);
    pub const SPEECH_SERVICE_CONNECTION_REGION: Self = Self(1002);
    pub const SPEECH_SERVICE_AUTHORIZATION_TOKEN: Self = Self(1003);
    pub const SPEECH_SERVICE_AUTHORIZATION_TYPE: Self = Self(1004);
    pub const SPEECH_SERVICE_CONNECTION_ENDPOINT_ID: Self = Self(1005);

    pub const SPEECH_SERVICE_CONNECTION_TRANSLATION_TO_LANGUAGES: Self = Self(2000);
    pub const SPEECH_SERVICE_CONNECTION_TRANSLATION_VOICE: Self = Self(2001);
    pub const SPEECH_SERVICE_CONNECTION_TRANSLATION_FEATURES: Self = Self(2002);
    pub const SPEECH_SERVICE_CONNECTION_INTENT_REGION: Self = Self(2003);

    pub const SPEECH_SERVICE_CONNECTION_RECO_MODE: Self = Self(3000);
    pub const SPEECH_SERVICE_CONNECTION_RECO_LANGUAGE: Self = Self(3001);
    pub const SPEECH_SESSION_ID: Self = Self(3002);

    pub const SPEECH_SERVICE_RESPONSE_REQUEST_DETAILED_RESULT_TRUE_FALSE: Self = Self(4000);
    pub const SPEECH_SERVICE_RESPONSE_REQUEST_PROFANITY_FILTER_TRUE_FALSE: Self = Self(4001);

    pub const SPEECH_SERVICE_RESPONSE_JSON_RESULT: Self = Self(5000);
    pub const SPEECH_SERVICE_RESPONSE_JSON_ERROR_DETAILS: Self = Self(5001);
    pub const LANGUAGE_UNDERSTANDING_SERVICE_RESPONSE_JSON_RESULT: Self = Self(5002);

    pub const CANCELLATION_DETAILS_REASON: Self = Self(6000);
    pub const CANCELLATION_DETAILS_REASON_TEXT: Self = Self(6001);
    pub const CANCELLATION_DETAILS_REASON_DETAILED_TEXT: Self = Self(6002);

    /// 定義済みの全プロパティ（宣言順）
    pub const KNOWN: &'static [PropertyId] = &[
        Self::SPEECH_SERVICE_CONNECTION_KEY,
        Self::SPEECH_SERVICE_CONNECTION_ENDPOINT,
        Self::SPEECH_SERVICE_CONNECTION_REGION,
        Self::SPEECH_SERVICE_AUTHORIZATION_TOKEN,
        Self::SPEECH_SERVICE_AUTHORIZATION_TYPE,
        Self::SPEECH_SERVICE_CONNECTION_ENDPOINT_ID,
        Self::SPEECH_SERVICE_CONNECTION_TRANSLATION_TO_LANGUAGES,
        Self::SPEECH_SERVICE_CONNECTION_TRANSLATION_VOICE,
        Self::SPEECH_SERVICE_CONNECTION_TRANSLATION_FEATURES,
        Self::SPEECH_SERVICE_CONNECTION_INTENT_REGION,
        Self::SPEECH_SERVICE_CONNECTION_RECO_MODE,
        Self::SPEECH_SERVICE_CONNECTION_RECO_LANGUAGE,
        Self::SPEECH_SESSION_ID,
        Self::SPEECH_SERVICE_RESPONSE_REQUEST_DETAILED_RESULT_TRUE_FALSE,
        Self::SPEECH_SERVICE_RESPONSE_REQUEST_PROFANITY_FILTER_TRUE_FALSE,
        Self::SPEECH_SERVICE_RESPONSE_JSON_RESULT,
        Self::SPEECH_SERVICE_RESPONSE_JSON_ERROR_DETAILS,
        Self::LANGUAGE_UNDERSTANDING_SERVICE_RESPONSE_JSON_RESULT,
        Self::CANCELLATION_DETAILS_REASON,
        Self::CANCELLATION_DETAILS_REASON_TEXT,
        Self::CANCELLATION_DETAILS_REASON_DETAILED_TEXT,
    ];

    /// 生の整数値から生成（未定義の値もそのまま保持）
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// 正規名（ワイヤプロトコル上のキー）を取得
    pub fn name(self) -> Result<&'static str, PropertyError> {
        resolve(self)
    }

    pub fn is_known(self) -> bool {
        names::lookup(self).is_some()
    }

    /// 列挙子そのものの識別子（例: `SpeechServiceConnection_Key`）
    pub const fn identifier(self) -> Option<&'static str> {
        let ident = match self {
            Self::SPEECH_SERVICE_CONNECTION_KEY => "SpeechServiceConnection_Key",
            Self::SPEECH_SERVICE_CONNECTION_ENDPOINT => "SpeechServiceConnection_Endpoint",
            Self::SPEECH_SERVICE_CONNECTION_REGION => "SpeechServiceConnection_Region",
            Self::SPEECH_SERVICE_AUTHORIZATION_TOKEN => "SpeechServiceAuthorization_Token",
            Self::SPEECH_SERVICE_AUTHORIZATION_TYPE => "SpeechServiceAuthorization_Type",
            Self::SPEECH_SERVICE_CONNECTION_ENDPOINT_ID => "SpeechServiceConnection_EndpointId",
            Self::SPEECH_SERVICE_CONNECTION_TRANSLATION_TO_LANGUAGES => {
                "SpeechServiceConnection_TranslationToLanguages"
            }
            Self::SPEECH_SERVICE_CONNECTION_TRANSLATION_VOICE => {
                "SpeechServiceConnection_TranslationVoice"
            }
            Self::SPEECH_SERVICE_CONNECTION_TRANSLATION_FEATURES => {
                "SpeechServiceConnection_TranslationFeatures"
            }
            Self::SPEECH_SERVICE_CONNECTION_INTENT_REGION => "SpeechServiceConnection_IntentRegion",
            Self::SPEECH_SERVICE_CONNECTION_RECO_MODE => "SpeechServiceConnection_RecoMode",
            Self::SPEECH_SERVICE_CONNECTION_RECO_LANGUAGE => "SpeechServiceConnection_RecoLanguage",
            Self::SPEECH_SESSION_ID => "Speech_SessionId",
            Self::SPEECH_SERVICE_RESPONSE_REQUEST_DETAILED_RESULT_TRUE_FALSE => {
                "SpeechServiceResponse_RequestDetailedResultTrueFalse"
            }
            Self::SPEECH_SERVICE_RESPONSE_REQUEST_PROFANITY_FILTER_TRUE_FALSE => {
                "SpeechServiceResponse_RequestProfanityFilterTrueFalse"
            }
            Self::SPEECH_SERVICE_RESPONSE_JSON_RESULT => "SpeechServiceResponse_JsonResult",
            Self::SPEECH_SERVICE_RESPONSE_JSON_ERROR_DETAILS => {
                "SpeechServiceResponse_JsonErrorDetails"
            }
            Self::LANGUAGE_UNDERSTANDING_SERVICE_RESPONSE_JSON_RESULT => {
                "LanguageUnderstandingServiceResponse_JsonResult"
            }
            Self::CANCELLATION_DETAILS_REASON => "CancellationDetails_Reason",
            Self::CANCELLATION_DETAILS_REASON_TEXT => "CancellationDetails_ReasonText",
            Self::CANCELLATION_DETAILS_REASON_DETAILED_TEXT => {
                "CancellationDetails_ReasonDetailedText"
            }
            _ => return None,
        };
        Some(ident)
    }

    /// 認識結果側のメタデータ（接続時には送らない）か
    pub fn is_result_property(self) -> bool {
        matches!(
            self,
            Self::SPEECH_SERVICE_RESPONSE_JSON_RESULT
                | Self::SPEECH_SERVICE_RESPONSE_JSON_ERROR_DETAILS
                | Self::LANGUAGE_UNDERSTANDING_SERVICE_RESPONSE_JSON_RESULT
                | Self::CANCELLATION_DETAILS_REASON
                | Self::CANCELLATION_DETAILS_REASON_TEXT
                | Self::CANCELLATION_DETAILS_REASON_DETAILED_TEXT
        )
    }

    /// 正規名からの逆引き（大文字小文字を区別、最初に一致した定義を返す）
    pub fn from_name(name: &str) -> Option<Self> {
        NAME_INDEX.get(name).copied()
    }
}

static NAME_INDEX: Lazy<HashMap<&'static str, PropertyId>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(PropertyId::KNOWN.len());
    for id in PropertyId::KNOWN {
        if let Some(name) = names::lookup(*id) {
            index.entry(name).or_insert(*id);
        }
    }
    index
});

impl From<PropertyId> for i32 {
    fn from(value: PropertyId) -> Self {
        value.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identifier() {
            Some(ident) => f.write_str(ident),
            None => write!(f, "PropertyId({})", self.0),
        }
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identifier() {
            Some(ident) => write!(f, "{}({})", ident, self.0),
            None => write!(f, "PropertyId({})", self.0),
        }
    }
}
