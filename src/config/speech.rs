//! 音声サービス接続設定
use serde::Deserialize;

use crate::collection::PropertyCollection;
use crate::property::{PropertyError, PropertyId};

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechServiceConfig {
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub recognition: RecognitionConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub intent: IntentConfig,
}

impl SpeechServiceConfig {
    /// 設定値を対応するプロパティとして書き込む（未設定・空の項目は書かない）
    pub fn apply_to(&self, properties: &PropertyCollection) -> Result<(), PropertyError> {
        let conn = &self.connection;
        set_opt(properties, PropertyId::SPEECH_SERVICE_CONNECTION_KEY, &conn.subscription_key)?;
        set_opt(properties, PropertyId::SPEECH_SERVICE_CONNECTION_ENDPOINT, &conn.endpoint)?;
        set_opt(properties, PropertyId::SPEECH_SERVICE_CONNECTION_REGION, &conn.region)?;
        set_opt(properties, PropertyId::SPEECH_SERVICE_AUTHORIZATION_TOKEN, &conn.auth_token)?;
        set_opt(properties, PropertyId::SPEECH_SERVICE_AUTHORIZATION_TYPE, &conn.auth_type)?;
        set_opt(properties, PropertyId::SPEECH_SERVICE_CONNECTION_ENDPOINT_ID, &conn.endpoint_id)?;

        let reco = &self.recognition;
        set_opt(properties, PropertyId::SPEECH_SERVICE_CONNECTION_RECO_LANGUAGE, &reco.language)?;
        set_opt(properties, PropertyId::SPEECH_SERVICE_CONNECTION_RECO_MODE, &reco.mode)?;
        if let Some(detailed) = reco.detailed_result {
            properties.set_bool(
                PropertyId::SPEECH_SERVICE_RESPONSE_REQUEST_DETAILED_RESULT_TRUE_FALSE,
                detailed,
            )?;
        }
        if let Some(filter) = reco.profanity_filter {
            properties.set_bool(
                PropertyId::SPEECH_SERVICE_RESPONSE_REQUEST_PROFANITY_FILTER_TRUE_FALSE,
                filter,
            )?;
        }

        let tr = &self.translation;
        if !tr.to_languages.is_empty() {
            properties.set_property(
                PropertyId::SPEECH_SERVICE_CONNECTION_TRANSLATION_TO_LANGUAGES,
                tr.to_languages.join(","),
            )?;
        }
        set_opt(properties, PropertyId::SPEECH_SERVICE_CONNECTION_TRANSLATION_VOICE, &tr.voice)?;
        set_opt(properties, PropertyId::SPEECH_SERVICE_CONNECTION_TRANSLATION_FEATURES, &tr.features)?;

        set_opt(properties, PropertyId::SPEECH_SERVICE_CONNECTION_INTENT_REGION, &self.intent.region)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default)]
    pub subscription_key: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub auth_type: Option<String>,
    /// カスタムモデルのエンドポイントID（ワイヤ上は `SPEECH-ModelId`）
    #[serde(default)]
    pub endpoint_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecognitionConfig {
    #[serde(default)]
    pub language: Option<String>,
    /// INTERACTIVE / CONVERSATION / DICTATION
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub detailed_result: Option<bool>,
    #[serde(default)]
    pub profanity_filter: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub to_languages: Vec<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntentConfig {
    #[serde(default)]
    pub region: Option<String>,
}

fn set_opt(
    properties: &PropertyCollection,
    id: PropertyId,
    value: &Option<String>,
) -> Result<(), PropertyError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => properties.set_property(id, v),
        _ => Ok(()),
    }
}
