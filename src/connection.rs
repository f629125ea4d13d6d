//! 接続パラメータの組み立て
//!
//! `PropertyCollection` から送信側のキー/値集合を作成します。
//! 接続そのもの（トランスポート）はこのモジュールの範囲外です。
use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::collection::PropertyCollection;
use crate::property::{resolve, PropertyError, PropertyId};

/// 認識モードとして受け付ける値
pub const RECO_MODES: [&str; 3] = ["INTERACTIVE", "CONVERSATION", "DICTATION"];

#[derive(thiserror::Error, Debug)]
pub enum ConnectionError {
    #[error("property error: {0}")]
    Property(#[from] PropertyError),
    #[error("either an endpoint or a region must be set")]
    MissingEndpoint,
    #[error("either a subscription key or an authorization token must be set")]
    MissingCredentials,
    #[error("invalid recognition mode: {value}")]
    InvalidRecoMode { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParameters {
    entries: BTreeMap<&'static str, String>,
}

impl ConnectionParameters {
    /// 結果系以外の定義済みプロパティを集め、必須項目を検証
    pub fn from_properties(properties: &PropertyCollection) -> Result<Self, ConnectionError> {
        let mut entries = BTreeMap::new();
        for id in PropertyId::KNOWN.iter().copied() {
            if id.is_result_property() {
                continue;
            }
            let name = resolve(id)?;
            match properties.get_property_by_name(name) {
                Some(value) if !value.is_empty() => {
                    entries.insert(name, value);
                }
                _ => {}
            }
        }

        let has = |id: PropertyId| lookup_entry(&entries, id).is_some();

        if !has(PropertyId::SPEECH_SERVICE_CONNECTION_ENDPOINT)
            && !has(PropertyId::SPEECH_SERVICE_CONNECTION_REGION)
        {
            return Err(ConnectionError::MissingEndpoint);
        }
        if !has(PropertyId::SPEECH_SERVICE_CONNECTION_KEY)
            && !has(PropertyId::SPEECH_SERVICE_AUTHORIZATION_TOKEN)
        {
            return Err(ConnectionError::MissingCredentials);
        }

        if let Some(mode) = lookup_entry(&entries, PropertyId::SPEECH_SERVICE_CONNECTION_RECO_MODE) {
            if !RECO_MODES.contains(&mode) {
                warn!(mode = %mode, "rejecting unknown recognition mode");
                return Err(ConnectionError::InvalidRecoMode {
                    value: mode.to_string(),
                });
            }
        }

        let session_name = resolve(PropertyId::SPEECH_SESSION_ID)?;
        if !entries.contains_key(session_name) {
            let session_id = uuid::Uuid::new_v4().simple().to_string();
            debug!(session_id = %session_id, "generated session id");
            entries.insert(session_name, session_id);
        }

        Ok(Self { entries })
    }

    pub fn get(&self, id: PropertyId) -> Option<&str> {
        lookup_entry(&self.entries, id)
    }

    pub fn session_id(&self) -> &str {
        self.get(PropertyId::SPEECH_SESSION_ID).unwrap_or_default()
    }

    /// 正規名の昇順で列挙
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

fn lookup_entry<'a>(entries: &'a BTreeMap<&'static str, String>, id: PropertyId) -> Option<&'a str> {
    let name = crate::property::names::lookup(id)?;
    entries.get(name).map(String::as_str)
}
