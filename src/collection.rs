//! 名前付きプロパティの格納領域
//!
//! 値は正規名（`PropertyId::name`）をキーとして保持します。
//! 親コレクションを持たせると、自身に値が無い場合は親の値を参照します
//! （設定オブジェクト→認識器 の継承関係を想定）。
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::property::{resolve, PropertyError, PropertyId};

#[derive(Debug, Default)]
pub struct PropertyCollection {
    values: RwLock<HashMap<String, String>>,
    parent: Option<Arc<PropertyCollection>>,
}

impl PropertyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 親コレクションへのフォールバック付きで生成
    pub fn with_parent(parent: Arc<PropertyCollection>) -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            parent: Some(parent),
        }
    }

    pub fn parent(&self) -> Option<&Arc<PropertyCollection>> {
        self.parent.as_ref()
    }

    /// 未定義IDは何も書き込まずにエラー
    pub fn set_property(&self, id: PropertyId, value: impl Into<String>) -> Result<(), PropertyError> {
        let name = resolve(id)?;
        self.set_property_by_name(name, value);
        Ok(())
    }

    pub fn get_property(&self, id: PropertyId) -> Result<Option<String>, PropertyError> {
        let name = resolve(id)?;
        Ok(self.get_property_by_name(name))
    }

    pub fn get_property_or(
        &self,
        id: PropertyId,
        default: impl Into<String>,
    ) -> Result<String, PropertyError> {
        Ok(self
            .get_property(id)?
            .unwrap_or_else(|| default.into()))
    }

    pub fn set_property_by_name(&self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        debug!(property = %name, "property set");
        self.values.write().insert(name, value.into());
    }

    pub fn get_property_by_name(&self, name: &str) -> Option<String> {
        if let Some(value) = self.values.read().get(name) {
            return Some(value.clone());
        }
        self.parent
            .as_ref()
            .and_then(|parent| parent.get_property_by_name(name))
    }

    pub fn set_bool(&self, id: PropertyId, value: bool) -> Result<(), PropertyError> {
        self.set_property(id, if value { "true" } else { "false" })
    }

    /// `true`/`false`（大文字小文字不問）以外はエラー
    pub fn get_bool(&self, id: PropertyId) -> Result<Option<bool>, PropertyError> {
        let name = resolve(id)?;
        match self.get_property_by_name(name) {
            None => Ok(None),
            Some(value) if value.eq_ignore_ascii_case("true") => Ok(Some(true)),
            Some(value) if value.eq_ignore_ascii_case("false") => Ok(Some(false)),
            Some(value) => Err(PropertyError::invalid_value(name, value)),
        }
    }

    /// 自身の値のみ削除（親の値は残る）
    pub fn remove(&self, id: PropertyId) -> Result<Option<String>, PropertyError> {
        let name = resolve(id)?;
        Ok(self.values.write().remove(name))
    }

    pub fn contains(&self, id: PropertyId) -> Result<bool, PropertyError> {
        Ok(self.get_property(id)?.is_some())
    }

    /// 自身に直接設定された値の数
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// 親の値に自身の値を上書きした一覧
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        let mut merged = self
            .parent
            .as_ref()
            .map(|parent| parent.snapshot())
            .unwrap_or_default();
        let guard = self.values.read();
        merged.extend(guard.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}
