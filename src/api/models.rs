use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemModel {
    Dashboard,
    Dataset,
    Card,
    Metric,
    Snippet,
    Collection,
}

impl ItemModel {
    /// Every model requested when listing a collection, in request order.
    pub const ALL: [ItemModel; 6] = [
        ItemModel::Dashboard,
        ItemModel::Dataset,
        ItemModel::Card,
        ItemModel::Metric,
        ItemModel::Snippet,
        ItemModel::Collection,
    ];

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_collection(self) -> bool {
        self == ItemModel::Collection
    }
}

impl fmt::Display for ItemModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub model: ItemModel,
    pub id: i64,
}

impl Item {
    pub fn new(model: ItemModel, id: i64) -> Self {
        Self { model, id }
    }

    pub fn collection(id: i64) -> Self {
        Self::new(ItemModel::Collection, id)
    }

    /// Reads one entry of a collection listing. Returns `None` when the
    /// model is missing, empty or unknown, or when the id is not an integer.
    ///
    /// Models outside [`ItemModel::ALL`] are rejected on purpose, so no
    /// `DELETE` is ever sent to an endpoint this crate does not know.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let model = entry
            .get("model")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .and_then(|m| ItemModel::from_str(m).ok())?;
        let id = entry.get("id").and_then(Value::as_i64)?;
        Some(Self::new(model, id))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.model, self.id)
    }
}
