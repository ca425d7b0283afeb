use super::Entity;
use serde::{Deserialize, Serialize};

/// Unique identifier for a genre
pub type GenreId = i64;

/// A flat genre tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Entity for Genre {
    fn id(&self) -> i64 {
        self.id
    }
}
