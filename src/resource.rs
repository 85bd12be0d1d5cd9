use serde::{Deserialize, Serialize};

use crate::coerce::{Record, Shape, build_optional};
use crate::error::PokeApiError;

/// Unresolved pointer to another catalog resource.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct NamedResource {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub url: Option<String>,
}

impl NamedResource {
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl Record for NamedResource {
    type Draft = NamedResource;
    const KIND: &'static str = "named resource";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(draft)
    }
}

/// Index of a resource inside one game version.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct VersionGameIndex {
    pub game_index: Option<i32>,
    pub version: Option<NamedResource>,
}

#[derive(Debug, Deserialize, Default)]
pub struct VersionGameIndexDraft {
    pub game_index: Option<i32>,
    pub version: Option<Shape<NamedResource>>,
}

impl Record for VersionGameIndex {
    type Draft = VersionGameIndexDraft;
    const KIND: &'static str = "version game index";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(Self {
            game_index: draft.game_index,
            version: build_optional(draft.version)?,
        })
    }
}
