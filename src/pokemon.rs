// pokemon.rs
// Typed Pokémon records and the builders that assemble them from raw API payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::{Record, Shape, build_list, build_optional, nullable_map};
use crate::error::PokeApiError;
use crate::resource::{NamedResource, VersionGameIndex};

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct Pokemon {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub base_experience: Option<i32>,
    pub height: Option<i32>,
    pub is_default: bool,
    pub order: Option<i32>,
    pub weight: Option<i32>,
    pub abilities: Vec<PokemonAbility>,
    pub forms: Vec<NamedResource>,
    pub game_indices: Vec<VersionGameIndex>,
    pub held_items: Vec<PokemonHeldItem>,
    pub location_area_encounters: Option<String>,
    pub moves: Vec<PokemonMove>,
    pub past_types: Vec<PokemonTypePast>,
    pub sprites: Option<PokemonSprites>,
    pub species: Option<NamedResource>,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

/// Raw form of a [`Pokemon`]. Every nested field may hold raw JSON or
/// records that were built earlier.
#[derive(Debug, Deserialize, Default)]
pub struct PokemonDraft {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub base_experience: Option<i32>,
    pub height: Option<i32>,
    pub is_default: Option<bool>,
    pub order: Option<i32>,
    pub weight: Option<i32>,
    pub abilities: Option<Vec<Shape<PokemonAbility>>>,
    pub forms: Option<Vec<Shape<NamedResource>>>,
    pub game_indices: Option<Vec<Shape<VersionGameIndex>>>,
    pub held_items: Option<Vec<Shape<PokemonHeldItem>>>,
    pub location_area_encounters: Option<String>,
    pub moves: Option<Vec<Shape<PokemonMove>>>,
    pub past_types: Option<Vec<Shape<PokemonTypePast>>>,
    pub sprites: Option<Shape<PokemonSprites>>,
    pub species: Option<Shape<NamedResource>>,
    pub stats: Option<Vec<Shape<PokemonStat>>>,
    pub types: Option<Vec<Shape<PokemonType>>>,
}

impl Record for Pokemon {
    type Draft = PokemonDraft;
    const KIND: &'static str = "pokemon";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        let pokemon = Self {
            id: draft.id,
            name: draft.name,
            base_experience: draft.base_experience,
            height: draft.height,
            is_default: draft.is_default.unwrap_or(false),
            order: draft.order,
            weight: draft.weight,
            abilities: build_list(draft.abilities)?,
            forms: build_list(draft.forms)?,
            game_indices: build_list(draft.game_indices)?,
            held_items: build_list(draft.held_items)?,
            location_area_encounters: draft.location_area_encounters,
            moves: build_list(draft.moves)?,
            past_types: build_list(draft.past_types)?,
            sprites: build_optional(draft.sprites)?,
            species: build_optional(draft.species)?,
            stats: build_list(draft.stats)?,
            types: build_list(draft.types)?,
        };
        tracing::trace!(
            "Assembled Pokémon {:?} (ID: {:?}) with {} moves",
            pokemon.name,
            pokemon.id,
            pokemon.moves.len()
        );
        Ok(pokemon)
    }
}

impl Pokemon {
    /// Pick the sprite URL for the requested orientation and coloring.
    pub fn sprite_url(&self, shiny: bool, back: bool) -> Option<&str> {
        let sprites = self.sprites.as_ref()?;
        let url = match (back, shiny) {
            (false, false) => &sprites.front_default,
            (false, true) => &sprites.front_shiny,
            (true, false) => &sprites.back_default,
            (true, true) => &sprites.back_shiny,
        };
        url.as_deref()
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: Option<i32>,
    pub ability: Option<NamedResource>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PokemonAbilityDraft {
    pub is_hidden: Option<bool>,
    pub slot: Option<i32>,
    pub ability: Option<Shape<NamedResource>>,
}

impl Record for PokemonAbility {
    type Draft = PokemonAbilityDraft;
    const KIND: &'static str = "ability slot";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(Self {
            is_hidden: draft.is_hidden.unwrap_or(false),
            slot: draft.slot,
            ability: build_optional(draft.ability)?,
        })
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct PokemonType {
    pub slot: Option<i32>,
    pub r#type: Option<NamedResource>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PokemonTypeDraft {
    pub slot: Option<i32>,
    pub r#type: Option<Shape<NamedResource>>,
}

impl Record for PokemonType {
    type Draft = PokemonTypeDraft;
    const KIND: &'static str = "type slot";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(Self {
            slot: draft.slot,
            r#type: build_optional(draft.r#type)?,
        })
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct PokemonStat {
    pub stat: Option<NamedResource>,
    pub effort: Option<i32>,
    pub base_stat: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PokemonStatDraft {
    pub stat: Option<Shape<NamedResource>>,
    pub effort: Option<i32>,
    pub base_stat: Option<i32>,
}

impl Record for PokemonStat {
    type Draft = PokemonStatDraft;
    const KIND: &'static str = "stat entry";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(Self {
            stat: build_optional(draft.stat)?,
            effort: draft.effort,
            base_stat: draft.base_stat,
        })
    }
}

/// Drop rarity of a held item in one game version.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct PokemonHeldItemVersion {
    pub version: Option<NamedResource>,
    pub rarity: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PokemonHeldItemVersionDraft {
    pub version: Option<Shape<NamedResource>>,
    pub rarity: Option<i32>,
}

impl Record for PokemonHeldItemVersion {
    type Draft = PokemonHeldItemVersionDraft;
    const KIND: &'static str = "held item version detail";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(Self {
            version: build_optional(draft.version)?,
            rarity: draft.rarity,
        })
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct PokemonHeldItem {
    pub item: Option<NamedResource>,
    pub version_details: Vec<PokemonHeldItemVersion>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PokemonHeldItemDraft {
    pub item: Option<Shape<NamedResource>>,
    pub version_details: Option<Vec<Shape<PokemonHeldItemVersion>>>,
}

impl Record for PokemonHeldItem {
    type Draft = PokemonHeldItemDraft;
    const KIND: &'static str = "held item entry";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(Self {
            item: build_optional(draft.item)?,
            version_details: build_list(draft.version_details)?,
        })
    }
}

/// How and when a move is learned within one version group.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct PokemonMoveVersion {
    pub move_learn_method: Option<NamedResource>,
    pub version_group: Option<NamedResource>,
    pub level_learned_at: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PokemonMoveVersionDraft {
    pub move_learn_method: Option<Shape<NamedResource>>,
    pub version_group: Option<Shape<NamedResource>>,
    pub level_learned_at: Option<i32>,
}

impl Record for PokemonMoveVersion {
    type Draft = PokemonMoveVersionDraft;
    const KIND: &'static str = "move version detail";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(Self {
            move_learn_method: build_optional(draft.move_learn_method)?,
            version_group: build_optional(draft.version_group)?,
            level_learned_at: draft.level_learned_at,
        })
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct PokemonMove {
    pub r#move: Option<NamedResource>,
    pub version_group_details: Vec<PokemonMoveVersion>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PokemonMoveDraft {
    pub r#move: Option<Shape<NamedResource>>,
    pub version_group_details: Option<Vec<Shape<PokemonMoveVersion>>>,
}

impl Record for PokemonMove {
    type Draft = PokemonMoveDraft;
    const KIND: &'static str = "move entry";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(Self {
            r#move: build_optional(draft.r#move)?,
            version_group_details: build_list(draft.version_group_details)?,
        })
    }
}

/// Image URLs for a Pokémon. `other` and `versions` are kept as opaque JSON.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny_female: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny_female: Option<String>,
    #[serde(default, deserialize_with = "nullable_map")]
    pub other: Map<String, Value>,
    #[serde(default, deserialize_with = "nullable_map")]
    pub versions: Map<String, Value>,
}

impl Record for PokemonSprites {
    type Draft = PokemonSprites;
    const KIND: &'static str = "sprite set";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(draft)
    }
}

/// Typing a Pokémon had before the given generation changed it.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct PokemonTypePast {
    pub generation: Option<NamedResource>,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PokemonTypePastDraft {
    pub generation: Option<Shape<NamedResource>>,
    pub types: Option<Vec<Shape<PokemonType>>>,
}

impl Record for PokemonTypePast {
    type Draft = PokemonTypePastDraft;
    const KIND: &'static str = "past type group";

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError> {
        Ok(Self {
            generation: build_optional(draft.generation)?,
            types: build_list(draft.types)?,
        })
    }
}
