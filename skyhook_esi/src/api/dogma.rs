use serde::Deserialize;
use skyhook_core::{CharacterId, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DogmaAttribute {
    pub attribute_id: i32,
    pub default_value: Option<f64>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub high_is_good: Option<bool>,
    pub icon_id: Option<i32>,
    pub name: Option<String>,
    pub published: Option<bool>,
    pub stackable: Option<bool>,
    pub unit_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DogmaEffect {
    pub description: Option<String>,
    pub disallow_auto_repeat: Option<bool>,
    pub discharge_attribute_id: Option<i32>,
    pub display_name: Option<String>,
    pub duration_attribute_id: Option<i32>,
    pub effect_category: Option<i32>,
    pub effect_id: i32,
    pub electronic_chance: Option<bool>,
    pub falloff_attribute_id: Option<i32>,
    pub icon_id: Option<i32>,
    pub is_assistance: Option<bool>,
    pub is_offensive: Option<bool>,
    pub is_warp_safe: Option<bool>,
    #[serde(default)]
    pub modifiers: Vec<DogmaModifier>,
    pub name: Option<String>,
    pub post_expression: Option<i32>,
    pub pre_expression: Option<i32>,
    pub published: Option<bool>,
    pub range_attribute_id: Option<i32>,
    pub range_chance: Option<bool>,
    pub tracking_speed_attribute_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DogmaModifier {
    pub domain: Option<String>,
    pub effect_id: Option<i32>,
    pub func: String,
    pub modified_attribute_id: Option<i32>,
    pub modifying_attribute_id: Option<i32>,
    pub operator: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DogmaAttributeValue {
    pub attribute_id: i32,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DogmaEffectRef {
    pub effect_id: i32,
    pub is_default: bool,
}

/// A mutated (abyssal) item.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DynamicItem {
    pub created_by: CharacterId,
    pub dogma_attributes: Vec<DogmaAttributeValue>,
    pub dogma_effects: Vec<DogmaEffectRef>,
    pub mutator_type_id: TypeId,
    pub source_type_id: TypeId,
}

impl EsiClient {
    /// `GET /dogma/attributes/`: every attribute id.
    pub async fn get_dogma_attributes(&self) -> EsiResult<Vec<i32>> {
        self.get_dogma_attributes_raw().await?.json()
    }

    pub async fn get_dogma_attributes_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/dogma/attributes/", &Query::new()).await
    }

    /// `GET /dogma/attributes/{attribute_id}/`
    pub async fn get_dogma_attribute(&self, attribute_id: i32) -> EsiResult<DogmaAttribute> {
        self.get_dogma_attribute_raw(attribute_id).await?.json()
    }

    pub async fn get_dogma_attribute_raw(&self, attribute_id: i32) -> EsiResult<EsiResponse> {
        self.get(&format!("/dogma/attributes/{attribute_id}/"), &Query::new())
            .await
    }

    /// `GET /dogma/dynamic/items/{type_id}/{item_id}/`
    pub async fn get_dogma_dynamic_item(
        &self,
        type_id: TypeId,
        item_id: i64,
    ) -> EsiResult<DynamicItem> {
        self.get_dogma_dynamic_item_raw(type_id, item_id)
            .await?
            .json()
    }

    pub async fn get_dogma_dynamic_item_raw(
        &self,
        type_id: TypeId,
        item_id: i64,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/dogma/dynamic/items/{type_id}/{item_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /dogma/effects/`: every effect id.
    pub async fn get_dogma_effects(&self) -> EsiResult<Vec<i32>> {
        self.get_dogma_effects_raw().await?.json()
    }

    pub async fn get_dogma_effects_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/dogma/effects/", &Query::new()).await
    }

    /// `GET /dogma/effects/{effect_id}/`
    pub async fn get_dogma_effect(&self, effect_id: i32) -> EsiResult<DogmaEffect> {
        self.get_dogma_effect_raw(effect_id).await?.json()
    }

    pub async fn get_dogma_effect_raw(&self, effect_id: i32) -> EsiResult<EsiResponse> {
        self.get(&format!("/dogma/effects/{effect_id}/"), &Query::new())
            .await
    }
}
