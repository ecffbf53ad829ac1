use serde::Deserialize;
use skyhook_core::{CharacterId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterAttributes {
    pub accrued_remap_cooldown_date: Option<Timestamp>,
    pub bonus_remaps: Option<i32>,
    pub charisma: i32,
    pub intelligence: i32,
    pub last_remap_date: Option<Timestamp>,
    pub memory: i32,
    pub perception: i32,
    pub willpower: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillQueueEntry {
    pub finish_date: Option<Timestamp>,
    pub finished_level: i32,
    pub level_end_sp: Option<i32>,
    pub level_start_sp: Option<i32>,
    pub queue_position: i32,
    pub skill_id: TypeId,
    pub start_date: Option<Timestamp>,
    pub training_start_sp: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterSkills {
    pub skills: Vec<Skill>,
    pub total_sp: i64,
    pub unallocated_sp: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub active_skill_level: i32,
    pub skill_id: TypeId,
    pub skillpoints_in_skill: i64,
    pub trained_skill_level: i32,
}

impl EsiClient {
    /// `GET /characters/{character_id}/attributes/`
    ///
    /// Requires `esi-skills.read_skills.v1`.
    pub async fn get_character_attributes(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<CharacterAttributes> {
        self.get_character_attributes_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_attributes_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/attributes/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/skillqueue/`
    ///
    /// Requires `esi-skills.read_skillqueue.v1`.
    pub async fn get_character_skill_queue(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<SkillQueueEntry>> {
        self.get_character_skill_queue_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_skill_queue_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/skillqueue/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/skills/`
    ///
    /// Requires `esi-skills.read_skills.v1`.
    pub async fn get_character_skills(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<CharacterSkills> {
        self.get_character_skills_raw(character_id).await?.json()
    }

    pub async fn get_character_skills_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(&format!("/characters/{character_id}/skills/"), &Query::new())
            .await
    }
}
