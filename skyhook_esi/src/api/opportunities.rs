use serde::Deserialize;
use skyhook_core::{CharacterId, Timestamp};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CompletedTask {
    pub completed_at: Timestamp,
    pub task_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OpportunityGroup {
    pub connected_groups: Vec<i32>,
    pub description: String,
    pub group_id: i32,
    pub name: String,
    pub notification: String,
    pub required_tasks: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OpportunityTask {
    pub description: String,
    pub name: String,
    pub notification: String,
    pub task_id: i32,
}

impl EsiClient {
    /// `GET /characters/{character_id}/opportunities/`
    ///
    /// Requires `esi-characters.read_opportunities.v1`.
    pub async fn get_character_opportunities(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<CompletedTask>> {
        self.get_character_opportunities_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_opportunities_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/opportunities/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /opportunities/groups/`
    pub async fn get_opportunity_groups(&self) -> EsiResult<Vec<i32>> {
        self.get_opportunity_groups_raw().await?.json()
    }

    pub async fn get_opportunity_groups_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/opportunities/groups/", &Query::new()).await
    }

    /// `GET /opportunities/groups/{group_id}/`
    pub async fn get_opportunity_group(&self, group_id: i32) -> EsiResult<OpportunityGroup> {
        self.get_opportunity_group_raw(group_id).await?.json()
    }

    pub async fn get_opportunity_group_raw(&self, group_id: i32) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/opportunities/groups/{group_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /opportunities/tasks/`
    pub async fn get_opportunity_tasks(&self) -> EsiResult<Vec<i32>> {
        self.get_opportunity_tasks_raw().await?.json()
    }

    pub async fn get_opportunity_tasks_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/opportunities/tasks/", &Query::new()).await
    }

    /// `GET /opportunities/tasks/{task_id}/`
    pub async fn get_opportunity_task(&self, task_id: i32) -> EsiResult<OpportunityTask> {
        self.get_opportunity_task_raw(task_id).await?.json()
    }

    pub async fn get_opportunity_task_raw(&self, task_id: i32) -> EsiResult<EsiResponse> {
        self.get(&format!("/opportunities/tasks/{task_id}/"), &Query::new())
            .await
    }
}
