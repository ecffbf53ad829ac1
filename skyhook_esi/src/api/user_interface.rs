use serde::Serialize;
use skyhook_core::TypeId;

use crate::{EsiClient, EsiResponse, EsiResult, Query};

/// A mail to open in the client's compose window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMailWindow {
    pub body: String,
    pub recipients: Vec<i32>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_corp_or_alliance_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_mailing_list_id: Option<i32>,
}

impl EsiClient {
    /// `POST /ui/autopilot/waypoint/`: sets or appends an autopilot waypoint
    /// in the character's running client.
    ///
    /// Requires `esi-ui.write_waypoint.v1`.
    pub async fn post_autopilot_waypoint(
        &self,
        destination_id: i64,
        add_to_beginning: bool,
        clear_other_waypoints: bool,
    ) -> EsiResult<()> {
        self.post_autopilot_waypoint_raw(destination_id, add_to_beginning, clear_other_waypoints)
            .await?;
        Ok(())
    }

    pub async fn post_autopilot_waypoint_raw(
        &self,
        destination_id: i64,
        add_to_beginning: bool,
        clear_other_waypoints: bool,
    ) -> EsiResult<EsiResponse> {
        self.post_empty(
            "/ui/autopilot/waypoint/",
            &Query::new()
                .with("add_to_beginning", add_to_beginning)
                .with("clear_other_waypoints", clear_other_waypoints)
                .with("destination_id", destination_id),
        )
        .await
    }

    /// `POST /ui/openwindow/contract/`
    ///
    /// Requires `esi-ui.open_window.v1`.
    pub async fn post_open_contract_window(&self, contract_id: i32) -> EsiResult<()> {
        self.post_open_contract_window_raw(contract_id).await?;
        Ok(())
    }

    pub async fn post_open_contract_window_raw(&self, contract_id: i32) -> EsiResult<EsiResponse> {
        self.post_empty(
            "/ui/openwindow/contract/",
            &Query::new().with("contract_id", contract_id),
        )
        .await
    }

    /// `POST /ui/openwindow/information/`: show-info for any id.
    ///
    /// Requires `esi-ui.open_window.v1`.
    pub async fn post_open_information_window(&self, target_id: i32) -> EsiResult<()> {
        self.post_open_information_window_raw(target_id).await?;
        Ok(())
    }

    pub async fn post_open_information_window_raw(
        &self,
        target_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.post_empty(
            "/ui/openwindow/information/",
            &Query::new().with("target_id", target_id),
        )
        .await
    }

    /// `POST /ui/openwindow/marketdetails/`
    ///
    /// Requires `esi-ui.open_window.v1`.
    pub async fn post_open_market_details_window(&self, type_id: TypeId) -> EsiResult<()> {
        self.post_open_market_details_window_raw(type_id).await?;
        Ok(())
    }

    pub async fn post_open_market_details_window_raw(
        &self,
        type_id: TypeId,
    ) -> EsiResult<EsiResponse> {
        self.post_empty(
            "/ui/openwindow/marketdetails/",
            &Query::new().with("type_id", type_id),
        )
        .await
    }

    /// `POST /ui/openwindow/newmail/`
    ///
    /// Requires `esi-ui.open_window.v1`.
    pub async fn post_open_new_mail_window(&self, mail: &NewMailWindow) -> EsiResult<()> {
        self.post_open_new_mail_window_raw(mail).await?;
        Ok(())
    }

    pub async fn post_open_new_mail_window_raw(
        &self,
        mail: &NewMailWindow,
    ) -> EsiResult<EsiResponse> {
        self.post("/ui/openwindow/newmail/", &Query::new(), mail)
            .await
    }
}
