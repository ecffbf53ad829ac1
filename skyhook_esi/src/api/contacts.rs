use serde::Deserialize;
use skyhook_core::{AllianceId, CharacterId, CorporationId};

use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub contact_id: i32,
    pub contact_type: ContactType,
    /// Character contacts only.
    pub is_blocked: Option<bool>,
    /// Character and corporation contacts only.
    pub is_watched: Option<bool>,
    pub label_ids: Option<Vec<i64>>,
    pub standing: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    Character,
    Corporation,
    Alliance,
    Faction,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactLabel {
    pub label_id: i64,
    pub label_name: String,
}

/// Options shared by adding and editing character contacts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactEdit {
    pub label_ids: Vec<i64>,
    pub watched: Option<bool>,
}

impl ContactEdit {
    fn query(&self, standing: f64) -> Query {
        Query::new()
            .with("standing", standing)
            .with_list("label_ids", &self.label_ids)
            .with_opt("watched", self.watched)
    }
}

impl EsiClient {
    /// `DELETE /characters/{character_id}/contacts/`: removes up to 20 contacts.
    ///
    /// Requires `esi-characters.write_contacts.v1`.
    pub async fn delete_character_contacts(
        &self,
        character_id: CharacterId,
        contact_ids: &[i32],
    ) -> EsiResult<()> {
        self.delete_character_contacts_raw(character_id, contact_ids)
            .await?;
        Ok(())
    }

    pub async fn delete_character_contacts_raw(
        &self,
        character_id: CharacterId,
        contact_ids: &[i32],
    ) -> EsiResult<EsiResponse> {
        self.delete(
            &format!("/characters/{character_id}/contacts/"),
            &Query::new().with_list("contact_ids", contact_ids),
        )
        .await
    }

    /// `GET /characters/{character_id}/contacts/`, every page.
    ///
    /// Requires `esi-characters.read_contacts.v1`.
    pub async fn get_character_contacts(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<Contact>> {
        let responses = self.get_character_contacts_raw(character_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_character_contacts_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/contacts/"),
            &Query::new(),
        )
        .await
    }

    /// `POST /characters/{character_id}/contacts/`: adds contacts with one
    /// standing; returns the ids that were created.
    ///
    /// Requires `esi-characters.write_contacts.v1`.
    pub async fn post_character_contacts(
        &self,
        character_id: CharacterId,
        contact_ids: &[i32],
        standing: f64,
        edit: &ContactEdit,
    ) -> EsiResult<Vec<i32>> {
        self.post_character_contacts_raw(character_id, contact_ids, standing, edit)
            .await?
            .json()
    }

    pub async fn post_character_contacts_raw(
        &self,
        character_id: CharacterId,
        contact_ids: &[i32],
        standing: f64,
        edit: &ContactEdit,
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/characters/{character_id}/contacts/"),
            &edit.query(standing),
            contact_ids,
        )
        .await
    }

    /// `PUT /characters/{character_id}/contacts/`: edits existing contacts.
    ///
    /// Requires `esi-characters.write_contacts.v1`.
    pub async fn put_character_contacts(
        &self,
        character_id: CharacterId,
        contact_ids: &[i32],
        standing: f64,
        edit: &ContactEdit,
    ) -> EsiResult<()> {
        self.put_character_contacts_raw(character_id, contact_ids, standing, edit)
            .await?;
        Ok(())
    }

    pub async fn put_character_contacts_raw(
        &self,
        character_id: CharacterId,
        contact_ids: &[i32],
        standing: f64,
        edit: &ContactEdit,
    ) -> EsiResult<EsiResponse> {
        self.put(
            &format!("/characters/{character_id}/contacts/"),
            &edit.query(standing),
            contact_ids,
        )
        .await
    }

    /// `GET /characters/{character_id}/contacts/labels/`
    ///
    /// Requires `esi-characters.read_contacts.v1`.
    pub async fn get_character_contact_labels(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<ContactLabel>> {
        self.get_character_contact_labels_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_contact_labels_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/contacts/labels/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /alliances/{alliance_id}/contacts/`, every page.
    ///
    /// Requires `esi-alliances.read_contacts.v1`.
    pub async fn get_alliance_contacts(&self, alliance_id: AllianceId) -> EsiResult<Vec<Contact>> {
        let responses = self.get_alliance_contacts_raw(alliance_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_alliance_contacts_raw(
        &self,
        alliance_id: AllianceId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/alliances/{alliance_id}/contacts/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /alliances/{alliance_id}/contacts/labels/`
    ///
    /// Requires `esi-alliances.read_contacts.v1`.
    pub async fn get_alliance_contact_labels(
        &self,
        alliance_id: AllianceId,
    ) -> EsiResult<Vec<ContactLabel>> {
        self.get_alliance_contact_labels_raw(alliance_id)
            .await?
            .json()
    }

    pub async fn get_alliance_contact_labels_raw(
        &self,
        alliance_id: AllianceId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/alliances/{alliance_id}/contacts/labels/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/contacts/`, every page.
    ///
    /// Requires `esi-corporations.read_contacts.v1`.
    pub async fn get_corporation_contacts(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<Contact>> {
        let responses = self.get_corporation_contacts_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_contacts_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/contacts/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/contacts/labels/`
    ///
    /// Requires `esi-corporations.read_contacts.v1`.
    pub async fn get_corporation_contact_labels(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<ContactLabel>> {
        self.get_corporation_contact_labels_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_contact_labels_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/contacts/labels/"),
            &Query::new(),
        )
        .await
    }
}
