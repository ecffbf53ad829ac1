use serde::Deserialize;
use skyhook_core::{CharacterId, CorporationId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query, api::Position, concat_responses};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Bookmark {
    pub bookmark_id: i32,
    pub coordinates: Option<Position>,
    pub created: Timestamp,
    pub creator_id: i32,
    pub folder_id: Option<i32>,
    pub item: Option<BookmarkItem>,
    pub label: String,
    pub location_id: i32,
    pub notes: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct BookmarkItem {
    pub item_id: i64,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BookmarkFolder {
    /// Only present on corporation folders.
    pub creator_id: Option<CharacterId>,
    pub folder_id: i32,
    pub name: String,
}

impl EsiClient {
    /// `GET /characters/{character_id}/bookmarks/`, every page.
    ///
    /// Requires `esi-bookmarks.read_character_bookmarks.v1`.
    pub async fn get_character_bookmarks(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<Bookmark>> {
        let responses = self.get_character_bookmarks_raw(character_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_character_bookmarks_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/bookmarks/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/bookmarks/folders/`, every page.
    ///
    /// Requires `esi-bookmarks.read_character_bookmarks.v1`.
    pub async fn get_character_bookmark_folders(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<BookmarkFolder>> {
        let responses = self
            .get_character_bookmark_folders_raw(character_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_character_bookmark_folders_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/bookmarks/folders/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/bookmarks/`, every page.
    ///
    /// Requires `esi-bookmarks.read_corporation_bookmarks.v1`.
    pub async fn get_corporation_bookmarks(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<Bookmark>> {
        let responses = self.get_corporation_bookmarks_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_bookmarks_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/bookmarks/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/bookmarks/folders/`, every page.
    ///
    /// Requires `esi-bookmarks.read_corporation_bookmarks.v1`.
    pub async fn get_corporation_bookmark_folders(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<BookmarkFolder>> {
        let responses = self
            .get_corporation_bookmark_folders_raw(corporation_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_bookmark_folders_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/bookmarks/folders/"),
            &Query::new(),
        )
        .await
    }
}
