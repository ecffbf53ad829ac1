use serde::{Deserialize, Serialize};
use skyhook_core::{CharacterId, Timestamp};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventResponse {
    Declined,
    NotResponded,
    Accepted,
    Tentative,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CalendarEventSummary {
    pub event_date: Option<Timestamp>,
    pub event_id: Option<i32>,
    pub event_response: Option<EventResponse>,
    pub importance: Option<i32>,
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CalendarEvent {
    pub date: Timestamp,
    /// Minutes.
    pub duration: i32,
    pub event_id: i32,
    pub importance: i32,
    pub owner_id: i32,
    pub owner_name: String,
    pub owner_type: String,
    pub response: String,
    pub text: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CalendarAttendee {
    pub character_id: Option<CharacterId>,
    pub event_response: Option<EventResponse>,
}

#[derive(Serialize)]
struct EventResponseBody {
    response: EventResponse,
}

impl EsiClient {
    /// `GET /characters/{character_id}/calendar/`: the next 50 events,
    /// starting after `from_event` when given.
    ///
    /// Requires `esi-calendar.read_calendar_events.v1`.
    pub async fn get_character_calendar(
        &self,
        character_id: CharacterId,
        from_event: Option<i32>,
    ) -> EsiResult<Vec<CalendarEventSummary>> {
        self.get_character_calendar_raw(character_id, from_event)
            .await?
            .json()
    }

    pub async fn get_character_calendar_raw(
        &self,
        character_id: CharacterId,
        from_event: Option<i32>,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/calendar/"),
            &Query::new().with_opt("from_event", from_event),
        )
        .await
    }

    /// `GET /characters/{character_id}/calendar/{event_id}/`
    ///
    /// Requires `esi-calendar.read_calendar_events.v1`.
    pub async fn get_character_calendar_event(
        &self,
        character_id: CharacterId,
        event_id: i32,
    ) -> EsiResult<CalendarEvent> {
        self.get_character_calendar_event_raw(character_id, event_id)
            .await?
            .json()
    }

    pub async fn get_character_calendar_event_raw(
        &self,
        character_id: CharacterId,
        event_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/calendar/{event_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `PUT /characters/{character_id}/calendar/{event_id}/`: respond to an event.
    ///
    /// Requires `esi-calendar.respond_calendar_events.v1`.
    pub async fn put_character_calendar_event(
        &self,
        character_id: CharacterId,
        event_id: i32,
        response: EventResponse,
    ) -> EsiResult<()> {
        self.put_character_calendar_event_raw(character_id, event_id, response)
            .await?;
        Ok(())
    }

    pub async fn put_character_calendar_event_raw(
        &self,
        character_id: CharacterId,
        event_id: i32,
        response: EventResponse,
    ) -> EsiResult<EsiResponse> {
        self.put(
            &format!("/characters/{character_id}/calendar/{event_id}/"),
            &Query::new(),
            &EventResponseBody { response },
        )
        .await
    }

    /// `GET /characters/{character_id}/calendar/{event_id}/attendees/`
    ///
    /// Requires `esi-calendar.read_calendar_events.v1`.
    pub async fn get_character_calendar_event_attendees(
        &self,
        character_id: CharacterId,
        event_id: i32,
    ) -> EsiResult<Vec<CalendarAttendee>> {
        self.get_character_calendar_event_attendees_raw(character_id, event_id)
            .await?
            .json()
    }

    pub async fn get_character_calendar_event_attendees_raw(
        &self,
        character_id: CharacterId,
        event_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/calendar/{event_id}/attendees/"),
            &Query::new(),
        )
        .await
    }
}
