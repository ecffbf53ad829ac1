use serde::{Deserialize, Serialize};
use skyhook_core::{CharacterId, Timestamp};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    Alliance,
    Character,
    Corporation,
    MailingList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailRecipient {
    pub recipient_id: i32,
    pub recipient_type: RecipientType,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MailHeader {
    pub from: Option<i32>,
    pub is_read: Option<bool>,
    #[serde(default)]
    pub labels: Vec<i32>,
    pub mail_id: Option<i32>,
    #[serde(default)]
    pub recipients: Vec<MailRecipient>,
    pub subject: Option<String>,
    pub timestamp: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Mail {
    pub body: Option<String>,
    pub from: Option<i32>,
    #[serde(default)]
    pub labels: Vec<i32>,
    pub read: Option<bool>,
    #[serde(default)]
    pub recipients: Vec<MailRecipient>,
    pub subject: Option<String>,
    pub timestamp: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_cost: Option<i64>,
    pub body: String,
    pub recipients: Vec<MailRecipient>,
    pub subject: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MailLabels {
    #[serde(default)]
    pub labels: Vec<MailLabel>,
    pub total_unread_count: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MailLabel {
    pub color: Option<String>,
    pub label_id: Option<i32>,
    pub name: Option<String>,
    pub unread_count: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMailLabel {
    /// Hex colour such as `#ffffff`; ESI only accepts its fixed palette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MailingList {
    pub mailing_list_id: i32,
    pub name: String,
}

/// Fields left as `None` are not changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MailUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

impl EsiClient {
    /// `GET /characters/{character_id}/mail/`: up to 50 headers, newest
    /// first, older than `last_mail_id` when given.
    ///
    /// Requires `esi-mail.read_mail.v1`.
    pub async fn get_character_mail(
        &self,
        character_id: CharacterId,
        labels: &[i32],
        last_mail_id: Option<i32>,
    ) -> EsiResult<Vec<MailHeader>> {
        self.get_character_mail_raw(character_id, labels, last_mail_id)
            .await?
            .json()
    }

    pub async fn get_character_mail_raw(
        &self,
        character_id: CharacterId,
        labels: &[i32],
        last_mail_id: Option<i32>,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/mail/"),
            &Query::new()
                .with_list("labels", labels)
                .with_opt("last_mail_id", last_mail_id),
        )
        .await
    }

    /// `POST /characters/{character_id}/mail/`: sends a mail and returns its id.
    ///
    /// Requires `esi-mail.send_mail.v1`.
    pub async fn post_character_mail(
        &self,
        character_id: CharacterId,
        mail: &NewMail,
    ) -> EsiResult<i32> {
        self.post_character_mail_raw(character_id, mail)
            .await?
            .json()
    }

    pub async fn post_character_mail_raw(
        &self,
        character_id: CharacterId,
        mail: &NewMail,
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/characters/{character_id}/mail/"),
            &Query::new(),
            mail,
        )
        .await
    }

    /// `GET /characters/{character_id}/mail/labels/`
    ///
    /// Requires `esi-mail.read_mail.v1`.
    pub async fn get_character_mail_labels(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<MailLabels> {
        self.get_character_mail_labels_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_mail_labels_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/mail/labels/"),
            &Query::new(),
        )
        .await
    }

    /// `POST /characters/{character_id}/mail/labels/`: returns the new label id.
    ///
    /// Requires `esi-mail.organize_mail.v1`.
    pub async fn post_character_mail_label(
        &self,
        character_id: CharacterId,
        label: &NewMailLabel,
    ) -> EsiResult<i32> {
        self.post_character_mail_label_raw(character_id, label)
            .await?
            .json()
    }

    pub async fn post_character_mail_label_raw(
        &self,
        character_id: CharacterId,
        label: &NewMailLabel,
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/characters/{character_id}/mail/labels/"),
            &Query::new(),
            label,
        )
        .await
    }

    /// `DELETE /characters/{character_id}/mail/labels/{label_id}/`
    ///
    /// Requires `esi-mail.organize_mail.v1`.
    pub async fn delete_character_mail_label(
        &self,
        character_id: CharacterId,
        label_id: i32,
    ) -> EsiResult<()> {
        self.delete_character_mail_label_raw(character_id, label_id)
            .await?;
        Ok(())
    }

    pub async fn delete_character_mail_label_raw(
        &self,
        character_id: CharacterId,
        label_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.delete(
            &format!("/characters/{character_id}/mail/labels/{label_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/mail/lists/`: subscribed mailing lists.
    ///
    /// Requires `esi-mail.read_mail.v1`.
    pub async fn get_character_mailing_lists(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<MailingList>> {
        self.get_character_mailing_lists_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_mailing_lists_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/mail/lists/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/mail/{mail_id}/`
    ///
    /// Requires `esi-mail.read_mail.v1`.
    pub async fn get_character_mail_message(
        &self,
        character_id: CharacterId,
        mail_id: i32,
    ) -> EsiResult<Mail> {
        self.get_character_mail_message_raw(character_id, mail_id)
            .await?
            .json()
    }

    pub async fn get_character_mail_message_raw(
        &self,
        character_id: CharacterId,
        mail_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/mail/{mail_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `PUT /characters/{character_id}/mail/{mail_id}/`: sets labels or read state.
    ///
    /// Requires `esi-mail.organize_mail.v1`.
    pub async fn put_character_mail_message(
        &self,
        character_id: CharacterId,
        mail_id: i32,
        update: &MailUpdate,
    ) -> EsiResult<()> {
        self.put_character_mail_message_raw(character_id, mail_id, update)
            .await?;
        Ok(())
    }

    pub async fn put_character_mail_message_raw(
        &self,
        character_id: CharacterId,
        mail_id: i32,
        update: &MailUpdate,
    ) -> EsiResult<EsiResponse> {
        self.put(
            &format!("/characters/{character_id}/mail/{mail_id}/"),
            &Query::new(),
            update,
        )
        .await
    }

    /// `DELETE /characters/{character_id}/mail/{mail_id}/`
    ///
    /// Requires `esi-mail.organize_mail.v1`.
    pub async fn delete_character_mail_message(
        &self,
        character_id: CharacterId,
        mail_id: i32,
    ) -> EsiResult<()> {
        self.delete_character_mail_message_raw(character_id, mail_id)
            .await?;
        Ok(())
    }

    pub async fn delete_character_mail_message_raw(
        &self,
        character_id: CharacterId,
        mail_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.delete(
            &format!("/characters/{character_id}/mail/{mail_id}/"),
            &Query::new(),
        )
        .await
    }
}
