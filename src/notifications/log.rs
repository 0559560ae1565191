// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::consts::DEFAULT_SECTION_SIZE;
use crate::errors::NodeResult;
use crate::notifications::SectionId;

/// One recorded event as seen through the notification log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Position in the log. Ids increase but may have gaps.
    pub id: u64,
    pub originator_id: String,
    pub originator_version: u64,
    pub topic: String,
    /// Serialized event state, opaque to the log.
    pub state: String,
}

/// A page of the notification log.
///
/// `id` describes the notifications actually contained, which can differ from
/// the requested id when the log is shorter or has gaps. `next_id` is set only
/// when the section is full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: Option<String>,
    pub items: Vec<Notification>,
    pub next_id: Option<String>,
}

impl Section {
    pub fn empty() -> Self {
        Self {
            id: None,
            items: Vec::new(),
            next_id: None,
        }
    }

    pub fn to_json(&self) -> NodeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(section: &str) -> NodeResult<Self> {
        Ok(serde_json::from_str(section)?)
    }
}

/// Source of recorded notifications.
#[async_trait]
pub trait NotificationReader: Send + Sync {
    /// Up to `limit` notifications with `id >= start`, in id order.
    async fn select_notifications(&self, start: u64, limit: u64) -> NodeResult<Vec<Notification>>;
}

/// Presents a [`NotificationReader`] as sections of bounded size.
#[derive(Clone)]
pub struct LocalNotificationLog {
    reader: Arc<dyn NotificationReader>,
    section_size: u64,
}

impl LocalNotificationLog {
    pub fn new(reader: Arc<dyn NotificationReader>) -> Self {
        Self::with_section_size(reader, DEFAULT_SECTION_SIZE)
    }

    pub fn with_section_size(reader: Arc<dyn NotificationReader>, section_size: u64) -> Self {
        Self {
            reader,
            section_size,
        }
    }

    pub fn section_size(&self) -> u64 {
        self.section_size
    }

    /// The section addressed by `section_id`.
    pub async fn section(&self, section_id: &str) -> NodeResult<Section> {
        let requested = SectionId::parse(section_id)?;

        let start = requested.first.max(1);
        let limit = requested
            .last
            .saturating_add(1)
            .saturating_sub(start)
            .min(self.section_size);
        if limit == 0 {
            return Ok(Section::empty());
        }

        let items = self.reader.select_notifications(start, limit).await?;
        let (Some(first), Some(last)) = (items.first(), items.last()) else {
            return Ok(Section::empty());
        };

        let id = SectionId::new(first.id, last.id).to_string();
        // A full section has a successor unless the id space is used up
        let next_id = if items.len() as u64 == limit {
            last.id.checked_add(1).and_then(|next_start| {
                next_start
                    .checked_add(limit - 1)
                    .map(|next_last| SectionId::new(next_start, next_last).to_string())
            })
        } else {
            None
        };

        Ok(Section {
            id: Some(id),
            items,
            next_id,
        })
    }

    /// The section addressed by `section_id`, serialized for `NotificationsReply`.
    pub async fn section_json(&self, section_id: &str) -> NodeResult<String> {
        self.section(section_id).await?.to_json()
    }
}

impl std::fmt::Debug for LocalNotificationLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalNotificationLog")
            .field("section_size", &self.section_size)
            .finish()
    }
}
