// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sections of a node's notification log.
//!
//! `GetNotifications` carries a section id and returns a serialized section.
//! This module fixes both: ids are `"first,last"` ([`SectionId`]) and a
//! section is the JSON form of [`Section`]. Where notifications come from is
//! left to a [`NotificationReader`].

mod log;
mod section_id;

pub use log::{LocalNotificationLog, Notification, NotificationReader, Section};
pub use section_id::SectionId;
