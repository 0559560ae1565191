// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for notification section identifiers.

use thiserror::Error;

/// A section id that is not of the form `"first,last"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionIdError {
    /// The id did not contain exactly two comma-separated parts.
    #[error("Section id '{0}' must have the form 'first,last'")]
    Malformed(String),

    /// One of the two parts is not an unsigned integer.
    #[error("Section id '{section_id}' has a non-numeric part '{part}'")]
    NotANumber { section_id: String, part: String },
}
