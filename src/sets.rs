// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Annotation-set naming requests.
//!
//! Naming and confirmation dialogs are an injected [`Prompt`]. A request only ever inspects the
//! [`SetCatalog`]; executing the returned [`SetRequest`] is the host's job, so a cancelled dialog
//! leaves everything as it was.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Synchronous modal dialog capability.
pub trait Prompt {
    /// Asks for a string; `None` means the user cancelled.
    fn ask(&mut self, message: &str, default: &str) -> Option<String>;

    fn confirm(&mut self, message: &str) -> bool;
}

/// The built-in set holding entities generated with the corpus.
pub const BUILTIN_SET: &str = "";

/// Existing annotation sets and the one currently chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCatalog {
    current: String,
    names: BTreeSet<String>,
}

impl SetCatalog {
    pub fn new(current: impl Into<String>, names: impl IntoIterator<Item = String>) -> Self {
        Self { current: current.into(), names: names.into_iter().collect() }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn exists(&self, name: &str) -> bool {
        name == BUILTIN_SET || self.names.contains(name)
    }

    /// The built-in set and sets whose name starts with `.` cannot be modified.
    pub fn is_read_only(name: &str) -> bool {
        name == BUILTIN_SET || name.starts_with('.')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum SetRequest {
    /// Switch to a set, creating it when it does not exist yet.
    Switch { name: String },
    Duplicate { name: String },
    Rename { from: String, to: String },
    Delete { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetRequestError {
    EmptyName,
    ReadOnly { name: String },
    AlreadyExists { name: String },
    Unchanged { name: String },
}

impl fmt::Display for SetRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("set name must not be empty"),
            Self::ReadOnly { name } => write!(f, "set '{name}' is read-only"),
            Self::AlreadyExists { name } => write!(f, "set '{name}' already exists"),
            Self::Unchanged { name } => write!(f, "set is already named '{name}'"),
        }
    }
}

impl std::error::Error for SetRequestError {}

type RequestResult = Result<Option<SetRequest>, SetRequestError>;

fn ask_name(prompt: &mut dyn Prompt, message: &str, default: &str) -> Option<String> {
    let answer = prompt.ask(message, default);
    if answer.is_none() {
        log::info!("event=set_prompt_cancelled message_len={}", message.len());
    }
    answer.map(|name| name.trim().to_owned())
}

fn reject(err: SetRequestError) -> RequestResult {
    log::warn!("event=set_request_rejected reason=\"{err}\"");
    Err(err)
}

/// Switch to a named set, which the host creates if needed.
pub fn request_new(catalog: &SetCatalog, prompt: &mut dyn Prompt) -> RequestResult {
    let Some(name) = ask_name(prompt, "New annotation set:", "") else {
        return Ok(None);
    };
    if name.is_empty() {
        return reject(SetRequestError::EmptyName);
    }
    if name == catalog.current() {
        return reject(SetRequestError::Unchanged { name });
    }
    log::info!("event=set_request action=switch existing={}", catalog.exists(&name));
    Ok(Some(SetRequest::Switch { name }))
}

/// Copy the current set under a new, unused name.
pub fn request_duplicate(catalog: &SetCatalog, prompt: &mut dyn Prompt) -> RequestResult {
    let Some(name) = ask_name(prompt, "Duplicate current set as:", catalog.current()) else {
        return Ok(None);
    };
    if name.is_empty() {
        return reject(SetRequestError::EmptyName);
    }
    if catalog.exists(&name) {
        return reject(SetRequestError::AlreadyExists { name });
    }
    log::info!("event=set_request action=duplicate");
    Ok(Some(SetRequest::Duplicate { name }))
}

pub fn request_rename(catalog: &SetCatalog, prompt: &mut dyn Prompt) -> RequestResult {
    let from = catalog.current().to_owned();
    if SetCatalog::is_read_only(&from) {
        return reject(SetRequestError::ReadOnly { name: from });
    }
    let Some(to) = ask_name(prompt, "Rename current set to:", &from) else {
        return Ok(None);
    };
    if to.is_empty() {
        return reject(SetRequestError::EmptyName);
    }
    if to == from {
        return reject(SetRequestError::Unchanged { name: to });
    }
    if SetCatalog::is_read_only(&to) {
        return reject(SetRequestError::ReadOnly { name: to });
    }
    if catalog.exists(&to) {
        return reject(SetRequestError::AlreadyExists { name: to });
    }
    log::info!("event=set_request action=rename");
    Ok(Some(SetRequest::Rename { from, to }))
}

pub fn request_delete(catalog: &SetCatalog, prompt: &mut dyn Prompt) -> RequestResult {
    let name = catalog.current().to_owned();
    if SetCatalog::is_read_only(&name) {
        return reject(SetRequestError::ReadOnly { name });
    }
    if !prompt.confirm(&format!("Delete annotation set '{name}'?")) {
        log::info!("event=set_prompt_cancelled action=delete");
        return Ok(None);
    }
    log::info!("event=set_request action=delete");
    Ok(Some(SetRequest::Delete { name }))
}
