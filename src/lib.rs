// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Annospan: the interaction core of an entity annotation page.
//!
//! Token clicks build a [`selection::SelectionRange`], end-token marks narrow the act-on scope,
//! feature widgets stage values and [`diff::compute`] turns the staged state into the change a
//! host submits. [`session::AnnotatorSession`] wires the components together.

pub mod config;
pub mod diff;
pub mod model;
pub mod query;
pub mod scope;
pub mod selection;
pub mod session;
pub mod sets;
pub mod staging;
