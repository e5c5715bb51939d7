// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::NaiveDateTime;
use uuid::Uuid;

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub score: f64,
    pub external_id: Uuid,
    pub created_at: NaiveDateTime,
}

/// @querybuilder(table = "people", primary_key = "person_id")
/// Someone known to the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub person_id: u64,
    pub nickname: String,
}

/// A model without columns.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EmptyModel {}

/// Application settings. Not a model.
#[derive(Debug, Default)]
pub struct Settings {
    pub theme: String,
}
