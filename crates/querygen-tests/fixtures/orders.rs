// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderModel {
    pub id: u32,
    pub r#type: String,
    pub total: f64,
}

/// Key-value pair, skipped because tuple structs have no column names.
#[derive(Debug)]
pub struct PairModel(pub String, pub String);
