// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use querygen_tests::mysql::models::{UserModel, UserModelColumn, UserModelQueryBuilder};

fn adults() -> impl UserModelQueryBuilder {
    UserModel::query()
        .where_age_ge(18)
        .order_by_asc(UserModelColumn::Name)
}

fn main() {
    let sql = adults().limit(20).offset(40).sql();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE age >= ? ORDER BY name ASC LIMIT 20 OFFSET 40"
    );

    for column in UserModelColumn::ALL {
        assert!(!column.as_str().is_empty());
    }
}
