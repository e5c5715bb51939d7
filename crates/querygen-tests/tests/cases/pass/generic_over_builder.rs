// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use querygen_tests::sqlite::orders::{OrderModel, OrderModelColumn, OrderModelQueryBuilder};

fn page<B: OrderModelQueryBuilder>(builder: B, number: usize) -> B {
    builder
        .order_by_asc(OrderModelColumn::Id)
        .limit(10)
        .offset(number * 10)
}

fn main() {
    let order = OrderModel {
        id: 1,
        r#type: "gift".to_string(),
        total: 12.5,
    };
    assert_eq!(order.values().len(), 3);

    let sql = page(OrderModel::query().where_total_gt(order.total), 2).sql();
    assert_eq!(
        sql,
        "SELECT * FROM orders WHERE total > ? ORDER BY id ASC LIMIT 10 OFFSET 20"
    );
}
