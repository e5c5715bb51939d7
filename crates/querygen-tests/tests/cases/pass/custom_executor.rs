// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::any::Any;

use querygen_core::{Argument, Executor, Row};
use querygen_tests::postgres::models::{Person, PersonQueryBuilder};

#[derive(Debug)]
struct Unavailable;

struct NoRow;

impl Row for NoRow {
    type Error = Unavailable;

    fn column<T: Any>(&mut self, _index: usize) -> Result<T, Unavailable> {
        Err(Unavailable)
    }
}

#[derive(Default)]
struct Log {
    statements: Vec<(String, usize)>,
}

impl Executor for Log {
    type Error = Unavailable;
    type Row = NoRow;

    fn execute(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<u64, Unavailable> {
        self.statements.push((sql.to_string(), args.len()));
        Ok(args.len() as u64)
    }

    fn query(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<Vec<NoRow>, Unavailable> {
        self.statements.push((sql.to_string(), args.len()));
        Ok(Vec::new())
    }

    fn query_row(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<NoRow, Unavailable> {
        self.statements.push((sql.to_string(), args.len()));
        Ok(NoRow)
    }
}

fn main() {
    let mut db = Log::default();

    let people = Person::query().where_nickname_is("kit".to_string()).fetch(&mut db).unwrap();
    assert!(people.is_empty());

    let renamed = Person::query()
        .where_person_id_is(1)
        .set_nickname("cat".to_string())
        .update(&mut db)
        .unwrap();
    assert_eq!(renamed, 2);

    assert!(Person::query().first(&mut db).is_err());

    assert_eq!(
        db.statements,
        [
            ("SELECT * FROM people WHERE nickname = $1".to_string(), 1),
            ("UPDATE people SET nickname = $1 WHERE person_id = $2".to_string(), 2),
            ("SELECT * FROM people ORDER BY person_id ASC LIMIT 1".to_string(), 0),
        ]
    );
}
