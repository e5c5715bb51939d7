// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated query builders under test.
//!
//! The build script runs `querygen` over `fixtures/` once per dialect. Each
//! dialect module below mounts the fixtures with their generated artifacts,
//! the same way a user crate mounts `{stem}_model_gen.rs` next to its models.
//!
//! | Module | Dialect | Placeholders |
//! |--------|---------|--------------|
//! | [`mysql`] | MySQL | `?` |
//! | [`sqlite`] | SQLite | `?` |
//! | [`postgres`] | PostgreSQL | `$1, $2, ...` |

pub mod memory;

macro_rules! fixture {
    ($dialect:ident, $file:ident) => {
        pub mod $file {
            include!(concat!(
                env!("OUT_DIR"),
                "/",
                stringify!($dialect),
                "/",
                stringify!($file),
                ".rs"
            ));

            mod generated {
                include!(concat!(
                    env!("OUT_DIR"),
                    "/",
                    stringify!($dialect),
                    "/",
                    stringify!($file),
                    "_model_gen.rs"
                ));
            }

            pub use generated::*;
        }
    };
}

macro_rules! dialect {
    ($name:ident) => {
        pub mod $name {
            fixture!($name, models);
            fixture!($name, orders);
        }
    };
}

dialect!(mysql);
dialect!(sqlite);
dialect!(postgres);
