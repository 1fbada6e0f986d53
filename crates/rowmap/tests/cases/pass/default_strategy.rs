// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

use rowmap::Entity;

#[derive(Entity, Default, Debug)]
#[entity(table = "Sessions", key = "id", default)]
pub struct Session {
    pub id: i64,
    pub token: String,
    #[column(skip)]
    pub touched: bool,
}

fn main() {
    use rowmap::EntityMap;
    let map = Session::entity_map();
    assert_eq!(map.writable_columns(), ["id", "token"]);
}
