// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

use rowmap::Entity;

#[derive(Entity, Debug)]
#[entity(table = "Users", key = "Id")]
pub struct User {
    #[column(rename = "Id")]
    pub id: i64,
    #[column(rename = "Email")]
    pub email: String,
    #[column(rename = "Active")]
    pub active: bool,
}

fn main() {
    use rowmap::EntityMap;
    let map = User::entity_map();
    assert_eq!(map.table_name(), "Users");
}
