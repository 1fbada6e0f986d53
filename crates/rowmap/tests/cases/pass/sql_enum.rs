// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

use rowmap::{SqlEnum, SqlValue, ToSqlValue};

#[derive(SqlEnum, Debug, Clone, Copy, PartialEq)]
pub enum Priority {
    Low = -1,
    Normal = 0,
    High = 10,
}

fn main() {
    assert_eq!(Priority::Low.to_sql_value(), SqlValue::Int(-1));
    assert_eq!(Priority::High.to_sql_value(), SqlValue::Int(10));
}
