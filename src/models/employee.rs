use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub department: String,
}

/// Request body for create and update. Every field is required.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub age: i64,
    pub department: String,
}
