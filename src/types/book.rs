use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateBook {
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateBook {
    pub title: String,
}
