use serde::{Deserialize, Serialize};

/// A guest, identified by name. Phone is free text and never validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            phone: phone.into(),
        }
    }
}
