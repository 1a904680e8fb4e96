use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course's acronym, i.e.: CS 1110
    pub acronym: String,

    /// Course's full name
    pub name: String,

    /// Exam date, kept as written in the catalog
    pub date: String,

    /// Exam time, kept as written in the catalog
    pub time: String,

    /// List of rooms where the exam takes place, never empty
    pub rooms: Vec<String>,
}

impl Course {
    /// Location as shown to the user
    pub fn location(&self) -> &str {
        match self.rooms.as_slice() {
            [room] => room.as_str(),
            [] => "",
            _ => "Multiple locations",
        }
    }
}
