use serde::{Deserialize, Serialize};

pub type PlayerId = u64;

pub const DEFAULT_AGE: u32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    NonBinary,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NonBinary];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Other",
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Male
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl Player {
    pub fn blank(id: PlayerId, gender: Gender) -> Self {
        Self {
            id,
            name: String::new(),
            age: DEFAULT_AGE,
            gender,
        }
    }

    pub fn is_minor(&self) -> bool {
        self.age < 18
    }

    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty() && self.age > 0
    }
}

/// A single typed edit to a roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerUpdate {
    Name(String),
    Age(u32),
    Gender(Gender),
}

impl PlayerUpdate {
    pub fn apply(self, player: &mut Player) {
        match self {
            PlayerUpdate::Name(name) => player.name = name,
            PlayerUpdate::Age(age) => player.age = age,
            PlayerUpdate::Gender(gender) => player.gender = gender,
        }
    }
}
