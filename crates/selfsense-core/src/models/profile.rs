use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

const MAX_AGE: u8 = 120;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    #[default]
    Female,
    Male,
    Other,
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// A person the assessments are taken for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
}

/// Profile fields as entered, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
}

impl NewProfile {
    /// Name and age are required; phone is optional.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        if self.age == 0 {
            return Err(CoreError::MissingField("age".to_string()));
        }
        if self.age > MAX_AGE {
            return Err(CoreError::InvalidInput(format!(
                "age {} is above {MAX_AGE}",
                self.age
            )));
        }
        Ok(())
    }

    pub fn into_profile(self, id: u32) -> Profile {
        Profile {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            phone: self.phone,
        }
    }
}
