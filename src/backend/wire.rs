/// Row shapes of the hosted `pets` table
///
/// Rows are read leniently: every column may be missing or null, and a few
/// columns have historically been written in more than one shape. A column
/// holding a value of the wrong type reads as missing.
use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::state::data::{parse_personality, AgeBucket, Compatibility, Gender, Pet, Species, Status};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PetRow {
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub species: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub breed: Option<String>,
    /// Text such as "2 years", occasionally a bare number
    pub age: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub age_category: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub images: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub vaccinated: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub neutered: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    /// A list of tags or one comma-separated string
    pub personality: Option<Value>,
    /// Either a JSON object or a string holding one
    pub compatibility: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub health_notes: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub listed_by: Option<String>,
    /// A date or a full timestamp
    #[serde(deserialize_with = "lenient")]
    pub listed_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Decode one row of a table response; rows that cannot be read are dropped
pub fn decode_pet(value: Value) -> Option<Pet> {
    match serde_json::from_value::<PetRow>(value) {
        Ok(row) => row.into_pet(),
        Err(e) => {
            tracing::warn!(error = %e, "ignored unreadable pet row");
            None
        }
    }
}

impl PetRow {
    /// Convert to a record; rows without a usable identifier are dropped
    pub fn into_pet(self) -> Option<Pet> {
        let id = match self.id? {
            Value::String(s) if !s.trim().is_empty() => s,
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        let images = match self.images {
            Some(images) if !images.is_empty() => images,
            _ => self.image_url.into_iter().collect(),
        };

        let city = self.city.filter(|c| !c.trim().is_empty());
        let location = self
            .location
            .filter(|l| !l.trim().is_empty())
            .or_else(|| city.clone())
            .unwrap_or_default();

        Some(Pet {
            id,
            name: self.name.unwrap_or_default(),
            species: self.species.as_deref().and_then(Species::parse),
            breed: self.breed.unwrap_or_default(),
            age: match self.age {
                Some(Value::String(s)) => s,
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            },
            age_bucket: self.age_category.as_deref().and_then(AgeBucket::parse),
            gender: self.gender.as_deref().and_then(Gender::parse),
            location,
            city,
            images,
            vaccinated: self.vaccinated.unwrap_or(false),
            neutered: self.neutered.unwrap_or(false),
            description: self.description.unwrap_or_default(),
            personality: parse_personality_column(self.personality),
            compatibility: parse_compatibility(self.compatibility),
            health_notes: self.health_notes.unwrap_or_default(),
            listed_by: self.listed_by.unwrap_or_default(),
            listed_date: self.listed_date.as_deref().and_then(parse_listed_date),
            status: self.status.as_deref().map(Status::parse).unwrap_or_default(),
        })
    }
}

fn parse_compatibility(value: Option<Value>) -> Compatibility {
    let value = match value {
        Some(Value::String(text)) => serde_json::from_str(&text).ok(),
        other => other,
    };
    value
        .and_then(|v| serde_json::from_value::<Compatibility>(v).ok())
        .unwrap_or_default()
}

fn parse_personality_column(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::String(text)) => parse_personality(&text),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn parse_listed_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
        .or_else(|| text.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

/// Insert payload for a new listing
#[derive(Debug, Serialize)]
pub struct NewPetRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub species: Option<&'static str>,
    pub breed: &'a str,
    pub age: &'a str,
    pub age_category: Option<&'static str>,
    pub gender: Option<&'static str>,
    pub location: &'a str,
    pub city: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub images: &'a [String],
    pub vaccinated: bool,
    pub neutered: bool,
    pub description: &'a str,
    pub personality: &'a [String],
    pub compatibility: Compatibility,
    pub health_notes: &'a str,
    pub listed_by: &'a str,
    pub listed_date: Option<String>,
    pub status: &'static str,
}

impl<'a> From<&'a Pet> for NewPetRow<'a> {
    fn from(pet: &'a Pet) -> Self {
        NewPetRow {
            id: &pet.id,
            name: &pet.name,
            species: pet.species.map(|s| s.as_str()),
            breed: &pet.breed,
            age: &pet.age,
            age_category: pet.age_bucket.map(|a| a.as_str()),
            gender: pet.gender.map(|g| g.as_str()),
            location: &pet.location,
            city: pet.city.as_deref(),
            image_url: pet.cover_image(),
            images: &pet.images,
            vaccinated: pet.vaccinated,
            neutered: pet.neutered,
            description: &pet.description,
            personality: &pet.personality,
            compatibility: pet.compatibility,
            health_notes: &pet.health_notes,
            listed_by: &pet.listed_by,
            listed_date: pet.listed_date.map(|d| d.format("%Y-%m-%d").to_string()),
            status: pet.status.as_str(),
        }
    }
}

/// One row of the favorites join table as selected by the client
#[derive(Debug, Deserialize)]
pub struct FavoriteRow {
    pub pet_id: Value,
}

impl FavoriteRow {
    pub fn into_pet_id(self) -> Option<String> {
        match self.pet_id {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewFavoriteRow<'a> {
    pub user_id: &'a str,
    pub pet_id: &'a str,
}
