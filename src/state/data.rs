/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the backends and the UI layer.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Species tag of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Other,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Other];

    /// Parse the lowercase wire tag; unknown tags yield `None`
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dog" => Some(Species::Dog),
            "cat" => Some(Species::Cat),
            "other" => Some(Species::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Dogs",
            Species::Cat => "Cats",
            Species::Other => "Others",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Coarse age bracket used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBucket {
    Puppy,
    Young,
    Adult,
    Senior,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 4] = [
        AgeBucket::Puppy,
        AgeBucket::Young,
        AgeBucket::Adult,
        AgeBucket::Senior,
    ];

    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "puppy" => Some(AgeBucket::Puppy),
            "young" => Some(AgeBucket::Young),
            "adult" => Some(AgeBucket::Adult),
            "senior" => Some(AgeBucket::Senior),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBucket::Puppy => "puppy",
            AgeBucket::Young => "young",
            AgeBucket::Adult => "adult",
            AgeBucket::Senior => "senior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::Puppy => "Puppy/Kitten",
            AgeBucket::Young => "Young (1-3 yrs)",
            AgeBucket::Adult => "Adult (3-7 yrs)",
            AgeBucket::Senior => "Senior (7+ yrs)",
        }
    }

    /// Infer a bucket from free-text age such as "8 months" or "3 years"
    ///
    /// Returns `None` when the text has no leading number or no recognised unit.
    pub fn infer(age: &str) -> Option<Self> {
        let text = age.trim().to_ascii_lowercase();
        let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
        let value: u32 = digits.parse().ok()?;
        let unit = text[digits.len()..].trim_start();

        if unit.starts_with("week") || unit.starts_with("wk") {
            return Some(AgeBucket::Puppy);
        }
        if unit.starts_with("month") || unit.starts_with("mo") {
            return Some(if value < 12 {
                AgeBucket::Puppy
            } else {
                Self::from_years(value / 12)
            });
        }
        if unit.starts_with("year") || unit.starts_with("yr") {
            return Some(Self::from_years(value));
        }
        None
    }

    fn from_years(years: u32) -> Self {
        match years {
            0 => AgeBucket::Puppy,
            1..=2 => AgeBucket::Young,
            3..=7 => AgeBucket::Adult,
            _ => AgeBucket::Senior,
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        })
    }
}

/// Adoption status; transitions happen outside the app
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Available,
    Pending,
    Adopted,
}

impl Status {
    /// Unknown tags are shown as available, matching how listings are created
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pending" => Status::Pending,
            "adopted" => Status::Adopted,
            _ => Status::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Pending => "pending",
            Status::Adopted => "adopted",
        }
    }
}

/// Household compatibility flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Compatibility {
    pub kids: bool,
    pub other_pets: bool,
    pub apartment: bool,
}

/// Represents a single pet listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique within the store
    pub id: String,
    pub name: String,
    /// `None` when the source row carried no recognisable species
    pub species: Option<Species>,
    pub breed: String,
    /// Free-text age, e.g. "8 months"
    pub age: String,
    pub age_bucket: Option<AgeBucket>,
    pub gender: Option<Gender>,
    /// Display location, e.g. "Mumbai, Maharashtra"
    pub location: String,
    pub city: Option<String>,
    /// Ordered image URIs, cover image first
    pub images: Vec<String>,
    pub vaccinated: bool,
    pub neutered: bool,
    pub description: String,
    pub personality: Vec<String>,
    pub compatibility: Compatibility,
    pub health_notes: String,
    pub listed_by: String,
    pub listed_date: Option<NaiveDate>,
    pub status: Status,
}

impl Pet {
    /// The image shown on cards and as the main profile photo
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Species label for badges; unknown species read as "Pet"
    pub fn species_label(&self) -> String {
        self.species
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Pet".to_string())
    }
}

/// Split a comma-separated trait list into ordered, de-duplicated tags
pub fn parse_personality(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bucket_inference() {
        assert_eq!(AgeBucket::infer("8 months"), Some(AgeBucket::Puppy));
        assert_eq!(AgeBucket::infer("6 weeks"), Some(AgeBucket::Puppy));
        assert_eq!(AgeBucket::infer("1 year"), Some(AgeBucket::Young));
        assert_eq!(AgeBucket::infer("2 Years"), Some(AgeBucket::Young));
        assert_eq!(AgeBucket::infer("3 years"), Some(AgeBucket::Adult));
        assert_eq!(AgeBucket::infer("18 months"), Some(AgeBucket::Young));
        assert_eq!(AgeBucket::infer("9 yrs"), Some(AgeBucket::Senior));
        assert_eq!(AgeBucket::infer("about two years"), None);
        assert_eq!(AgeBucket::infer("4"), None);
    }

    #[test]
    fn test_tags_parse_leniently() {
        assert_eq!(Species::parse(" Dog "), Some(Species::Dog));
        assert_eq!(Species::parse("hamster"), None);
        assert_eq!(Gender::parse("FEMALE"), Some(Gender::Female));
        assert_eq!(Status::parse("pending"), Status::Pending);
        assert_eq!(Status::parse(""), Status::Available);
    }

    #[test]
    fn test_personality_split() {
        assert_eq!(
            parse_personality("Playful, curious,, playful ,  Calm"),
            vec!["Playful", "curious", "Calm"]
        );
        assert!(parse_personality(" , ").is_empty());
    }
}
