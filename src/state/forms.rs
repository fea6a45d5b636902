/// Field bags for the intake forms and the payloads they produce
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use super::data::{parse_personality, AgeBucket, Compatibility, Gender, Pet, Species, Status};
use super::wizard::{FieldErrors, StepForm};

/// Listings accept at most this many photos
pub const MAX_PHOTOS: usize = 5;

const REQUIRED: &str = "This field is required";

fn require(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED.to_string());
    }
}

fn require_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, REQUIRED.to_string());
    } else if !looks_like_email(value) {
        errors.insert(field, "Enter a valid email address".to_string());
    }
}

/// Accepts `local@domain.tld` with no whitespace
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

// ========== Listing submission ==========

/// Text fields of the listing wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    PetName,
    Breed,
    Age,
    Description,
    Personality,
    HealthNotes,
    ContactName,
    Organization,
    ContactPhone,
    ContactEmail,
}

/// Boolean fields of the listing wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFlag {
    Vaccinated,
    Neutered,
    GoodWithKids,
    GoodWithPets,
    ApartmentFriendly,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    pub pet_name: String,
    pub species: Option<Species>,
    pub breed: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub city: Option<String>,
    pub vaccinated: bool,
    pub neutered: bool,
    pub photos: Vec<PathBuf>,
    pub description: String,
    pub personality: String,
    pub health_notes: String,
    pub compatibility: Compatibility,
    pub contact_name: String,
    pub organization: String,
    pub contact_phone: String,
    pub contact_email: String,
}

impl ListingForm {
    pub fn set(&mut self, field: ListingField, value: String) {
        let slot = match field {
            ListingField::PetName => &mut self.pet_name,
            ListingField::Breed => &mut self.breed,
            ListingField::Age => &mut self.age,
            ListingField::Description => &mut self.description,
            ListingField::Personality => &mut self.personality,
            ListingField::HealthNotes => &mut self.health_notes,
            ListingField::ContactName => &mut self.contact_name,
            ListingField::Organization => &mut self.organization,
            ListingField::ContactPhone => &mut self.contact_phone,
            ListingField::ContactEmail => &mut self.contact_email,
        };
        *slot = value;
    }

    pub fn toggle(&mut self, flag: ListingFlag, value: bool) {
        match flag {
            ListingFlag::Vaccinated => self.vaccinated = value,
            ListingFlag::Neutered => self.neutered = value,
            ListingFlag::GoodWithKids => self.compatibility.kids = value,
            ListingFlag::GoodWithPets => self.compatibility.other_pets = value,
            ListingFlag::ApartmentFriendly => self.compatibility.apartment = value,
        }
    }

    /// Append picked photos, keeping at most `MAX_PHOTOS` and skipping duplicates
    pub fn add_photos(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        for path in paths {
            if self.photos.len() >= MAX_PHOTOS {
                break;
            }
            if !self.photos.contains(&path) {
                self.photos.push(path);
            }
        }
    }

    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    /// Trait tags as they will be stored
    pub fn personality_tags(&self) -> Vec<String> {
        parse_personality(&self.personality)
    }

    /// The lister shown on the profile: organization when given, else the contact
    pub fn lister(&self) -> String {
        let organization = self.organization.trim();
        if organization.is_empty() {
            self.contact_name.trim().to_string()
        } else {
            organization.to_string()
        }
    }

    /// Build the stored listing from the form and its uploaded image URLs
    pub fn to_record(&self, id: String, images: Vec<String>, today: NaiveDate) -> Pet {
        let city = self.city.clone().filter(|c| !c.trim().is_empty());
        Pet {
            id,
            name: self.pet_name.trim().to_string(),
            species: self.species,
            breed: self.breed.trim().to_string(),
            age: self.age.trim().to_string(),
            age_bucket: AgeBucket::infer(&self.age),
            gender: self.gender,
            location: city.clone().unwrap_or_default(),
            city,
            images,
            vaccinated: self.vaccinated,
            neutered: self.neutered,
            description: self.description.trim().to_string(),
            personality: self.personality_tags(),
            compatibility: self.compatibility,
            health_notes: self.health_notes.trim().to_string(),
            listed_by: self.lister(),
            listed_date: Some(today),
            status: Status::Available,
        }
    }
}

impl StepForm for ListingForm {
    const STEPS: &'static [&'static str] = &["Pet Info", "Photos", "Details", "Contact"];

    fn validate_step(&self, step: usize) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            1 => {
                require(&mut errors, "pet_name", &self.pet_name);
                if self.species.is_none() {
                    errors.insert("species", "Choose a pet type".to_string());
                }
                require(&mut errors, "breed", &self.breed);
                require(&mut errors, "age", &self.age);
            }
            2 => {
                if self.photos.len() > MAX_PHOTOS {
                    errors.insert("photos", format!("Add at most {MAX_PHOTOS} photos"));
                }
            }
            3 => require(&mut errors, "description", &self.description),
            4 => {
                require(&mut errors, "contact_name", &self.contact_name);
                require(&mut errors, "contact_phone", &self.contact_phone);
                require_email(&mut errors, "contact_email", &self.contact_email);
            }
            _ => {}
        }
        errors
    }
}

// ========== Adoption inquiry ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryField {
    Name,
    Phone,
    Email,
    Message,
}

/// Adoption request sent from a pet's profile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub pet_id: String,
    pub pet_name: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl InquiryForm {
    pub fn for_pet(pet_id: &str, pet_name: &str) -> Self {
        Self {
            pet_id: pet_id.to_string(),
            pet_name: pet_name.to_string(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: InquiryField, value: String) {
        match field {
            InquiryField::Name => self.name = value,
            InquiryField::Phone => self.phone = value,
            InquiryField::Email => self.email = value,
            InquiryField::Message => self.message = value,
        }
    }

    /// Template parameters for the email collaborator
    pub fn template_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("pet_id".to_string(), self.pet_id.clone()),
            ("pet_name".to_string(), self.pet_name.clone()),
            ("user_name".to_string(), self.name.trim().to_string()),
            ("user_phone".to_string(), self.phone.trim().to_string()),
            ("user_email".to_string(), self.email.trim().to_string()),
            ("message".to_string(), self.message.trim().to_string()),
        ])
    }
}

impl StepForm for InquiryForm {
    const STEPS: &'static [&'static str] = &["Adoption Request"];

    fn validate_step(&self, _step: usize) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "phone", &self.phone);
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "message", &self.message);
        errors
    }
}

// ========== Contact message ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryType {
    Adoption,
    Listing,
    Partnership,
    Volunteer,
    Donation,
    Other,
}

impl InquiryType {
    pub const ALL: [InquiryType; 6] = [
        InquiryType::Adoption,
        InquiryType::Listing,
        InquiryType::Partnership,
        InquiryType::Volunteer,
        InquiryType::Donation,
        InquiryType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::Adoption => "adoption",
            InquiryType::Listing => "listing",
            InquiryType::Partnership => "partnership",
            InquiryType::Volunteer => "volunteer",
            InquiryType::Donation => "donation",
            InquiryType::Other => "other",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InquiryType::Adoption => "Adoption Inquiry",
            InquiryType::Listing => "Listing a Pet",
            InquiryType::Partnership => "NGO Partnership",
            InquiryType::Volunteer => "Volunteering",
            InquiryType::Donation => "Donation",
            InquiryType::Other => "Other",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: Option<InquiryType>,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn template_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("user_name".to_string(), self.name.trim().to_string()),
            ("user_email".to_string(), self.email.trim().to_string()),
            ("phone".to_string(), self.phone.trim().to_string()),
            (
                "inquiry_type".to_string(),
                self.inquiry_type
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_default(),
            ),
            ("subject".to_string(), self.subject.trim().to_string()),
            ("message".to_string(), self.message.trim().to_string()),
        ])
    }
}

impl StepForm for ContactForm {
    const STEPS: &'static [&'static str] = &["Message"];

    fn validate_step(&self, _step: usize) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "subject", &self.subject);
        require(&mut errors, "message", &self.message);
        errors
    }
}
