/// Built-in listings used to seed the offline catalog
use chrono::NaiveDate;

use super::data::{AgeBucket, Compatibility, Gender, Pet, Species, Status};

const DOG_PHOTO_1: &str = "https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=800";
const DOG_PHOTO_2: &str = "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=800";
const DOG_PHOTO_3: &str = "https://images.unsplash.com/photo-1583511655857-d19b40a7a54e?w=800";
const CAT_PHOTO_1: &str = "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=800";
const CAT_PHOTO_2: &str = "https://images.unsplash.com/photo-1592194996308-7b43878e84a6?w=800";

/// Cities offered in filters and on the listing form
pub const CITIES: [&str; 7] = [
    "Mumbai",
    "Bangalore",
    "Delhi",
    "Pune",
    "Chennai",
    "Hyderabad",
    "Kolkata",
];

struct SeedPet {
    id: &'static str,
    name: &'static str,
    species: Species,
    breed: &'static str,
    age: &'static str,
    age_bucket: AgeBucket,
    gender: Gender,
    location: &'static str,
    city: &'static str,
    image: &'static str,
    vaccinated: bool,
    neutered: bool,
    description: &'static str,
    personality: [&'static str; 4],
    compatibility: Compatibility,
    health_notes: &'static str,
    listed_by: &'static str,
    listed_date: (i32, u32, u32),
}

const SEEDS: [SeedPet; 6] = [
    SeedPet {
        id: "1",
        name: "Bruno",
        species: Species::Dog,
        breed: "Beagle Mix",
        age: "8 months",
        age_bucket: AgeBucket::Puppy,
        gender: Gender::Male,
        location: "Mumbai, Maharashtra",
        city: "Mumbai",
        image: DOG_PHOTO_1,
        vaccinated: true,
        neutered: false,
        description: "Bruno is an energetic and playful puppy who loves to explore. He was rescued \
            from a construction site and has blossomed into a loving companion. He enjoys long \
            walks, playing fetch, and cuddling on the couch.",
        personality: ["Playful", "Curious", "Affectionate", "Energetic"],
        compatibility: Compatibility { kids: true, other_pets: true, apartment: true },
        health_notes: "Up to date on all vaccinations. Healthy and active.",
        listed_by: "Paws Foundation Mumbai",
        listed_date: (2024, 12, 15),
    },
    SeedPet {
        id: "2",
        name: "Whiskers",
        species: Species::Cat,
        breed: "Orange Tabby",
        age: "2 years",
        age_bucket: AgeBucket::Young,
        gender: Gender::Male,
        location: "Bangalore, Karnataka",
        city: "Bangalore",
        image: CAT_PHOTO_1,
        vaccinated: true,
        neutered: true,
        description: "Whiskers is a calm and dignified gentleman who enjoys sunny spots and gentle \
            head scratches. He's independent but loves companionship and will purr contentedly \
            in your lap.",
        personality: ["Calm", "Independent", "Gentle", "Affectionate"],
        compatibility: Compatibility { kids: true, other_pets: false, apartment: true },
        health_notes: "Neutered and fully vaccinated. No health issues.",
        listed_by: "CUPA Bangalore",
        listed_date: (2024, 12, 10),
    },
    SeedPet {
        id: "3",
        name: "Snowy",
        species: Species::Dog,
        breed: "Labrador",
        age: "4 months",
        age_bucket: AgeBucket::Puppy,
        gender: Gender::Female,
        location: "Delhi NCR",
        city: "Delhi",
        image: DOG_PHOTO_2,
        vaccinated: true,
        neutered: false,
        description: "Snowy is a gentle soul with the sweetest eyes. She was found wandering alone \
            and is now looking for her forever home. She loves belly rubs and is great with \
            children.",
        personality: ["Gentle", "Sweet", "Calm", "Loving"],
        compatibility: Compatibility { kids: true, other_pets: true, apartment: true },
        health_notes: "All vaccinations complete. Dewormed and healthy.",
        listed_by: "Friendicoes Delhi",
        listed_date: (2024, 12, 18),
    },
    SeedPet {
        id: "4",
        name: "Luna",
        species: Species::Cat,
        breed: "Persian Mix",
        age: "1 year",
        age_bucket: AgeBucket::Young,
        gender: Gender::Female,
        location: "Pune, Maharashtra",
        city: "Pune",
        image: CAT_PHOTO_2,
        vaccinated: true,
        neutered: true,
        description: "Luna is a beautiful and curious cat with striking blue eyes. She loves to \
            play with feather toys and will follow you around the house. She's very vocal and \
            loves to 'talk' to her humans.",
        personality: ["Curious", "Playful", "Vocal", "Social"],
        compatibility: Compatibility { kids: true, other_pets: true, apartment: true },
        health_notes: "Spayed and vaccinated. In perfect health.",
        listed_by: "RESQ Pune",
        listed_date: (2024, 12, 12),
    },
    SeedPet {
        id: "5",
        name: "Raja",
        species: Species::Dog,
        breed: "Indian Pariah",
        age: "3 years",
        age_bucket: AgeBucket::Adult,
        gender: Gender::Male,
        location: "Chennai, Tamil Nadu",
        city: "Chennai",
        image: DOG_PHOTO_3,
        vaccinated: true,
        neutered: true,
        description: "Raja is a handsome and loyal indie dog with a heart of gold. He was a street \
            dog who learned to trust humans again. He's protective, intelligent, and makes an \
            excellent companion.",
        personality: ["Loyal", "Intelligent", "Protective", "Friendly"],
        compatibility: Compatibility { kids: true, other_pets: false, apartment: false },
        health_notes: "Neutered and fully vaccinated. Very healthy and active.",
        listed_by: "Blue Cross Chennai",
        listed_date: (2024, 12, 8),
    },
    SeedPet {
        id: "6",
        name: "Milo",
        species: Species::Dog,
        breed: "Indie Mix",
        age: "6 months",
        age_bucket: AgeBucket::Puppy,
        gender: Gender::Male,
        location: "Hyderabad, Telangana",
        city: "Hyderabad",
        image: DOG_PHOTO_1,
        vaccinated: true,
        neutered: false,
        description: "Milo is a bundle of joy! This adorable pup loves everyone he meets and has \
            never met a stranger. Perfect for an active family looking for a fun companion.",
        personality: ["Friendly", "Energetic", "Social", "Happy"],
        compatibility: Compatibility { kids: true, other_pets: true, apartment: true },
        health_notes: "Vaccinated and dewormed. Healthy puppy.",
        listed_by: "PFA Hyderabad",
        listed_date: (2024, 12, 20),
    },
];

/// The static listings, in display order
pub fn seed_pets() -> Vec<Pet> {
    SEEDS
        .iter()
        .map(|seed| {
            let (y, m, d) = seed.listed_date;
            Pet {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                species: Some(seed.species),
                breed: seed.breed.to_string(),
                age: seed.age.to_string(),
                age_bucket: Some(seed.age_bucket),
                gender: Some(seed.gender),
                location: seed.location.to_string(),
                city: Some(seed.city.to_string()),
                images: vec![seed.image.to_string()],
                vaccinated: seed.vaccinated,
                neutered: seed.neutered,
                description: seed.description.to_string(),
                personality: seed.personality.iter().map(|t| t.to_string()).collect(),
                compatibility: seed.compatibility,
                health_notes: seed.health_notes.to_string(),
                listed_by: seed.listed_by.to_string(),
                listed_date: NaiveDate::from_ymd_opt(y, m, d),
                status: Status::Available,
            }
        })
        .collect()
}
