/// Browse-screen filtering
///
/// `Criteria` is the transient value object behind the adopt screen's search
/// box and filter panel. It lives for one visit of that screen and is never
/// persisted; a route query string can seed it.
use std::collections::BTreeSet;
use url::form_urlencoded;

use super::data::{AgeBucket, Pet, Species};

/// User-chosen filter values. An empty dimension accepts every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Free text matched against name, breed and location
    pub query: String,
    pub species: BTreeSet<Species>,
    pub ages: BTreeSet<AgeBucket>,
    pub cities: BTreeSet<String>,
    pub vaccinated_only: bool,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no dimension restricts the result
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.species.is_empty()
            && self.ages.is_empty()
            && self.cities.is_empty()
            && !self.vaccinated_only
    }

    /// Number of restricting panel filters, shown as the "Filters (n)" badge.
    /// The search box is not counted.
    pub fn active_filters(&self) -> usize {
        self.species.len()
            + self.ages.len()
            + self.cities.len()
            + usize::from(self.vaccinated_only)
    }

    pub fn toggle_species(&mut self, species: Species) {
        if !self.species.remove(&species) {
            self.species.insert(species);
        }
    }

    pub fn toggle_age(&mut self, age: AgeBucket) {
        if !self.ages.remove(&age) {
            self.ages.insert(age);
        }
    }

    pub fn toggle_city(&mut self, city: &str) {
        if !self.cities.remove(city) {
            self.cities.insert(city.to_string());
        }
    }

    /// Clear every dimension, including the search text
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Decide whether a record satisfies every active dimension
    pub fn matches(&self, pet: &Pet) -> bool {
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            let hit = [&pet.name, &pet.breed, &pet.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        if !self.species.is_empty()
            && !pet.species.is_some_and(|s| self.species.contains(&s))
        {
            return false;
        }

        if !self.ages.is_empty() && !pet.age_bucket.is_some_and(|a| self.ages.contains(&a)) {
            return false;
        }

        if !self.cities.is_empty()
            && !pet.city.as_ref().is_some_and(|c| self.cities.contains(c))
        {
            return false;
        }

        !self.vaccinated_only || pet.vaccinated
    }

    /// Seed criteria from a route query string such as `type=dog&city=Pune`
    ///
    /// `type` and `age` accept repeated keys or comma-separated values.
    /// `city` repeats its key instead, since city names may contain commas.
    /// Unknown keys and values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut criteria = Criteria::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "q" | "search" => criteria.query = value.into_owned(),
                "type" => criteria
                    .species
                    .extend(value.split(',').filter_map(Species::parse)),
                "age" => criteria
                    .ages
                    .extend(value.split(',').filter_map(AgeBucket::parse)),
                "city" => {
                    let city = value.trim();
                    if !city.is_empty() {
                        criteria.cities.insert(city.to_string());
                    }
                }
                "vaccinated" => {
                    criteria.vaccinated_only = matches!(value.as_ref(), "true" | "1" | "yes")
                }
                _ => {}
            }
        }
        criteria
    }

    /// Render as a query string (without the leading `?`); empty when `is_empty()`
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if !self.query.is_empty() {
            out.append_pair("q", &self.query);
        }
        for species in &self.species {
            out.append_pair("type", species.as_str());
        }
        for age in &self.ages {
            out.append_pair("age", age.as_str());
        }
        for city in &self.cities {
            out.append_pair("city", city);
        }
        if self.vaccinated_only {
            out.append_pair("vaccinated", "true");
        }
        out.finish()
    }
}

/// Stable filter over the store; all-empty criteria returns every record
pub fn apply<'a>(pets: &'a [Pet], criteria: &Criteria) -> Vec<&'a Pet> {
    pets.iter().filter(|pet| criteria.matches(pet)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::seed::seed_pets;

    fn names(pets: &[&Pet]) -> Vec<String> {
        pets.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything_in_order() {
        let pets = seed_pets();
        let result = apply(&pets, &Criteria::new());
        assert_eq!(result.len(), pets.len());
        assert!(result.iter().zip(pets.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let pets = seed_pets();
        for q in ["bruno", "BRUNO", "Bru"] {
            let criteria = Criteria { query: q.to_string(), ..Criteria::default() };
            assert_eq!(names(&apply(&pets, &criteria)), vec!["Bruno"], "query {q}");
        }
    }

    #[test]
    fn test_query_matches_breed_and_location() {
        let pets = seed_pets();
        let by_breed = Criteria { query: "persian".into(), ..Criteria::default() };
        assert_eq!(names(&apply(&pets, &by_breed)), vec!["Luna"]);

        let by_location = Criteria { query: "maharashtra".into(), ..Criteria::default() };
        assert_eq!(names(&apply(&pets, &by_location)), vec!["Bruno", "Luna"]);
    }

    #[test]
    fn test_dimensions_are_conjunctive() {
        let pets = seed_pets();
        let mut criteria = Criteria::new();
        criteria.toggle_species(Species::Dog);
        criteria.toggle_age(AgeBucket::Puppy);
        assert_eq!(names(&apply(&pets, &criteria)), vec!["Bruno", "Snowy", "Milo"]);

        criteria.toggle_city("Delhi");
        assert_eq!(names(&apply(&pets, &criteria)), vec!["Snowy"]);
    }

    #[test]
    fn test_missing_dimension_value_never_matches() {
        let mut pet = seed_pets().remove(0);
        pet.species = None;
        pet.city = None;

        let mut criteria = Criteria::new();
        assert!(criteria.matches(&pet));

        criteria.toggle_species(Species::Dog);
        assert!(!criteria.matches(&pet));

        criteria.clear();
        criteria.toggle_city("Mumbai");
        assert!(!criteria.matches(&pet));
    }

    #[test]
    fn test_vaccinated_only_excludes_unvaccinated() {
        let mut pets = seed_pets();
        pets[1].vaccinated = false;
        let criteria = Criteria { vaccinated_only: true, ..Criteria::default() };
        let result = apply(&pets, &criteria);
        assert_eq!(result.len(), pets.len() - 1);
        assert!(result.iter().all(|p| p.vaccinated));
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut criteria = Criteria::new();
        criteria.toggle_city("Pune");
        criteria.toggle_species(Species::Cat);
        assert_eq!(criteria.active_filters(), 2);
        criteria.toggle_city("Pune");
        criteria.toggle_species(Species::Cat);
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_query_string_seeding() {
        let criteria = Criteria::from_query("?type=dog,cat&age=puppy&city=Pune&vaccinated=true&x=1");
        assert_eq!(
            criteria.species,
            BTreeSet::from([Species::Dog, Species::Cat])
        );
        assert_eq!(criteria.ages, BTreeSet::from([AgeBucket::Puppy]));
        assert_eq!(criteria.cities, BTreeSet::from(["Pune".to_string()]));
        assert!(criteria.vaccinated_only);

        let ignored = Criteria::from_query("type=hamster&age=ancient");
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_query_string_round_trip() {
        let mut criteria = Criteria::new();
        criteria.query = "indie mix".into();
        criteria.toggle_species(Species::Dog);
        criteria.toggle_city("Hyderabad");
        let rendered = criteria.to_query();
        assert_eq!(rendered, "q=indie+mix&type=dog&city=Hyderabad");
        assert_eq!(Criteria::from_query(&rendered), criteria);
        assert_eq!(Criteria::new().to_query(), "");
    }

    #[test]
    fn test_city_with_comma_round_trips() {
        let mut criteria = Criteria::new();
        criteria.toggle_city("Delhi, NCR");
        criteria.toggle_city("Pune");

        let parsed = Criteria::from_query(&criteria.to_query());
        assert_eq!(parsed, criteria);
        assert!(parsed.cities.contains("Delhi, NCR"));
    }
}
