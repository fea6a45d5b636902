//! Property tests for browse filtering.

use pawadopt::state::data::{AgeBucket, Pet, Species};
use pawadopt::state::filter::{apply, Criteria};
use pawadopt::state::seed::{seed_pets, CITIES};
use proptest::prelude::*;

fn species() -> impl Strategy<Value = Option<Species>> {
    prop_oneof![
        Just(Some(Species::Dog)),
        Just(Some(Species::Cat)),
        Just(None),
    ]
}

fn age() -> impl Strategy<Value = Option<AgeBucket>> {
    prop::option::of(prop::sample::select(AgeBucket::ALL.to_vec()))
}

prop_compose! {
    fn pet()(
        id in 0u32..10_000,
        name in "[A-Za-z]{1,10}",
        species in species(),
        age_bucket in age(),
        city in prop::option::of(prop::sample::select(CITIES.to_vec())),
        vaccinated in any::<bool>(),
    ) -> Pet {
        let mut pet = seed_pets().remove(0);
        pet.id = id.to_string();
        pet.name = name;
        pet.species = species;
        pet.age_bucket = age_bucket;
        pet.location = city.unwrap_or_default().to_string();
        pet.city = city.map(str::to_string);
        pet.vaccinated = vaccinated;
        pet
    }
}

prop_compose! {
    fn criteria()(
        query in prop_oneof![Just(String::new()), "[a-z]{1,3}"],
        species in prop::collection::btree_set(prop::sample::select(Species::ALL.to_vec()), 0..3),
        ages in prop::collection::btree_set(prop::sample::select(AgeBucket::ALL.to_vec()), 0..3),
        cities in prop::collection::btree_set(
            prop::sample::select(CITIES.to_vec()).prop_map(str::to_string),
            0..3,
        ),
        vaccinated_only in any::<bool>(),
    ) -> Criteria {
        Criteria { query, species, ages, cities, vaccinated_only }
    }
}

proptest! {
    /// Empty criteria is the identity, order included
    #[test]
    fn empty_criteria_returns_everything(pets in prop::collection::vec(pet(), 0..20)) {
        let result = apply(&pets, &Criteria::default());
        prop_assert_eq!(result.len(), pets.len());
        for (kept, original) in result.iter().zip(pets.iter()) {
            prop_assert!(std::ptr::eq(*kept, original));
        }
    }

    /// No generated pet is `Other`, so adding it can only narrow the result
    #[test]
    fn unmatched_species_never_grows_result(
        pets in prop::collection::vec(pet(), 0..20),
        mut criteria in criteria(),
    ) {
        criteria.species.remove(&Species::Other);
        let before = apply(&pets, &criteria).len();
        criteria.species.insert(Species::Other);
        let after = apply(&pets, &criteria).len();
        prop_assert!(after <= before);
    }

    #[test]
    fn vaccinated_only_excludes_unvaccinated(
        pets in prop::collection::vec(pet(), 0..20),
        mut criteria in criteria(),
    ) {
        criteria.vaccinated_only = true;
        prop_assert!(apply(&pets, &criteria).iter().all(|p| p.vaccinated));
    }

    /// The result is an order-preserving subsequence of the input
    #[test]
    fn result_is_a_subsequence(
        pets in prop::collection::vec(pet(), 0..20),
        criteria in criteria(),
    ) {
        let result = apply(&pets, &criteria);
        let mut rest = pets.iter();
        for kept in result {
            prop_assert!(rest.any(|p| std::ptr::eq(p, kept)));
        }
    }

    #[test]
    fn query_matching_ignores_case(name in "[A-Za-z]{3,10}", cut in 1usize..3) {
        let mut pet = seed_pets().remove(0);
        pet.name = name.clone();
        let pets = vec![pet];

        for query in [name.to_lowercase(), name.to_uppercase(), name[..cut].to_string()] {
            let criteria = Criteria { query, ..Criteria::default() };
            prop_assert_eq!(apply(&pets, &criteria).len(), 1);
        }
    }
}

fn two_pet_store() -> Vec<Pet> {
    let seeds = seed_pets();
    let mut bruno = seeds[0].clone();
    bruno.name = "Bruno".into();
    bruno.species = Some(Species::Dog);
    bruno.city = Some("Mumbai".into());
    bruno.location = "Mumbai, Maharashtra".into();
    bruno.vaccinated = true;

    let mut whiskers = seeds[1].clone();
    whiskers.name = "Whiskers".into();
    whiskers.species = Some(Species::Cat);
    whiskers.city = Some("Bangalore".into());
    whiskers.location = "Bangalore, Karnataka".into();
    whiskers.vaccinated = true;

    vec![bruno, whiskers]
}

fn names(pets: &[&Pet]) -> Vec<String> {
    pets.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_dog_filter_scenario() {
    let store = two_pet_store();
    let mut criteria = Criteria::default();
    criteria.toggle_species(Species::Dog);
    assert_eq!(names(&apply(&store, &criteria)), vec!["Bruno"]);
}

#[test]
fn test_partial_query_scenario() {
    let store = two_pet_store();
    let criteria = Criteria {
        query: "whisk".into(),
        ..Criteria::default()
    };
    assert_eq!(names(&apply(&store, &criteria)), vec!["Whiskers"]);
}

#[test]
fn test_bruno_query_variants() {
    let store = two_pet_store();
    for query in ["bruno", "BRUNO", "Bru"] {
        let criteria = Criteria {
            query: query.into(),
            ..Criteria::default()
        };
        assert_eq!(names(&apply(&store, &criteria)), vec!["Bruno"], "query {query}");
    }
}
