//! Integration tests for network queries.
//!
//! A full world (turtles, their sensei, his nemesis, and somebody nobody
//! talks to) is built through the public API, then queried with both
//! aggregation shapes and the recommendation check.

use network::{FriendNetwork, UNBOUNDED, hop_distances};
use ranking::RankMode;
use world::{LoverId, PizzaPlace, PizzaWorld, PlaceId};

const TRADITIONAL: [&str; 6] = ["Margarita", "Hawaiian", "Greek", "Napoli", "Sicilian", "Marinara"];
const MEAT: [&str; 5] = ["Chicken", "Bacon", "Ground Beef", "Pepperoni", "Anchovies"];
const VEGGIE: [&str; 4] = ["Mushrooms", "Tomatoes", "Onion", "Olives"];
const COMPLEMENTS: [&str; 5] = ["Calzone", "Fries", "Onion rings", "Coca-cola", "Cola zero"];

// Places
const PIZZA_BAD: PlaceId = 10;
const PIZZA_RAT: PlaceId = 20;
const PIZZA_WHAT: PlaceId = 30;
const ITALIANO: PlaceId = 40;
const PIZZA_HUT: PlaceId = 50;
const DOMINOS: PlaceId = 60;
const NUNA: PlaceId = 70;

// Lovers
const STUDENT: LoverId = 1;
const FOREVER_ALONE: LoverId = 300;
const LEONARDO: LoverId = 12345;
const DONATELLO: LoverId = 23456;
const RAFAEL: LoverId = 45678;
const MICHELANGELO: LoverId = 56789;
const SPLINTER: LoverId = 67891;
const SHREDDER: LoverId = 78910;
const KRANG: LoverId = 89101;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn ids(places: &[&PizzaPlace]) -> Vec<PlaceId> {
    places.iter().map(|p| p.id()).collect()
}

fn populate_world() -> PizzaWorld {
    init_tracing();
    let mut world = PizzaWorld::new();

    world.add_place(ITALIANO, "Italiano", 125, TRADITIONAL).unwrap();
    world.add_place(PIZZA_HUT, "Pizza Hut", 15, VEGGIE).unwrap();
    world.add_place(DOMINOS, "Dominos", 650, MEAT).unwrap();
    // the next three share a distance
    world.add_place(PIZZA_BAD, "Pizza Bad", 350, COMPLEMENTS).unwrap();
    world.add_place(PIZZA_RAT, "Pizza Rat", 350, TRADITIONAL).unwrap();
    world.add_place(PIZZA_WHAT, "Pizza What?", 350, MEAT).unwrap();
    world.add_place(NUNA, "Nuna", 40, VEGGIE).unwrap();
    assert_eq!(world.registered_places().len(), 7);

    for (id, name) in [
        (LEONARDO, "Leonardo"),
        (DONATELLO, "Donatello"),
        (MICHELANGELO, "Michelangelo"),
        (RAFAEL, "Rafael"),
        (SPLINTER, "Splinter"),
        (SHREDDER, "Shredder"),
        (KRANG, "Krang"),
        (STUDENT, "Student"),
        (FOREVER_ALONE, "Forever Alone"),
    ] {
        world.join_network(id, name).unwrap();
    }
    assert_eq!(world.registered_lovers().len(), 9);

    world
}

fn friend_count(world: &PizzaWorld, id: LoverId) -> usize {
    world.friends_of(id).unwrap().len()
}

fn set_up_connections(world: &mut PizzaWorld) {
    let turtles = [LEONARDO, DONATELLO, MICHELANGELO, RAFAEL];

    // the turtles are a clique
    for (i, &a) in turtles.iter().enumerate() {
        for &b in &turtles[i + 1..] {
            world.add_connection(a, b).unwrap();
        }
    }
    for &turtle in &turtles {
        assert_eq!(friend_count(world, turtle), 3);
    }

    for &turtle in &turtles {
        world.add_connection(STUDENT, turtle).unwrap();
    }
    assert_eq!(friend_count(world, STUDENT), 4);

    world.add_connection(SHREDDER, KRANG).unwrap();
    assert_eq!(friend_count(world, SHREDDER), 1);
    assert_eq!(friend_count(world, KRANG), 1);

    for &turtle in &turtles {
        world.add_connection(turtle, SPLINTER).unwrap();
        assert_eq!(friend_count(world, turtle), 5);
    }

    // gives the graph some depth: student -> turtle -> splinter -> shredder -> krang
    world.add_connection(SPLINTER, SHREDDER).unwrap();
    assert_eq!(friend_count(world, SPLINTER), 5);
}

fn rate_all(world: &mut PizzaWorld, place: PlaceId, scores: &[(LoverId, i32)]) {
    for &(lover, score) in scores {
        world.rate(place, lover, score).unwrap();
    }
}

fn favorite_all(world: &mut PizzaWorld, lover: LoverId, places: &[PlaceId]) {
    for &place in places {
        world.favorite(lover, place).unwrap();
    }
}

fn assert_average(world: &PizzaWorld, place: PlaceId, expected: f64) {
    let actual = world.get_place(place).unwrap().average_rating();
    assert!((actual - expected).abs() < 1e-5, "place {place}: {actual} != {expected}");
}

/// Hut and Dominos share a rating at different distances; Bad and What
/// share both rating and distance.
fn set_up_ratings_focus_on_rating(world: &mut PizzaWorld) {
    rate_all(world, ITALIANO, &[(LEONARDO, 5), (DONATELLO, 4)]);
    rate_all(world, PIZZA_HUT, &[(LEONARDO, 4), (MICHELANGELO, 2)]);
    rate_all(world, DOMINOS, &[(LEONARDO, 4), (DONATELLO, 2)]);
    rate_all(world, PIZZA_BAD, &[(DONATELLO, 1), (MICHELANGELO, 2)]);
    rate_all(world, PIZZA_WHAT, &[(DONATELLO, 1), (FOREVER_ALONE, 2)]);
    rate_all(world, NUNA, &[(RAFAEL, 5), (SHREDDER, 5)]);
    rate_all(world, PIZZA_RAT, &[(SPLINTER, 5)]);

    favorite_all(world, LEONARDO, &[DOMINOS, PIZZA_HUT, ITALIANO]);
    favorite_all(world, DONATELLO, &[DOMINOS, ITALIANO, PIZZA_WHAT, PIZZA_BAD]);
    favorite_all(world, MICHELANGELO, &[PIZZA_HUT, PIZZA_BAD]);
    favorite_all(world, RAFAEL, &[NUNA]);
    favorite_all(world, SPLINTER, &[PIZZA_RAT]);

    assert_average(world, ITALIANO, 4.5);
    assert_average(world, PIZZA_HUT, 3.0);
    assert_average(world, DOMINOS, 3.0);
    assert_average(world, PIZZA_BAD, 1.5);
    assert_average(world, PIZZA_WHAT, 1.5);
    assert_average(world, NUNA, 5.0);
}

/// Bad, Rat and What share a distance; Bad and What also share a rating.
fn set_up_ratings_focus_on_distance(world: &mut PizzaWorld) {
    rate_all(world, ITALIANO, &[(SPLINTER, 5), (FOREVER_ALONE, 5)]);
    rate_all(world, NUNA, &[(LEONARDO, 5), (SHREDDER, 5), (MICHELANGELO, 5)]);
    rate_all(world, DOMINOS, &[(RAFAEL, 3), (FOREVER_ALONE, 2), (LEONARDO, 4)]);
    rate_all(world, PIZZA_BAD, &[(DONATELLO, 1), (SHREDDER, 3), (MICHELANGELO, 2)]);
    rate_all(world, PIZZA_WHAT, &[(DONATELLO, 1), (SHREDDER, 3), (MICHELANGELO, 2)]);
    rate_all(world, PIZZA_HUT, &[(RAFAEL, 3), (SHREDDER, 5), (LEONARDO, 4)]);
    rate_all(world, PIZZA_RAT, &[(DONATELLO, 3), (MICHELANGELO, 3)]);

    favorite_all(world, LEONARDO, &[NUNA, PIZZA_HUT, DOMINOS]);
    favorite_all(world, DONATELLO, &[PIZZA_RAT, PIZZA_WHAT, PIZZA_BAD]);
    favorite_all(world, MICHELANGELO, &[NUNA, PIZZA_RAT, PIZZA_WHAT, PIZZA_BAD]);
    favorite_all(world, RAFAEL, &[PIZZA_HUT, DOMINOS]);
    favorite_all(world, SPLINTER, &[ITALIANO]);

    assert_average(world, PIZZA_HUT, 4.0);
    assert_average(world, DOMINOS, 3.0);
    assert_average(world, PIZZA_RAT, 3.0);
    assert_average(world, PIZZA_BAD, 2.0);
    assert_average(world, PIZZA_WHAT, 2.0);
    assert_average(world, NUNA, 5.0);
}

fn world_with(set_up_ratings: fn(&mut PizzaWorld)) -> PizzaWorld {
    let mut world = populate_world();
    set_up_connections(&mut world);
    set_up_ratings(&mut world);
    world
}

#[test]
fn test_network_favorites_by_rating() {
    let world = world_with(set_up_ratings_focus_on_rating);
    let network = FriendNetwork::new(&world);

    let actual = ids(&network.favorites_by_rating(STUDENT).unwrap());
    assert!(
        !actual.contains(&PIZZA_RAT),
        "Splinter isn't a direct friend of the student"
    );
    assert_eq!(
        actual,
        vec![NUNA, ITALIANO, PIZZA_HUT, DOMINOS, PIZZA_BAD, PIZZA_WHAT]
    );
}

#[test]
fn test_network_favorites_by_distance() {
    let world = world_with(set_up_ratings_focus_on_rating);
    let network = FriendNetwork::new(&world);

    let actual = ids(&network.favorites_by_distance(STUDENT).unwrap());
    assert!(!actual.contains(&PIZZA_RAT));
    assert_eq!(
        actual,
        vec![PIZZA_HUT, NUNA, ITALIANO, PIZZA_BAD, PIZZA_WHAT, DOMINOS]
    );
}

#[test]
fn test_network_favorites_distance_focused_ratings() {
    let world = world_with(set_up_ratings_focus_on_distance);
    let network = FriendNetwork::new(&world);

    let by_rating = ids(&network.favorites_by_rating(STUDENT).unwrap());
    assert!(!by_rating.contains(&ITALIANO), "only Splinter favorites Italiano");
    // Rat and Dominos tie at 3.0; Rat is nearer
    assert_eq!(
        by_rating,
        vec![NUNA, PIZZA_HUT, PIZZA_RAT, DOMINOS, PIZZA_BAD, PIZZA_WHAT]
    );

    let by_distance = ids(&network.favorites_by_distance(STUDENT).unwrap());
    assert_eq!(
        by_distance,
        vec![PIZZA_HUT, NUNA, PIZZA_RAT, PIZZA_BAD, PIZZA_WHAT, DOMINOS]
    );
}

#[test]
fn test_friend_grouped_favorites() {
    let world = world_with(set_up_ratings_focus_on_rating);
    let network = FriendNetwork::new(&world);

    assert_eq!(
        ids(&network.friend_favorites(STUDENT, RankMode::Rating).unwrap()),
        vec![ITALIANO, PIZZA_HUT, DOMINOS, PIZZA_BAD, PIZZA_WHAT, NUNA]
    );
    assert_eq!(
        ids(&network.friend_favorites(STUDENT, RankMode::Distance).unwrap()),
        vec![PIZZA_HUT, ITALIANO, DOMINOS, PIZZA_BAD, PIZZA_WHAT, NUNA]
    );
}

#[test]
fn test_friend_grouped_favorites_distance_focused_ratings() {
    let world = world_with(set_up_ratings_focus_on_distance);
    let network = FriendNetwork::new(&world);

    let by_rating = ids(&network.friend_favorites(STUDENT, RankMode::Rating).unwrap());
    assert!(!by_rating.contains(&ITALIANO));
    assert_eq!(
        by_rating,
        vec![NUNA, PIZZA_HUT, DOMINOS, PIZZA_RAT, PIZZA_BAD, PIZZA_WHAT]
    );
    assert_eq!(
        ids(&network.friend_favorites(STUDENT, RankMode::Distance).unwrap()),
        vec![PIZZA_HUT, NUNA, DOMINOS, PIZZA_RAT, PIZZA_BAD, PIZZA_WHAT]
    );
}

#[test]
fn test_repeated_queries_are_identical() {
    let world = world_with(set_up_ratings_focus_on_distance);
    let network = FriendNetwork::new(&world);

    let first = ids(&network.favorites_by_rating(STUDENT).unwrap());
    for _ in 0..5 {
        assert_eq!(ids(&network.favorites_by_rating(STUDENT).unwrap()), first);
    }
}

fn set_up_ratings_for_recommendation(world: &mut PizzaWorld) {
    rate_all(world, ITALIANO, &[(SHREDDER, 5)]);
    rate_all(world, PIZZA_HUT, &[(MICHELANGELO, 5)]);
    rate_all(world, DOMINOS, &[(LEONARDO, 5)]);
    rate_all(world, PIZZA_BAD, &[(FOREVER_ALONE, 5)]);
    rate_all(world, PIZZA_WHAT, &[(DONATELLO, 5)]);
    rate_all(world, NUNA, &[(KRANG, 5)]);
    rate_all(world, PIZZA_RAT, &[(SPLINTER, 5)]);

    // distance from the student in the comments
    favorite_all(world, LEONARDO, &[DOMINOS]); // 1
    favorite_all(world, MICHELANGELO, &[PIZZA_HUT]); // 1
    favorite_all(world, DONATELLO, &[PIZZA_WHAT]); // 1
    favorite_all(world, SPLINTER, &[PIZZA_RAT]); // 2
    favorite_all(world, SHREDDER, &[ITALIANO]); // 3
    favorite_all(world, KRANG, &[NUNA]); // 4
    favorite_all(world, FOREVER_ALONE, &[PIZZA_BAD]); // unreachable
}

#[test]
fn test_hop_distances_from_student() {
    let world = world_with(set_up_ratings_for_recommendation);
    let distances = hop_distances(&world, STUDENT).unwrap();

    assert_eq!(distances.distance(STUDENT), Some(0));
    assert_eq!(distances.distance(LEONARDO), Some(1));
    assert_eq!(distances.distance(RAFAEL), Some(1));
    assert_eq!(distances.distance(SPLINTER), Some(2));
    assert_eq!(distances.distance(SHREDDER), Some(3));
    assert_eq!(distances.distance(KRANG), Some(4));
    assert_eq!(distances.distance(FOREVER_ALONE), None);
}

#[test]
fn test_recommendation() {
    let world = world_with(set_up_ratings_for_recommendation);
    let network = FriendNetwork::new(&world);
    let recommended = |place, max_hops| network.is_recommended(STUDENT, place, max_hops).unwrap();

    // exact distance
    assert!(recommended(DOMINOS, 1));
    assert!(recommended(PIZZA_HUT, 1));
    assert!(recommended(PIZZA_WHAT, 1));
    assert!(recommended(PIZZA_RAT, 2));
    assert!(recommended(ITALIANO, 3));
    assert!(recommended(NUNA, 4));

    // larger bound
    assert!(recommended(PIZZA_HUT, UNBOUNDED));
    assert!(recommended(DOMINOS, 2));
    assert!(recommended(PIZZA_RAT, 3));
    assert!(recommended(ITALIANO, 4));
    assert!(recommended(NUNA, 5));

    // bound too small
    assert!(!recommended(PIZZA_WHAT, 0));
    assert!(!recommended(PIZZA_HUT, 0));
    assert!(!recommended(PIZZA_RAT, 1));
    assert!(!recommended(ITALIANO, 2));
    assert!(!recommended(NUNA, 3));

    // unreachable lover
    assert!(!recommended(PIZZA_BAD, 1));
    assert!(!recommended(PIZZA_BAD, UNBOUNDED));
}

#[test]
fn test_recommendation_is_monotonic_in_hops() {
    let world = world_with(set_up_ratings_for_recommendation);
    let network = FriendNetwork::new(&world);

    for place in world.places().map(|p| p.id()) {
        let mut seen_true = false;
        for max_hops in 0..8 {
            let now = network.is_recommended(STUDENT, place, max_hops).unwrap();
            assert!(!(seen_true && !now), "place {place} dropped out at {max_hops} hops");
            seen_true |= now;
        }
    }
}

#[test]
fn test_world_rendering() {
    let mut world = populate_world();
    set_up_connections(&mut world);

    let expected = "\
Registered pizza lovers: 1, 300, 12345, 23456, 45678, 56789, 67891, 78910, 89101.
Registered pizza places: 10, 20, 30, 40, 50, 60, 70.
Pizza lovers:
1 -> [12345, 23456, 45678, 56789].
300 -> [].
12345 -> [1, 23456, 45678, 56789, 67891].
23456 -> [1, 12345, 45678, 56789, 67891].
45678 -> [1, 12345, 23456, 56789, 67891].
56789 -> [1, 12345, 23456, 45678, 67891].
67891 -> [12345, 23456, 45678, 56789, 78910].
78910 -> [67891, 89101].
89101 -> [78910].
End pizza lovers.";
    assert_eq!(world.to_string(), expected);
}

#[test]
fn test_bundled_seed_file() {
    init_tracing();
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/turtles.seed");
    let world = PizzaWorld::load_from_file(&path).unwrap();
    assert_eq!(world.counts(), (9, 7, 16));

    let network = FriendNetwork::new(&world);
    assert_eq!(
        ids(&network.favorites_by_rating(STUDENT).unwrap()),
        vec![NUNA, ITALIANO, PIZZA_HUT, DOMINOS, PIZZA_BAD, PIZZA_WHAT]
    );
    assert!(network.is_recommended(STUDENT, NUNA, 1).unwrap());
    assert!(!network.is_recommended(STUDENT, PIZZA_RAT, 1).unwrap());
    assert!(network.is_recommended(STUDENT, PIZZA_RAT, 2).unwrap());
    assert!(!network.is_recommended(FOREVER_ALONE, NUNA, UNBOUNDED).unwrap());
}
