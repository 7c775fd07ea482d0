//! Query-level behaviour of the divide-and-conquer prober.

mod common;

use std::collections::BTreeMap;

use census_core::{PERIODIC_TABLE, PresenceTable};
use census_probe::Prober;
use common::{FakeOptimade, TINY_TABLE, symbols};
use pretty_assertions::assert_eq;
use rstest::rstest;

const URL: &str = "https://optimade.example.org/main";

fn expected(table: &[census_core::Element], held: &[&str]) -> BTreeMap<String, bool> {
    table
        .iter()
        .map(|e| (e.sym.to_string(), held.contains(&e.sym)))
        .collect()
}

#[tokio::test]
async fn single_present_element_among_three() {
    let fake = FakeOptimade::new().holds(URL, &["He"]);
    let outcome = Prober::new(&fake, &TINY_TABLE, 3).probe(URL, None).await;

    assert_eq!(outcome.presence, expected(&TINY_TABLE, &["He"]));
    assert_eq!(
        fake.queries_for(URL),
        symbols(&[&["H", "He", "Li"], &["H"], &["He", "Li"], &["He"], &["Li"]])
    );
    assert_eq!(outcome.stats.requests, 5);
    assert_eq!(outcome.stats.element_slots, 8);
}

#[tokio::test]
async fn seeded_present_elements_are_not_requeried() {
    let fake = FakeOptimade::new().holds(URL, &["H", "Li"]);
    let seed = PresenceTable::Elements(BTreeMap::from([
        ("H".to_string(), true),
        ("He".to_string(), false),
        ("Li".to_string(), false),
    ]));

    let outcome = Prober::new(&fake, &TINY_TABLE, 3)
        .probe(URL, Some(&seed))
        .await;

    assert_eq!(outcome.presence, expected(&TINY_TABLE, &["H", "Li"]));
    let queries = fake.queries_for(URL);
    assert_eq!(queries, symbols(&[&["He", "Li"], &["He"], &["Li"]]));
    assert!(queries.iter().flatten().all(|sym| sym != "H"));
}

#[tokio::test]
async fn sentinel_seed_reprobes_everything() {
    let fake = FakeOptimade::new().holds(URL, &["Li"]);
    let outcome = Prober::new(&fake, &TINY_TABLE, 3)
        .probe(URL, Some(&PresenceTable::AllAbsent))
        .await;

    assert_eq!(outcome.presence, expected(&TINY_TABLE, &["Li"]));
    assert_eq!(fake.queries_for(URL)[0], symbols(&[&["H", "He", "Li"]])[0]);
}

#[rstest]
#[case(1, 118)]
#[case(32, 4)]
#[case(118, 1)]
#[case(500, 1)]
#[tokio::test]
async fn negative_batches_cost_one_query_each(#[case] batch_size: usize, #[case] queries: usize) {
    let fake = FakeOptimade::new().holds(URL, &[]);
    let outcome = Prober::new(&fake, &PERIODIC_TABLE, batch_size)
        .probe(URL, None)
        .await;

    assert_eq!(outcome.stats.requests, queries);
    assert_eq!(outcome.stats.element_slots, 118);
    assert_eq!(outcome.present_count(), 0);
    assert_eq!(outcome.presence.len(), 118);
}

#[rstest]
#[case("H")]
#[case("O")]
#[case("S")]
#[tokio::test]
async fn one_present_in_sixteen_takes_fewer_than_sixteen_queries(#[case] held: &str) {
    let table = &PERIODIC_TABLE[..16];
    let fake = FakeOptimade::new().holds(URL, &[held]);
    let outcome = Prober::new(&fake, table, 16).probe(URL, None).await;

    assert_eq!(outcome.presence, expected(table, &[held]));
    assert!(
        outcome.stats.requests < 16,
        "{} queries for one present element",
        outcome.stats.requests
    );
}

#[rstest]
#[case(&["H"], 1)]
#[case(&["Fe", "O"], 8)]
#[case(&["Fe", "O", "Si", "Al", "Mg", "Ca", "Og"], 32)]
#[case(&["U", "Pu", "Li", "Na", "K", "Cl"], 5)]
#[tokio::test]
async fn every_element_gets_an_exact_decision(#[case] held: &[&str], #[case] batch_size: usize) {
    let fake = FakeOptimade::new().holds(URL, held);
    let outcome = Prober::new(&fake, &PERIODIC_TABLE, batch_size)
        .probe(URL, None)
        .await;

    assert_eq!(outcome.presence, expected(&PERIODIC_TABLE, held));
}

#[tokio::test]
async fn every_element_present_resolves_to_all_true() {
    let all: Vec<&str> = TINY_TABLE.iter().map(|e| e.sym).collect();
    let fake = FakeOptimade::new().holds(URL, &all);
    let outcome = Prober::new(&fake, &TINY_TABLE, 3).probe(URL, None).await;

    assert_eq!(outcome.present_count(), 3);
    // [H,He,Li] -> [H] -> [He,Li] -> [He] -> [Li]
    assert_eq!(outcome.stats.requests, 5);
}

#[tokio::test]
async fn failing_provider_reports_nothing_present() {
    let fake = FakeOptimade::new().holds(URL, &["Fe"]).failing(URL);
    let outcome = Prober::new(&fake, &PERIODIC_TABLE, 32).probe(URL, None).await;

    assert_eq!(outcome.present_count(), 0);
    assert_eq!(outcome.stats.requests, 4);
    assert_eq!(
        PresenceTable::fold(outcome.presence),
        PresenceTable::AllAbsent
    );
}

#[tokio::test]
async fn fully_known_seed_issues_no_queries() {
    let seed = PresenceTable::Elements(
        TINY_TABLE
            .iter()
            .map(|e| (e.sym.to_string(), true))
            .collect(),
    );
    let fake = FakeOptimade::new();
    let outcome = Prober::new(&fake, &TINY_TABLE, 3)
        .probe(URL, Some(&seed))
        .await;

    assert!(fake.queries().is_empty());
    assert_eq!(outcome.present_count(), 3);
    assert!(outcome.stats.avg_time_per_request_ms().abs() < f64::EPSILON);
}

#[tokio::test]
async fn zero_batch_size_behaves_like_one() {
    let fake = FakeOptimade::new().holds(URL, &["He"]);
    let outcome = Prober::new(&fake, &TINY_TABLE, 0).probe(URL, None).await;

    assert_eq!(outcome.stats.requests, 3);
    assert_eq!(outcome.presence, expected(&TINY_TABLE, &["He"]));
}

#[tokio::test]
async fn right_half_is_queried_after_negative_left_half() {
    let fake = FakeOptimade::new().holds(URL, &["Li"]);
    let outcome = Prober::new(&fake, &TINY_TABLE, 3).probe(URL, None).await;

    assert_eq!(outcome.presence, expected(&TINY_TABLE, &["Li"]));
    assert_eq!(
        fake.queries_for(URL),
        symbols(&[&["H", "He", "Li"], &["H"], &["He", "Li"], &["He"], &["Li"]])
    );
}
