//! Unit tests for the depth-first route search.

use super::*;
use crate::domain::TimeOfDay;
use crate::planner::RouteGroups;
use crate::timetable::Timetable;

fn station(s: &str) -> StationId {
    StationId::parse(s).unwrap()
}

fn leg(id: &str, from: &str, to: &str, dep: &str, arr: &str) -> Arc<Leg> {
    Arc::new(
        Leg::new(
            id,
            station(from),
            station(to),
            TimeOfDay::parse_hhmm(dep).unwrap(),
            TimeOfDay::parse_hhmm(arr).unwrap(),
        )
        .unwrap(),
    )
}

fn request(from: &str, to: &str, max_transfers: usize) -> SearchRequest {
    SearchRequest::new(station(from), station(to), max_transfers)
}

fn search(legs: &[Arc<Leg>], from: &str, to: &str, max_transfers: usize) -> SearchResult {
    let config = SearchConfig::default();
    Planner::new(legs, &config)
        .search(&request(from, to, max_transfers))
        .unwrap()
}

/// Leg ids of each itinerary, for comparing whole results.
fn route_ids(itineraries: &[Itinerary]) -> Vec<Vec<String>> {
    itineraries
        .iter()
        .map(|i| i.legs().iter().map(|l| l.id.clone()).collect())
        .collect()
}

fn delhi_mumbai_bangalore() -> Vec<Arc<Leg>> {
    vec![
        leg("DEL-MUM-01", "Delhi", "Mumbai", "08:00", "20:00"),
        leg("MUM-BLR-01", "Mumbai", "Bangalore", "14:30", "06:30"),
    ]
}

#[test]
fn overnight_connection_found() {
    let legs = delhi_mumbai_bangalore();
    let result = search(&legs, "Delhi", "Bangalore", 1);

    assert_eq!(result.itineraries.len(), 1);
    let itinerary = &result.itineraries[0];
    assert_eq!(itinerary.legs().len(), 2);
    assert_eq!(itinerary.transfer_count(), 1);
    assert_eq!(itinerary.total_wait_mins(), 1110);
    assert_eq!(itinerary.total_duration_mins(), 720 + 1110 + 960);
    assert_eq!(itinerary.origin(), &station("Delhi"));
    assert_eq!(itinerary.destination(), &station("Bangalore"));
}

#[test]
fn no_path_gives_empty_result() {
    let legs = delhi_mumbai_bangalore();
    let result = search(&legs, "Delhi", "Chennai", 2);

    assert!(result.is_empty());
}

#[test]
fn direct_and_alternative_both_returned() {
    let legs = vec![
        leg("DEL-MUM-01", "Delhi", "Mumbai", "08:00", "20:00"),
        leg("DEL-X-01", "Delhi", "X", "06:00", "09:00"),
        leg("X-MUM-01", "X", "Mumbai", "10:00", "13:00"),
    ];
    let result = search(&legs, "Delhi", "Mumbai", 1);

    // Via X: 180 + 60 wait + 180 = 420, direct: 720
    assert_eq!(
        route_ids(&result.itineraries),
        vec![
            vec!["DEL-X-01".to_string(), "X-MUM-01".to_string()],
            vec!["DEL-MUM-01".to_string()],
        ]
    );
    assert_eq!(result.itineraries[0].total_duration_mins(), 420);
    assert_eq!(result.itineraries[1].total_duration_mins(), 720);

    let groups = RouteGroups::partition(result.itineraries);
    assert_eq!(groups.direct.len(), 1);
    assert_eq!(groups.alternative.len(), 1);
}

#[test]
fn direct_legs_not_duplicated() {
    let legs = vec![
        leg("A-B-1", "A", "B", "08:00", "09:00"),
        leg("A-B-2", "A", "B", "10:00", "11:00"),
    ];
    let result = search(&legs, "A", "B", 3);

    assert_eq!(result.itineraries.len(), 2);
    assert!(result.itineraries.iter().all(Itinerary::is_direct));
}

#[test]
fn zero_transfers_skips_connecting_search() {
    let legs = vec![
        leg("A-B", "A", "B", "08:00", "09:00"),
        leg("A-C", "A", "C", "08:00", "08:30"),
        leg("C-B", "C", "B", "08:40", "08:50"),
    ];
    let result = search(&legs, "A", "B", 0);

    assert_eq!(route_ids(&result.itineraries), vec![vec!["A-B".to_string()]]);
    assert_eq!(result.expansions, 0);
}

#[test]
fn zero_transfers_without_direct_finds_nothing() {
    let legs = vec![
        leg("A-C", "A", "C", "08:00", "08:30"),
        leg("C-B", "C", "B", "08:40", "08:50"),
    ];
    let result = search(&legs, "A", "B", 0);

    assert!(result.is_empty());
    // The connecting search still looked at A's departures
    assert_eq!(result.expansions, 1);
}

#[test]
fn transfer_limit_bounds_depth() {
    let legs = vec![
        leg("A-B", "A", "B", "08:00", "09:00"),
        leg("B-C", "B", "C", "10:00", "11:00"),
        leg("C-D", "C", "D", "12:00", "13:00"),
    ];

    assert!(search(&legs, "A", "D", 1).is_empty());

    let result = search(&legs, "A", "D", 2);
    assert_eq!(result.itineraries.len(), 1);
    assert_eq!(result.itineraries[0].transfer_count(), 2);
    assert_eq!(result.itineraries[0].total_duration_mins(), 300);
}

#[test]
fn cycles_terminate() {
    let legs = vec![
        leg("A-B", "A", "B", "08:00", "09:00"),
        leg("B-A", "B", "A", "10:00", "11:00"),
        leg("B-C", "B", "C", "10:00", "11:00"),
        leg("C-B", "C", "B", "12:00", "13:00"),
        leg("C-A", "C", "A", "12:00", "13:00"),
        leg("C-D", "C", "D", "14:00", "15:00"),
    ];
    let result = search(&legs, "A", "D", 10);

    assert_eq!(
        route_ids(&result.itineraries),
        vec![vec!["A-B".to_string(), "B-C".to_string(), "C-D".to_string()]]
    );
}

#[test]
fn origin_is_never_departed_twice() {
    // B -> A -> B -> C would depart B twice
    let legs = vec![
        leg("A-B", "A", "B", "08:00", "09:00"),
        leg("B-A", "B", "A", "09:30", "10:00"),
        leg("A-C", "A", "C", "11:00", "12:00"),
        leg("B-C", "B", "C", "09:30", "11:00"),
    ];
    let result = search(&legs, "B", "C", 3);

    // Direct B-C, then B -> A -> C
    assert_eq!(
        route_ids(&result.itineraries),
        vec![
            vec!["B-C".to_string()],
            vec!["B-A".to_string(), "A-C".to_string()],
        ]
    );
}

#[test]
fn same_source_and_destination_is_empty() {
    let legs = vec![
        leg("LOOP", "Delhi", "Delhi", "08:00", "09:00"),
        leg("DEL-MUM", "Delhi", "Mumbai", "08:00", "20:00"),
        leg("MUM-DEL", "Mumbai", "Delhi", "21:30", "09:30"),
    ];
    let result = search(&legs, "Delhi", "Delhi", 2);

    assert!(result.is_empty());
    assert_eq!(result.expansions, 0);
}

#[test]
fn unknown_stations_are_empty() {
    let legs = delhi_mumbai_bangalore();

    assert!(search(&legs, "Atlantis", "Bangalore", 2).is_empty());
    assert!(search(&legs, "Delhi", "Atlantis", 2).is_empty());
    assert!(search(&[], "Delhi", "Mumbai", 2).is_empty());
}

#[test]
fn equal_durations_keep_discovery_order() {
    let legs = vec![
        leg("A-X", "A", "X", "08:00", "09:00"),
        leg("A-Y", "A", "Y", "08:00", "09:00"),
        leg("X-B", "X", "B", "09:00", "10:00"),
        leg("Y-B", "Y", "B", "09:00", "10:00"),
    ];
    let result = search(&legs, "A", "B", 1);

    assert_eq!(
        route_ids(&result.itineraries),
        vec![
            vec!["A-X".to_string(), "X-B".to_string()],
            vec!["A-Y".to_string(), "Y-B".to_string()],
        ]
    );
}

#[test]
fn deeper_routes_found_before_later_departures() {
    // X-Y is listed before X-B, so A-X-Y-B is finished before A-X-B
    let legs = vec![
        leg("A-X", "A", "X", "08:00", "09:00"),
        leg("X-Y", "X", "Y", "09:00", "10:00"),
        leg("X-B", "X", "B", "10:00", "12:00"),
        leg("Y-B", "Y", "B", "11:00", "12:00"),
    ];
    let result = search(&legs, "A", "B", 2);

    assert_eq!(result.itineraries[0].total_duration_mins(), 240);
    assert_eq!(result.itineraries[1].total_duration_mins(), 240);
    assert_eq!(
        route_ids(&result.itineraries),
        vec![
            vec!["A-X".to_string(), "X-Y".to_string(), "Y-B".to_string()],
            vec!["A-X".to_string(), "X-B".to_string()],
        ]
    );
}

#[test]
fn budget_exhaustion_fails_fast() {
    let legs = vec![
        leg("A-B", "A", "B", "08:00", "09:00"),
        leg("B-C", "B", "C", "10:00", "11:00"),
        leg("C-D", "C", "D", "12:00", "13:00"),
    ];
    let config = SearchConfig::new(2, 2);
    let err = Planner::new(&legs, &config)
        .search(&request("A", "D", 5))
        .unwrap_err();

    assert_eq!(err, SearchError::BudgetExhausted { limit: 2 });
    assert_eq!(err.to_string(), "search abandoned after examining 2 legs");
}

#[test]
fn budget_large_enough_succeeds() {
    let legs = vec![
        leg("A-B", "A", "B", "08:00", "09:00"),
        leg("B-C", "B", "C", "10:00", "11:00"),
        leg("C-D", "C", "D", "12:00", "13:00"),
    ];
    let config = SearchConfig::new(2, 3);
    let result = Planner::new(&legs, &config)
        .search(&request("A", "D", 5))
        .unwrap();

    assert_eq!(result.itineraries.len(), 1);
    assert_eq!(result.expansions, 3);
}

#[test]
fn repeated_searches_are_identical() {
    let timetable = Timetable::sample().unwrap();
    let config = SearchConfig::default();
    let planner = Planner::new(timetable.legs(), &config);

    let first = planner.search(&request("Delhi", "Chennai", 3)).unwrap();
    let second = planner.search(&request("Delhi", "Chennai", 3)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sample_network_two_changes() {
    let timetable = Timetable::sample().unwrap();

    assert!(
        find_routes(timetable.legs(), &station("Delhi"), &station("Chennai"), 1)
            .unwrap()
            .is_empty()
    );

    let routes =
        find_routes(timetable.legs(), &station("Delhi"), &station("Chennai"), 2).unwrap();
    assert_eq!(
        route_ids(&routes),
        vec![vec![
            "DEL-MUM-01".to_string(),
            "MUM-BLR-01".to_string(),
            "BLR-CHE-01".to_string(),
        ]]
    );
    // 720 + 1110 wait + 960 + 1410 wait + 300
    assert_eq!(routes[0].total_wait_mins(), 2520);
    assert_eq!(routes[0].total_duration_mins(), 4500);
}

#[test]
fn sample_network_direct_and_alternatives() {
    let timetable = Timetable::sample().unwrap();
    let routes =
        find_routes(timetable.legs(), &station("Bangalore"), &station("Hyderabad"), 2).unwrap();

    // Direct overnight train, plus via Chennai
    assert_eq!(
        route_ids(&routes),
        vec![
            vec!["BLR-HYD-01".to_string()],
            vec!["BLR-CHE-01".to_string(), "CHE-HYD-01".to_string()],
        ]
    );
    assert_eq!(routes[0].total_duration_mins(), 600);
    // 300 + 300 wait + 720
    assert_eq!(routes[1].total_duration_mins(), 1320);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const STATIONS: [&str; 5] = ["A", "B", "C", "D", "E"];

    prop_compose! {
        fn arb_leg()(
            from in 0usize..5,
            to in 0usize..5,
            dep in 0u32..1440,
            arr in 0u32..1440,
        ) -> (usize, usize, u32, u32) {
            (from, to, dep, arr)
        }
    }

    fn build(specs: &[(usize, usize, u32, u32)]) -> Vec<Arc<Leg>> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(from, to, dep, arr))| {
                Arc::new(
                    Leg::new(
                        format!("L{i}"),
                        station(STATIONS[from]),
                        station(STATIONS[to]),
                        TimeOfDay::from_hm(dep / 60, dep % 60).unwrap(),
                        TimeOfDay::from_hm(arr / 60, arr % 60).unwrap(),
                    )
                    .unwrap(),
                )
            })
            .collect()
    }

    proptest! {
        /// Every itinerary is a continuous, simple path within the change limit
        #[test]
        fn itineraries_respect_invariants(
            specs in proptest::collection::vec(arb_leg(), 0..14),
            from in 0usize..5,
            to in 0usize..5,
            max_transfers in 0usize..4,
        ) {
            let legs = build(&specs);
            let result = search(&legs, STATIONS[from], STATIONS[to], max_transfers);

            for itinerary in &result.itineraries {
                prop_assert!(itinerary.transfer_count() <= max_transfers);
                prop_assert_eq!(itinerary.origin().as_str(), STATIONS[from]);
                prop_assert_eq!(itinerary.destination().as_str(), STATIONS[to]);

                for pair in itinerary.legs().windows(2) {
                    prop_assert_eq!(&pair[0].destination, &pair[1].source);
                }

                let mut sources: Vec<&StationId> =
                    itinerary.legs().iter().map(|l| &l.source).collect();
                let before = sources.len();
                sources.sort();
                sources.dedup();
                prop_assert_eq!(sources.len(), before);
            }

            let durations: Vec<u32> = result
                .itineraries
                .iter()
                .map(Itinerary::total_duration_mins)
                .collect();
            prop_assert!(durations.windows(2).all(|w| w[0] <= w[1]));
        }

        /// Allowing more changes never loses a route
        #[test]
        fn more_transfers_is_superset(
            specs in proptest::collection::vec(arb_leg(), 0..14),
            from in 0usize..5,
            to in 0usize..5,
            max_transfers in 0usize..3,
        ) {
            let legs = build(&specs);
            let fewer = route_ids(&search(&legs, STATIONS[from], STATIONS[to], max_transfers).itineraries);
            let more = route_ids(&search(&legs, STATIONS[from], STATIONS[to], max_transfers + 1).itineraries);

            for route in &fewer {
                prop_assert!(more.contains(route), "lost route {:?}", route);
            }
        }

        /// Same inputs, same outputs in the same order
        #[test]
        fn search_is_deterministic(
            specs in proptest::collection::vec(arb_leg(), 0..14),
            from in 0usize..5,
            to in 0usize..5,
            max_transfers in 0usize..4,
        ) {
            let legs = build(&specs);
            let first = search(&legs, STATIONS[from], STATIONS[to], max_transfers);
            let second = search(&legs, STATIONS[from], STATIONS[to], max_transfers);
            prop_assert_eq!(first, second);
        }

        /// Total duration is the sum of leg times and waits
        #[test]
        fn duration_decomposes(
            specs in proptest::collection::vec(arb_leg(), 0..14),
            from in 0usize..5,
            to in 0usize..5,
        ) {
            let legs = build(&specs);
            let result = search(&legs, STATIONS[from], STATIONS[to], 3);

            for itinerary in &result.itineraries {
                let travel: u32 = itinerary.legs().iter().map(|l| l.duration_mins()).sum();
                let waits: u32 = itinerary.legs_with_waits().filter_map(|(_, w)| w).sum();
                prop_assert_eq!(waits, itinerary.total_wait_mins());
                prop_assert_eq!(travel + waits, itinerary.total_duration_mins());
            }
        }
    }
}
