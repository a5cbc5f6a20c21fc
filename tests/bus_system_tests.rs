use ordered_float::OrderedFloat;
use transit_router::transit::{
    BusSystem, DsvReader, DsvReaderBuilder, NetworkOptions, RowIssue, RowOrigin, RowSource, Stop,
    TransitNetwork, VecRowSource,
};
use transit_router::Error;

fn load(stops: Vec<Vec<&str>>, routes: Vec<Vec<&str>>) -> transit_router::transit::LoadReport {
    let mut stops = VecRowSource::new(stops);
    let mut routes = VecRowSource::new(routes);
    BusSystem::load(
        Some(&mut stops as &mut dyn RowSource),
        Some(&mut routes as &mut dyn RowSource),
    )
    .unwrap()
}

#[test]
fn test_malformed_stop_row_is_skipped() {
    let report = load(vec![vec!["1", "100"], vec!["bad", "200"], vec!["2", "300"]], vec![]);
    let system = &report.system;

    assert_eq!(system.stop_count(), 2);
    assert_eq!(system.stop_by_id(1), Some(&Stop { id: 1, node_id: 100 }));
    assert_eq!(system.stop_by_id(2), Some(&Stop { id: 2, node_id: 300 }));
    assert_eq!(system.stop_by_index(1).map(|stop| stop.id), Some(2));
    assert_eq!(system.stop_by_index(2), None);
    assert_eq!(system.stop_by_id(3), None);

    assert_eq!(report.warnings.len(), 1);
    let warning = &report.warnings[0];
    assert_eq!(warning.origin, RowOrigin::Stops);
    assert_eq!(warning.row, 2);
    assert_eq!(warning.issue, RowIssue::InvalidStopId { value: "bad".to_string() });
}

#[test]
fn test_short_rows_and_bad_node_ids_are_reported() {
    let report = load(vec![vec!["7"], vec!["8", "x9"], vec![" 9 ", " 900 ", "extra"]], vec![]);

    assert_eq!(report.system.stop_count(), 1);
    assert_eq!(report.system.stop_by_id(9).map(|stop| stop.node_id), Some(900));
    assert_eq!(
        report.warnings.iter().map(|w| w.issue.clone()).collect::<Vec<_>>(),
        vec![
            RowIssue::TooFewFields { found: 1 },
            RowIssue::InvalidNodeId { value: "x9".to_string() },
        ]
    );
}

#[test]
fn test_routes_group_stops_by_name_in_row_order() {
    let report = load(
        vec![],
        vec![
            vec!["A", "1"],
            vec!["B", "2"],
            vec!["A", "2"],
            vec!["A", "x"],
            vec!["C"],
            vec!["A", "3"],
        ],
    );
    let system = &report.system;

    assert_eq!(system.route_count(), 2);
    let a = system.route_by_name("A").unwrap();
    assert_eq!(a.name(), "A");
    assert_eq!(a.stops(), &[1, 2, 3]);
    assert_eq!(a.stop_count(), 3);
    assert_eq!(a.stop_id(0), Some(1));
    assert_eq!(a.stop_id(3), None);

    assert_eq!(system.route_by_index(0).map(|r| r.name()), Some("A"));
    assert_eq!(system.route_by_index(1).map(|r| r.name()), Some("B"));
    assert!(system.route_by_index(2).is_none());
    assert!(system.route_by_name("C").is_none());

    let rows: Vec<(RowOrigin, usize)> = report.warnings.iter().map(|w| (w.origin, w.row)).collect();
    assert_eq!(rows, vec![(RowOrigin::Routes, 4), (RowOrigin::Routes, 5)]);
}

#[test]
fn test_missing_sources_load_empty_system() {
    let report = BusSystem::load(None, None).unwrap();

    assert_eq!(report.system.stop_count(), 0);
    assert_eq!(report.system.route_count(), 0);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_repeated_stop_id_uses_latest_row_for_lookup() {
    let report = load(vec![vec!["1", "100"], vec!["1", "101"]], vec![]);

    assert_eq!(report.system.stop_count(), 2);
    assert_eq!(report.system.stop_by_id(1).map(|stop| stop.node_id), Some(101));
}

#[test]
fn test_dsv_reader_parses_delimited_text() {
    let data = "stop_id,node_id\n1,100\n2,300\n3\n";
    let mut stops = DsvReader::new(data.as_bytes(), b',');

    let report = BusSystem::load(Some(&mut stops as &mut dyn RowSource), None).unwrap();

    // The header row is not numeric and falls out as a warning
    assert_eq!(report.system.stop_count(), 2);
    assert_eq!(report.warnings.len(), 2);
    assert_eq!(report.warnings[0].row, 1);
    assert_eq!(report.warnings[1].issue, RowIssue::TooFewFields { found: 1 });
}

#[test]
fn test_dsv_reader_honours_delimiter_and_headers() {
    let data = "route|stop\nR1|10\nR1|11\nR2|10\n";
    let mut routes = DsvReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(true)
        .from_reader(data.as_bytes());

    assert_eq!(routes.read_row().unwrap(), Some(vec!["R1".to_string(), "10".to_string()]));

    let report = BusSystem::load(None, Some(&mut routes as &mut dyn RowSource)).unwrap();
    assert!(report.warnings.is_empty());
    assert_eq!(report.system.route_by_name("R1").unwrap().stops(), &[11]);
    assert_eq!(report.system.route_by_name("R2").unwrap().stops(), &[10]);
}

#[test]
fn test_display_summarises_system() {
    let report = load(vec![vec!["1", "100"], vec!["2", "300"]], vec![vec!["A", "1"], vec!["A", "2"]]);

    let text = report.system.to_string();

    assert_eq!(
        text,
        "StopCount: 2\nRouteCount: 1\nIndex 0 ID: 1 NodeID: 100\nIndex 1 ID: 2 NodeID: 300\nRoute Index 0 Name: A StopCount: 2\n"
    );
}

fn sample_network(options: NetworkOptions) -> TransitNetwork {
    let report = load(
        vec![vec!["1", "100"], vec!["2", "200"], vec!["3", "300"], vec!["4", "400"]],
        vec![
            vec!["A", "1"],
            vec!["A", "2"],
            vec!["A", "3"],
            vec!["B", "3"],
            vec!["B", "4"],
            vec!["C", "4"],
            vec!["C", "9"],
        ],
    );
    TransitNetwork::build(&report.system, options).unwrap()
}

#[test]
fn test_network_links_consecutive_route_stops() {
    let network = sample_network(NetworkOptions::default());

    assert_eq!(network.router().vertex_count(), 4);
    assert_eq!(network.unknown_stops(), &[9]);

    let path = network.shortest_trip(1, 4).unwrap();
    assert_eq!(path.cost, OrderedFloat(3.0));
    let stops = network.stops_on(&path).unwrap();
    assert_eq!(stops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(stops.iter().map(|s| s.node_id).collect::<Vec<_>>(), vec![100, 200, 300, 400]);

    let back = network.shortest_trip(4, 1).unwrap();
    assert_eq!(back.cost, OrderedFloat(3.0));
}

#[test]
fn test_one_way_network_follows_route_direction() {
    let network = sample_network(NetworkOptions::default().with_bidirectional(false).with_hop_weight(2.0));

    assert_eq!(network.shortest_trip(1, 4).unwrap().cost, OrderedFloat(6.0));
    assert!(!network.shortest_trip(4, 1).unwrap().is_found());
}

#[test]
fn test_network_rejects_unknown_stops_in_queries() {
    let network = sample_network(NetworkOptions::default());

    assert!(matches!(network.shortest_trip(1, 9), Err(Error::UnknownStop(9))));
    assert_eq!(network.vertex_for_stop(9), None);
}

#[test]
fn test_invalid_utf8_row_is_skipped_not_fatal() {
    let data: &[u8] = b"1,100\n\xff\xfe,200\n2,300\n";
    let mut stops = DsvReader::new(data, b',');

    let report = BusSystem::load(Some(&mut stops as &mut dyn RowSource), None).unwrap();

    assert_eq!(report.system.stop_count(), 2);
    assert_eq!(report.system.stop_by_id(2).map(|stop| stop.node_id), Some(300));
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].row, 2);
    assert!(matches!(report.warnings[0].issue, RowIssue::InvalidStopId { .. }));
}
