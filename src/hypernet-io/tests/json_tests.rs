//! File round trips through the hypergraph JSON format.

use common_config::IoConfig;
use common_error::HypernetError;
use hypernet_core::testing::{edgelist1, hypergraph_from};
use hypernet_core::{Hypergraph, Id, Value, attr_map};
use hypernet_io::{
    parse_edge_batch, parse_id, read_json, read_json_with, string_id, write_json,
};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_write_read_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("h.json");

    let mut h = hypergraph_from(edgelist1());
    h.set_attr("name", "test");
    h.set_node_attr(&1, "color", "red").unwrap();
    h.set_edge_attr(&0, "weight", 2.0).unwrap();
    h.add_node(42, attr_map([("lonely", true)])).unwrap();

    write_json(&h, &path, &IoConfig { pretty: true }).unwrap();
    let loaded: Hypergraph<u64> =
        read_json_with(&path, str::parse::<u64>, str::parse::<u64>).unwrap();

    assert_eq!(loaded.edge_dict(), h.edge_dict());
    assert_eq!(
        loaded.nodes().collect::<Vec<_>>(),
        h.nodes().collect::<Vec<_>>()
    );
    assert_eq!(loaded.attr("name").unwrap(), &Value::from("test"));
    assert_eq!(loaded.node_attr(&1, "color").unwrap(), &Value::from("red"));
    assert_eq!(loaded.edge_attr(&0, "weight").unwrap(), &Value::from(2.0));
    assert_eq!(loaded.node_attr(&42, "lonely").unwrap(), &Value::Bool(true));
    loaded.validate().unwrap();
}

#[test]
fn test_read_without_casts_gives_strings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("h.json");
    write_json(&hypergraph_from(edgelist1()), &path, &IoConfig::default()).unwrap();

    let loaded = read_json(&path).unwrap();
    assert_eq!(loaded.num_edges(), 4);
    assert!(loaded.contains(&"8".to_string()));
    assert_eq!(
        loaded.members(&"3".to_string()).unwrap(),
        &["6".to_string(), "7".to_string(), "8".to_string()]
    );
}

#[test]
fn test_mixed_ids_with_id_cast() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.json");

    let mut h: Hypergraph = Hypergraph::new();
    h.add_edge(
        [Id::from("apple"), Id::from(3)],
        Some(Id::from("fruits")),
        attr_map([("weight", 1)]),
    )
    .unwrap();
    write_json(&h, &path, &IoConfig::default()).unwrap();

    let loaded = read_json_with(&path, parse_id, parse_id).unwrap();
    assert_eq!(
        loaded.members(&Id::from("fruits")).unwrap(),
        &[Id::from("apple"), Id::from(3)]
    );

    let as_strings = read_json_with(&path, string_id, string_id).unwrap();
    assert!(as_strings.contains(&"3".to_string()));
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_json(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, HypernetError::IoError(_)));
}

#[test]
fn test_read_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = read_json(&path).unwrap_err();
    assert!(matches!(err, HypernetError::SerdeJsonError(_)));

    std::fs::write(&path, r#"{"node-data": {}, "edge-data": {}, "edge-dict": {}}"#).unwrap();
    let err = read_json(&path).unwrap_err();
    assert!(matches!(err, HypernetError::FormatError(_)));
}

#[test]
fn test_edge_dict_member_missing_from_node_data() {
    let text = json!({
        "hypergraph-data": {},
        "node-data": {"1": {}},
        "edge-data": {"0": {}},
        "edge-dict": {"0": ["1", "2"]}
    })
    .to_string();
    let h = hypernet_io::from_json(&text).unwrap();
    assert!(h.contains(&"2".to_string()));
    assert_eq!(h.num_nodes(), 2);
}

#[test]
fn test_parsed_batch_feeds_hypergraph() {
    let batch = parse_edge_batch(&json!([[["a", "b"], "e1", {"color": "blue"}], [["b"], "e2", {}]]))
        .unwrap();
    let h = Hypergraph::from_edges(batch).unwrap();

    assert_eq!(h.num_nodes(), 2);
    assert_eq!(
        h.edge_attr(&Id::from("e1"), "color").unwrap(),
        &Value::from("blue")
    );
    assert_eq!(
        h.memberships(&Id::from("b")).unwrap(),
        &[Id::from("e1"), Id::from("e2")]
    );
}
