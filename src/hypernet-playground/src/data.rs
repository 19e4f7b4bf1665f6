//! Sample data for playground examples.

use common_error::HypernetResult;
use hypernet_core::{EdgeBatch, Hypergraph, Id, attr_map};

/// Create a small co-authorship hypergraph.
///
/// Nodes are researchers with a `field` attribute; each edge is a paper
/// whose members are its authors, with `year` and `citations` attributes.
/// One researcher has no papers, and one paper has a single author.
///
/// # Example
///
/// ```rust
/// let h = hypernet_playground::create_collaboration_network().unwrap();
/// assert_eq!(h.num_nodes(), 7);
/// assert_eq!(h.num_edges(), 5);
/// ```
pub fn create_collaboration_network() -> HypernetResult<Hypergraph> {
    let mut h = Hypergraph::new();
    h.set_attr("name", "collaborations");

    let researchers = [
        ("alice", "graphs"),
        ("bob", "graphs"),
        ("carol", "databases"),
        ("dave", "databases"),
        ("erin", "systems"),
        ("frank", "systems"),
        ("grace", "theory"),
    ];
    h.add_nodes_with_attrs_from(
        researchers
            .into_iter()
            .map(|(name, field)| (Id::from(name), attr_map([("field", field)]))),
        Default::default(),
    )?;

    let papers = [
        ("p1", vec!["alice", "bob", "carol"], 2019, 42),
        ("p2", vec!["carol", "dave"], 2020, 7),
        ("p3", vec!["alice", "bob", "dave", "erin"], 2021, 15),
        ("p4", vec!["frank"], 2021, 0),
        ("p5", vec!["erin", "frank", "bob"], 2022, 3),
    ];
    let batch = EdgeBatch::Full(
        papers
            .into_iter()
            .map(|(id, authors, year, citations)| {
                (
                    authors.into_iter().map(Id::from).collect(),
                    Id::from(id),
                    attr_map([("year", year), ("citations", citations)]),
                )
            })
            .collect(),
    );
    h.add_edges_from(batch, Default::default())?;

    Ok(h)
}

/// Create an integer-keyed hypergraph with edges of every order up to 3.
pub fn create_sample_hypergraph() -> HypernetResult<Hypergraph<u64>> {
    Hypergraph::from_edge_list([
        vec![0, 1, 2, 3],
        vec![4],
        vec![5, 6],
        vec![6, 7, 8],
        vec![0, 4, 8],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaboration_network() {
        let h = create_collaboration_network().unwrap();
        assert_eq!(h.isolates(false).len(), 1);
        assert_eq!(h.singleton_edges(), vec![Id::from("p4")]);
        assert_eq!(h.max_edge_order(), Some(3));
        h.validate().unwrap();
    }

    #[test]
    fn test_sample_hypergraph() {
        let h = create_sample_hypergraph().unwrap();
        assert_eq!(h.num_nodes(), 9);
        assert_eq!(h.edges_of_order(2), vec![3, 4]);
    }
}
