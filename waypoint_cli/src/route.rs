use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;
use serde::Serialize;
use tracing::info;
use waypoint_core::{
    AStar, Dijkstra, Graph, Weight,
    edge_list::EdgeList,
    error::SearchError,
    routing::shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathOptions},
};

#[derive(Args)]
pub struct RouteArgs {
    /// Edge list JSON file
    #[arg(short, long, env = "WAYPOINT_GRAPH")]
    graph: PathBuf,

    #[arg(long)]
    from: String,

    #[arg(long)]
    to: String,

    /// Search with A* and a zero heuristic instead of Dijkstra
    #[arg(long)]
    astar_zero: bool,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug, PartialEq)]
struct Route {
    path: Vec<String>,
    cost: Weight,
    visited: usize,
}

impl Route {
    fn describe(&self) -> String {
        format!("{} (cost {})", self.path.join(" -> "), self.cost)
    }
}

fn find_route(
    graph: &Graph<String>,
    from: &str,
    to: &str,
    astar_zero: bool,
) -> Result<Route, anyhow::Error> {
    let (from, to) = (from.to_string(), to.to_string());

    if !graph.vertex_exists(&to) {
        return Err(anyhow!("Unknown vertex {}", to));
    }

    let goal_test = |vertex: &String| *vertex == to;
    let options = Some(ShortestPathOptions {
        include_debug_info: Some(true),
    });

    let result = if astar_zero {
        AStar::with_heuristic(|_: &String, _: &String| 0.0).calc_path(
            graph, &from, goal_test, options,
        )
    } else {
        Dijkstra::new().calc_path(graph, &from, goal_test, options)
    };

    match result {
        Ok(result) => Ok(Route {
            visited: result
                .debug
                .map(|debug| debug.visited_vertices.len())
                .unwrap_or_default(),
            path: result.path,
            cost: result.cost,
        }),
        Err(SearchError::InvalidStart) => Err(anyhow!("Unknown vertex {}", from)),
        Err(SearchError::NoPath) => Err(anyhow!("No path from {} to {}", from, to)),
    }
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let graph = EdgeList::<String>::from_path(&args.graph)?.into_graph()?;
    info!(
        vertices = graph.vertex_cardinality(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "Loaded {}",
        args.graph.display()
    );

    let route = find_route(&graph, &args.from, &args.to, args.astar_zero)?;
    info!("Expanded {} vertices", route.visited);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        println!("{}", route.describe());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn load_fixture() -> Graph<String> {
        let current_dir = env::current_dir().unwrap();
        let path = current_dir.join("tests/fixtures/cities.json");
        EdgeList::<String>::from_path(path)
            .unwrap()
            .into_graph()
            .unwrap()
    }

    #[test]
    fn test_find_route() {
        let graph = load_fixture();

        let route = find_route(&graph, "brussels", "liege", false).unwrap();

        assert_eq!(route.path, vec!["brussels", "leuven", "liege"]);
        assert_eq!(route.cost, 95.0);
        assert_eq!(route.describe(), "brussels -> leuven -> liege (cost 95)");
    }

    #[test]
    fn test_find_route_unknown_vertices() {
        let graph = load_fixture();

        let error = find_route(&graph, "paris", "liege", false).unwrap_err();
        assert_eq!(error.to_string(), "Unknown vertex paris");

        let error = find_route(&graph, "liege", "paris", true).unwrap_err();
        assert_eq!(error.to_string(), "Unknown vertex paris");
    }

    #[test]
    fn test_find_route_astar_zero_matches_dijkstra() {
        let graph = load_fixture();

        for (from, to) in [("brussels", "liege"), ("liege", "namur"), ("namur", "leuven")] {
            let dijkstra = find_route(&graph, from, to, false).unwrap();
            let astar = find_route(&graph, from, to, true).unwrap();

            assert_eq!(astar.path, dijkstra.path, "{from} -> {to}");
            assert_eq!(astar.cost, dijkstra.cost, "{from} -> {to}");
        }

        let error = find_route(&graph, "brussels", "ostend", true).unwrap_err();
        assert_eq!(error.to_string(), "No path from brussels to ostend");
    }

    #[test]
    fn test_find_route_no_path() {
        let graph = load_fixture();

        let error = find_route(&graph, "brussels", "ostend", false).unwrap_err();
        assert_eq!(error.to_string(), "No path from brussels to ostend");
    }

    #[test]
    fn test_route_json() {
        let route = Route {
            path: vec!["a".to_string(), "b".to_string()],
            cost: 1.5,
            visited: 2,
        };

        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            serde_json::json!({ "path": ["a", "b"], "cost": 1.5, "visited": 2 })
        );
    }
}
