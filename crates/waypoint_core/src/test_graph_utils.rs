#[cfg(test)]
pub mod test_graph {
    use crate::{graph::Graph, weight::Weight};

    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub enum RomaniaGraphCity {
        Arad,
        Bucharest,
        Craiova,
        Dobreta,
        Eforie,
        Fagaras,
        Giurgiu,
        Hirsova,
        Iasi,
        Lugoj,
        Mehadia,
        Neamt,
        Oradea,
        Pitesti,
        RimnicuVilcea,
        Sibiu,
        Timisoara,
        Urziceni,
        Vaslui,
        Zerind,
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn get_romania_graph_edges() -> Vec<(RomaniaGraphCity, RomaniaGraphCity, Weight)> {
        use RomaniaGraphCity::*;

        vec![
            (Oradea, Zerind, 71.0),
            (Oradea, Sibiu, 151.0),
            (Zerind, Arad, 75.0),
            (Arad, Sibiu, 140.0),
            (Arad, Timisoara, 118.0),
            (Timisoara, Lugoj, 111.0),
            (Lugoj, Mehadia, 70.0),
            (Mehadia, Dobreta, 75.0),
            (Dobreta, Craiova, 120.0),
            (Craiova, RimnicuVilcea, 146.0),
            (Craiova, Pitesti, 138.0),
            (RimnicuVilcea, Pitesti, 97.0),
            (RimnicuVilcea, Sibiu, 80.0),
            (Sibiu, Fagaras, 99.0),
            (Fagaras, Bucharest, 211.0),
            (Pitesti, Bucharest, 101.0),
            (Bucharest, Giurgiu, 90.0),
            (Bucharest, Urziceni, 85.0),
            (Urziceni, Hirsova, 98.0),
            (Hirsova, Eforie, 86.0),
            (Urziceni, Vaslui, 142.0),
            (Vaslui, Iasi, 92.0),
            (Iasi, Neamt, 87.0),
        ]
    }

    /// Straight-line distances to Bucharest, an admissible heuristic for the
    /// road distances above
    pub fn straight_line_distance_to_bucharest(city: RomaniaGraphCity) -> Weight {
        use RomaniaGraphCity::*;

        match city {
            Arad => 366.0,
            Bucharest => 0.0,
            Craiova => 160.0,
            Dobreta => 242.0,
            Eforie => 161.0,
            Fagaras => 176.0,
            Giurgiu => 77.0,
            Hirsova => 151.0,
            Iasi => 226.0,
            Lugoj => 244.0,
            Mehadia => 241.0,
            Neamt => 234.0,
            Oradea => 380.0,
            Pitesti => 100.0,
            RimnicuVilcea => 193.0,
            Sibiu => 253.0,
            Timisoara => 329.0,
            Urziceni => 80.0,
            Vaslui => 199.0,
            Zerind => 374.0,
        }
    }

    pub fn create_romania_graph() -> Graph<RomaniaGraphCity> {
        let mut graph = Graph::undirected();

        for (from, to, distance) in get_romania_graph_edges() {
            graph.add_edge(from, to, distance).unwrap();
        }

        graph
    }

    /// 1 -> 2 -> 3 -> 4 -> 5 with a 2 -> 4 shortcut, every edge weighs 0.1
    pub fn create_chain_graph() -> Graph<i32> {
        let mut graph = Graph::directed();

        for (from, to) in [(1, 2), (2, 3), (3, 4), (4, 5), (2, 4)] {
            graph.add_edge(from, to, 0.1).unwrap();
        }

        graph
    }
}
