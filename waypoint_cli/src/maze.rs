use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    path::PathBuf,
};

use anyhow::{anyhow, bail};
use clap::Args;
use tracing::{info, warn};
use waypoint_core::{Graph, Weight, a_star_search, dijkstra, hashing::cantor_pair};

const DEFAULT_MAP: &str = "\
X O X X X X
X O X O O X
X O X O X X
X O O O S X
X X X X X X
";

const IMPASSABLE: Weight = f64::INFINITY;

#[derive(Args)]
pub struct MazeArgs {
    /// Map file, one row per line with S (start), O (open) and X (wall) cells
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Column of the Dijkstra target cell
    #[arg(long, default_value_t = 1)]
    target_x: u32,

    /// Row of the Dijkstra target cell
    #[arg(long, default_value_t = 0)]
    target_y: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Start,
    Open,
    Wall,
}

impl CellState {
    fn from_symbol(symbol: char) -> Option<CellState> {
        match symbol {
            'S' => Some(CellState::Start),
            'O' => Some(CellState::Open),
            'X' => Some(CellState::Wall),
            _ => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            CellState::Start => 'S',
            CellState::Open => 'O',
            CellState::Wall => 'X',
        }
    }

    fn is_passable(&self) -> bool {
        !matches!(self, CellState::Wall)
    }
}

/// A maze cell, identified by its coordinates only
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    x: u32,
    y: u32,
    state: CellState,
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(cantor_pair(self.x as u64, self.y as u64));
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row: {} Col: {}", self.y, self.x)
    }
}

impl Cell {
    fn distance(&self, other: &Cell) -> Weight {
        let dx = self.x.abs_diff(other.x) as f64;
        let dy = self.y.abs_diff(other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

pub struct Maze {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Maze {
    pub fn parse(source: &str) -> Result<Maze, anyhow::Error> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for line in source.lines().filter(|line| !line.trim().is_empty()) {
            let mut row_width = 0;
            for symbol in line.chars().filter(|symbol| !symbol.is_whitespace()) {
                let state = CellState::from_symbol(symbol)
                    .ok_or_else(|| anyhow!("Unknown symbol '{}' on row {}", symbol, height))?;
                cells.push(Cell {
                    x: row_width,
                    y: height,
                    state,
                });
                row_width += 1;
            }

            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    bail!("Row {} has {} cells, expected {}", height, row_width, expected)
                }
                Some(_) => {}
            }

            height += 1;
        }

        let Some(width) = width else {
            bail!("Map is empty");
        };

        Ok(Maze {
            width,
            height,
            cells,
        })
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize).copied()
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells
            .iter()
            .find(|cell| cell.state == CellState::Start)
            .copied()
    }

    fn is_on_boundary(&self, cell: &Cell) -> bool {
        cell.x == 0 || cell.y == 0 || cell.x == self.width - 1 || cell.y == self.height - 1
    }

    /// An open cell on the edge of the map
    pub fn is_exit(&self, cell: &Cell) -> bool {
        cell.state == CellState::Open && self.is_on_boundary(cell)
    }

    /// Fewest steps needed to reach any boundary cell, each step costs at least 1
    pub fn distance_to_boundary(&self, cell: &Cell) -> Weight {
        let x = cell.x.min(self.width - 1 - cell.x);
        let y = cell.y.min(self.height - 1 - cell.y);
        x.min(y) as Weight
    }

    /// Undirected 8-neighbour graph. Moves between passable cells cost their
    /// euclidean length, any move touching a wall is impassable.
    pub fn build_graph(&self) -> Result<Graph<Cell>, anyhow::Error> {
        const FORWARD_NEIGHBOURS: [(i64, i64); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

        let mut graph = Graph::undirected();

        for cell in &self.cells {
            graph.add_vertex(*cell);

            for (dx, dy) in FORWARD_NEIGHBOURS {
                let (x, y) = (cell.x as i64 + dx, cell.y as i64 + dy);
                if x < 0 || y < 0 {
                    continue;
                }

                let Some(neighbour) = self.cell(x as u32, y as u32) else {
                    continue;
                };

                let weight = if cell.state.is_passable() && neighbour.state.is_passable() {
                    cell.distance(&neighbour)
                } else {
                    IMPASSABLE
                };

                graph.add_edge(*cell, neighbour, weight)?;
            }
        }

        Ok(graph)
    }

    pub fn render(&self, path: &[Cell]) -> String {
        let mut output = String::with_capacity(self.cells.len() * 2);

        for row in self.cells.chunks(self.width as usize) {
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| {
                    if cell.state != CellState::Start && path.contains(cell) {
                        '*'.to_string()
                    } else {
                        cell.state.symbol().to_string()
                    }
                })
                .collect();
            output.push_str(&symbols.join(" "));
            output.push('\n');
        }

        output
    }
}

fn print_path(maze: &Maze, path: &[Cell]) {
    print!("{}", maze.render(path));
    for cell in path {
        println!("{}", cell);
    }
    println!();
}

pub fn run(args: MazeArgs) -> Result<(), anyhow::Error> {
    let source = match &args.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_string(),
    };

    let maze = Maze::parse(&source)?;
    println!("Map:");
    print!("{}", maze.render(&[]));
    println!();

    let start = maze
        .start()
        .ok_or_else(|| anyhow!("No starting cell present"))?;
    let graph = maze.build_graph()?;
    info!(
        vertices = graph.vertex_cardinality(),
        edges = graph.edge_count(),
        "Built maze graph"
    );

    let astar_path = a_star_search(
        &graph,
        &start,
        |cell| maze.is_exit(cell),
        |_, next| maze.distance_to_boundary(next),
    );

    if astar_path.is_empty() {
        warn!("No exit reachable from {}", start);
    } else {
        println!("A* path from starting cell:");
        print_path(&maze, &astar_path);
    }

    let target = maze
        .cell(args.target_x, args.target_y)
        .ok_or_else(|| anyhow!("Target cell is outside of the map"))?;

    let dijkstra_path = dijkstra(&graph, &start, &target);

    if dijkstra_path.is_empty() {
        warn!("No path from {} to {}", start, target);
    } else {
        println!("Dijkstra's algorithm path from starting cell:");
        print_path(&maze, &dijkstra_path);
    }

    Ok(())
}
