//! The exploration graph: an arena of discovered cells.

use crate::node::Node;
use indexmap::{IndexMap, IndexSet};
use wander_core::{Direction, GraphError, NodeId, Position, Rect};

/// Everything one agent knows about its labyrinth.
///
/// Nodes are stored in an [`IndexMap`] keyed by position: insertion
/// order is discovery order, a [`NodeId`] is the insertion index, and
/// the positional lookup that discovery depends on is a single map
/// probe. Within one graph a position is unique per node, and because
/// nodes are never removed every issued id stays valid.
///
/// `current` always refers to the cell the agent stands on — except
/// during the window between a committed world move and the matching
/// [`advance`](Graph::advance) call, when touching it is a programming
/// error. [`advance`](Graph::advance) surfaces exactly that mistake.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: IndexMap<Position, Node>,
    start: NodeId,
    current: NodeId,
    previous: NodeId,
    rect: Rect,
}

impl Graph {
    /// Create a graph holding a single visited start node at the origin.
    ///
    /// The agent is considered to be standing on the start node, so
    /// `current` and `previous` both begin there.
    pub fn new() -> Self {
        let mut nodes = IndexMap::new();
        nodes.insert(Position::ORIGIN, Node::new(Position::ORIGIN, true));
        let start = NodeId(0);
        Self {
            nodes,
            start,
            current: start,
            previous: start,
            rect: Rect::around(Position::ORIGIN),
        }
    }

    /// The node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Iterate over all nodes in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .values()
            .enumerate()
            .map(|(index, node)| (NodeId(index as u32), node))
    }

    /// Number of discovered cells.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The start node.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// The cell the agent currently stands on.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// The cell the agent stood on before the last [`advance`](Graph::advance).
    pub fn previous(&self) -> NodeId {
        self.previous
    }

    /// Position of the current cell.
    pub fn current_position(&self) -> Position {
        self.node(self.current).position()
    }

    /// Bounding rectangle of every discovered position.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Discover the cell adjacent to `current` in `direction`.
    ///
    /// The maze is a general graph, not a tree: the same physical cell
    /// may already have been discovered via a different path, so the
    /// positional lookup is mandatory before creating anything. Either
    /// way the current node and the target end up linked symmetrically
    /// in `direction` and its opposite. Calling this twice for the same
    /// direction leaves the same node count and link structure as
    /// calling it once.
    pub fn link_or_create(&mut self, direction: Direction) {
        let target_pos = self.current_position().at(direction);
        let target = match self.nodes.get_index_of(&target_pos) {
            Some(index) => NodeId(index as u32),
            None => {
                let id = NodeId(self.nodes.len() as u32);
                self.nodes.insert(target_pos, Node::new(target_pos, false));
                self.rect.expand(target_pos);
                id
            }
        };
        let from = self.current;
        self.node_mut(from).set_link(direction, target);
        self.node_mut(target).set_link(direction.opposite(), from);
    }

    /// Step onto the neighbour in `direction`, marking it visited.
    ///
    /// Records the old current cell as `previous`.
    ///
    /// # Errors
    ///
    /// [`GraphError::MissingLink`] when the slot in `direction` is
    /// empty. That means the mandatory node-update pass after the
    /// previous move was skipped — a contract violation, not a
    /// recoverable condition.
    pub fn advance(&mut self, direction: Direction) -> Result<(), GraphError> {
        let here = self.node(self.current);
        let next = here.link(direction).ok_or(GraphError::MissingLink {
            at: here.position(),
            direction,
        })?;
        self.previous = self.current;
        self.current = next;
        self.node_mut(next).set_visited(true);
        Ok(())
    }

    /// Whether every discovered cell has been stood on.
    pub fn is_explored(&self) -> bool {
        self.nodes.values().all(Node::is_visited)
    }

    /// Clear every visited flag except the current cell's.
    ///
    /// Used before a deterministic re-sweep; the learned topology is
    /// kept intact.
    pub fn reset_visited(&mut self) {
        let current = self.current;
        for node in self.nodes.values_mut() {
            node.set_visited(false);
        }
        self.node_mut(current).set_visited(true);
    }

    /// Clear every cached dead-end flag.
    pub fn reset_dead_ends(&mut self) {
        for node in self.nodes.values_mut() {
            node.set_dead_end(false);
        }
    }

    /// Recompute dead-end classification from scratch.
    ///
    /// A visited cell with fewer than two live exits (links whose
    /// target is not itself a dead end) is a dead end; flagging one can
    /// transitively demote its neighbours, so the pass repeats until no
    /// classification changes. The fixed point makes the result
    /// independent of traversal order. Unvisited cells are never
    /// classified — their neighbourhood is not fully known yet.
    pub fn refresh_dead_ends(&mut self) {
        self.reset_dead_ends();
        loop {
            let flips: Vec<usize> = (0..self.nodes.len())
                .filter(|&index| {
                    let node = &self.nodes[index];
                    node.is_visited() && !node.is_dead_end() && self.live_exits(node) < 2
                })
                .collect();
            if flips.is_empty() {
                break;
            }
            for index in flips {
                self.nodes[index].set_dead_end(true);
            }
        }
    }

    fn live_exits(&self, node: &Node) -> usize {
        Direction::SCAN_ORDER
            .iter()
            .filter(|&&d| {
                node.link(d)
                    .is_some_and(|id| !self.node(id).is_dead_end())
            })
            .count()
    }

    /// Positions of all discovered cells.
    pub fn passage_positions(&self) -> Vec<Position> {
        self.nodes.keys().copied().collect()
    }

    /// Adjacent positions every *visited* cell knows to be walled.
    ///
    /// An empty slot on a visited cell is a wall the agent has probed.
    /// Unvisited cells contribute nothing: their unexplored sides are
    /// unknown, not necessarily walls.
    pub fn wall_positions(&self) -> Vec<Position> {
        let mut walls = Vec::new();
        for node in self.nodes.values() {
            if !node.is_visited() {
                continue;
            }
            for direction in Direction::SCAN_ORDER {
                if node.link(direction).is_none() {
                    walls.push(node.position().at(direction));
                }
            }
        }
        walls
    }

    /// Whether any passage of either graph coincides with any wall of
    /// either graph.
    ///
    /// This is the correctness oracle used during map alignment: a true
    /// overlay of the same maze never claims a cell is simultaneously
    /// open and walled.
    pub fn intersects(&self, other: &Graph) -> bool {
        let passages: IndexSet<Position> = self
            .passage_positions()
            .into_iter()
            .chain(other.passage_positions())
            .collect();
        self.wall_positions()
            .into_iter()
            .chain(other.wall_positions())
            .any(|wall| passages.contains(&wall))
    }

    /// Translate every node and the bounding rectangle by `(dx, dy)`.
    pub fn shift(&mut self, dx: i32, dy: i32) {
        if dx == 0 && dy == 0 {
            return;
        }
        let nodes = std::mem::take(&mut self.nodes);
        self.nodes = nodes
            .into_iter()
            .map(|(pos, mut node)| {
                let moved = pos.shifted(dx, dy);
                node.set_position(moved);
                (moved, node)
            })
            .collect();
        self.rect.shift(dx, dy);
    }

    /// Translate the graph so the bounding rectangle's min corner sits
    /// at the origin, leaving every position non-negative.
    pub fn normalize(&mut self) {
        self.shift(-self.rect.min_x, -self.rect.min_y);
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Discover all four neighbours, as if the world were fully open.
    fn observe_open(graph: &mut Graph) {
        for direction in Direction::SCAN_ORDER {
            graph.link_or_create(direction);
        }
    }

    /// Walk a route through an unbounded open world, discovering all
    /// sides of every cell along the way.
    fn walk_open(walk: &[Direction]) -> Graph {
        let mut graph = Graph::new();
        observe_open(&mut graph);
        for &direction in walk {
            graph.advance(direction).unwrap();
            observe_open(&mut graph);
        }
        graph
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Right),
            Just(Direction::Up),
            Just(Direction::Down),
        ]
    }

    // ── Discovery ───────────────────────────────────────────────

    #[test]
    fn fresh_graph_has_one_visited_node() {
        let graph = Graph::new();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.current(), graph.start());
        assert!(graph.node(graph.start()).is_visited());
        assert_eq!(graph.current_position(), Position::ORIGIN);
    }

    #[test]
    fn link_or_create_links_both_ways() {
        let mut graph = Graph::new();
        graph.link_or_create(Direction::Right);
        assert_eq!(graph.node_count(), 2);
        let start = graph.start();
        let right = graph.node(start).link(Direction::Right).unwrap();
        assert_eq!(graph.node(right).link(Direction::Left), Some(start));
        assert_eq!(graph.node(right).position(), Position::new(1, 0));
        assert!(!graph.node(right).is_visited());
    }

    #[test]
    fn link_or_create_is_idempotent() {
        let mut graph = Graph::new();
        graph.link_or_create(Direction::Up);
        let count = graph.node_count();
        let linked = graph.node(graph.start()).link(Direction::Up);
        graph.link_or_create(Direction::Up);
        assert_eq!(graph.node_count(), count);
        assert_eq!(graph.node(graph.start()).link(Direction::Up), linked);
    }

    #[test]
    fn rediscovery_around_a_cycle_reuses_the_node() {
        // Walk around a 2x2 block; the fourth cell's neighbour is the
        // start, found by position rather than created again.
        let graph = walk_open(&[Direction::Right, Direction::Up, Direction::Left]);
        assert_eq!(graph.current_position(), Position::new(0, 1));
        let back_down = graph.node(graph.current()).link(Direction::Down).unwrap();
        assert_eq!(back_down, graph.start());
    }

    #[test]
    fn rect_covers_discovered_cells() {
        let graph = walk_open(&[Direction::Left, Direction::Down]);
        // Walked to (-1, -1) while probing all sides of each cell.
        let rect = graph.rect();
        assert_eq!((rect.min_x, rect.min_y), (-2, -2));
        assert_eq!((rect.max_x, rect.max_y), (1, 1));
    }

    // ── Advancing ───────────────────────────────────────────────

    #[test]
    fn advance_marks_visited_and_tracks_previous() {
        let mut graph = Graph::new();
        graph.link_or_create(Direction::Down);
        graph.advance(Direction::Down).unwrap();
        assert_eq!(graph.current_position(), Position::new(0, -1));
        assert_eq!(graph.previous(), graph.start());
        assert!(graph.node(graph.current()).is_visited());
    }

    #[test]
    fn advance_into_empty_slot_is_fatal() {
        let mut graph = Graph::new();
        let err = graph.advance(Direction::Left).unwrap_err();
        assert_eq!(
            err,
            GraphError::MissingLink {
                at: Position::ORIGIN,
                direction: Direction::Left,
            }
        );
    }

    // ── Exploration state ───────────────────────────────────────

    #[test]
    fn is_explored_tracks_visits() {
        let mut graph = Graph::new();
        assert!(graph.is_explored());
        graph.link_or_create(Direction::Right);
        assert!(!graph.is_explored());
        graph.advance(Direction::Right).unwrap();
        assert!(graph.is_explored());
    }

    #[test]
    fn reset_visited_spares_current() {
        let mut graph = walk_open(&[Direction::Right, Direction::Right]);
        graph.reset_visited();
        let visited: Vec<Position> = graph
            .nodes()
            .filter(|(_, n)| n.is_visited())
            .map(|(_, n)| n.position())
            .collect();
        assert_eq!(visited, vec![graph.current_position()]);
    }

    // ── Dead ends ───────────────────────────────────────────────

    #[test]
    fn corridor_collapses_to_dead_ends() {
        // A fully-visited straight corridor: both ends have one exit,
        // and pruning them leaves the middle with none.
        let mut graph = Graph::new();
        for _ in 0..3 {
            graph.link_or_create(Direction::Right);
            graph.advance(Direction::Right).unwrap();
        }
        graph.refresh_dead_ends();
        assert!(graph.nodes().all(|(_, n)| n.is_dead_end()));
    }

    #[test]
    fn cycle_has_no_dead_ends() {
        let mut graph = walk_open(&[
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ]);
        // Visit the ring only; the probed outer cells stay unvisited.
        graph.refresh_dead_ends();
        for (_, node) in graph.nodes() {
            if node.is_visited() {
                assert!(!node.is_dead_end(), "ring cell {} flagged", node.position());
            }
        }
    }

    #[test]
    fn unvisited_nodes_are_never_classified() {
        let mut graph = Graph::new();
        graph.link_or_create(Direction::Right);
        graph.refresh_dead_ends();
        let right = graph.node(graph.start()).link(Direction::Right).unwrap();
        assert!(!graph.node(right).is_dead_end());
    }

    #[test]
    fn reset_dead_ends_clears_classification() {
        let mut graph = Graph::new();
        graph.link_or_create(Direction::Right);
        graph.advance(Direction::Right).unwrap();
        graph.refresh_dead_ends();
        assert!(graph.nodes().any(|(_, n)| n.is_dead_end()));
        graph.reset_dead_ends();
        assert!(graph.nodes().all(|(_, n)| !n.is_dead_end()));
    }

    // ── Passages, walls, intersection ───────────────────────────

    #[test]
    fn walls_come_only_from_visited_nodes() {
        let mut graph = Graph::new();
        graph.link_or_create(Direction::Right);
        // Start is visited with three empty slots; the unvisited right
        // neighbour contributes nothing.
        let walls = graph.wall_positions();
        assert_eq!(walls.len(), 3);
        assert!(walls.contains(&Position::new(-1, 0)));
        assert!(walls.contains(&Position::new(0, 1)));
        assert!(walls.contains(&Position::new(0, -1)));
    }

    #[test]
    fn intersects_flags_wall_on_passage() {
        // Graph a: corridor start->(1,0). Graph b: lone visited cell at
        // (1,0)'s position claiming a wall where a has a passage.
        let mut a = Graph::new();
        a.link_or_create(Direction::Right);
        a.advance(Direction::Right).unwrap();

        let b = Graph::new();
        // b's visited origin has four walls, one of them at (1, 0)...
        assert!(a.intersects(&b));
        // ...and the relation is symmetric.
        assert!(b.intersects(&a));
    }

    #[test]
    fn identical_graphs_do_not_intersect() {
        let a = walk_open(&[Direction::Right, Direction::Up]);
        let b = a.clone();
        assert!(!a.intersects(&b));
    }

    // ── Shifting ────────────────────────────────────────────────

    #[test]
    fn normalize_moves_min_corner_to_origin() {
        let mut graph = walk_open(&[Direction::Left, Direction::Down]);
        graph.normalize();
        let rect = graph.rect();
        assert_eq!((rect.min_x, rect.min_y), (0, 0));
        // Structure survives: current is still linked back to previous.
        assert_eq!(graph.node_count(), graph.passage_positions().len());
    }

    #[test]
    fn shift_preserves_ids_and_links() {
        let mut graph = walk_open(&[Direction::Right]);
        let current = graph.current();
        let pos_before = graph.current_position();
        graph.shift(5, -3);
        assert_eq!(graph.current(), current);
        assert_eq!(graph.current_position(), pos_before.shifted(5, -3));
        let back = graph.node(current).link(Direction::Left).unwrap();
        assert_eq!(graph.node(back).link(Direction::Right), Some(current));
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn links_stay_symmetric(walk in proptest::collection::vec(arb_direction(), 0..64)) {
            let graph = walk_open(&walk);
            for (id, node) in graph.nodes() {
                for direction in Direction::SCAN_ORDER {
                    if let Some(neighbour) = node.link(direction) {
                        prop_assert_eq!(
                            graph.node(neighbour).link(direction.opposite()),
                            Some(id),
                            "asymmetric link {} from {}",
                            direction,
                            node.position(),
                        );
                    }
                }
            }
        }

        #[test]
        fn positions_stay_unique(walk in proptest::collection::vec(arb_direction(), 0..64)) {
            let graph = walk_open(&walk);
            let positions: IndexSet<Position> =
                graph.passage_positions().into_iter().collect();
            prop_assert_eq!(positions.len(), graph.node_count());
        }

        #[test]
        fn discovery_is_idempotent(walk in proptest::collection::vec(arb_direction(), 0..32)) {
            let mut once = walk_open(&walk);
            let mut twice = walk_open(&walk);
            for direction in Direction::SCAN_ORDER {
                twice.link_or_create(direction);
                twice.link_or_create(direction);
            }
            once.link_or_create(Direction::Left);
            prop_assert_eq!(once.node_count(), twice.node_count());
        }
    }
}
