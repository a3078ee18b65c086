//! The per-agent policy object.

use crate::advice::Advice;
use smallvec::smallvec;
use wander_core::{AgentId, Direction, World};
use wander_graph::Graph;

/// One agent's exploration policy.
///
/// Holds only the agent's identity; all knowledge lives in the graph
/// and all ground truth in the world, both passed in per call. Only one
/// agent context ever touches a given graph, so no aliasing arises.
#[derive(Clone, Copy, Debug)]
pub struct Pathfinder {
    agent: AgentId,
}

impl Pathfinder {
    /// Create the policy for `agent`.
    pub fn new(agent: AgentId) -> Self {
        Self { agent }
    }

    /// The agent this policy steers.
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// The node-update pass: probe all four directions from the cell
    /// the agent stands on and record each passable one in the graph.
    ///
    /// Must run once before the first [`advise`](Pathfinder::advise)
    /// and again after every committed move — [`Graph::advance`] relies
    /// on the links this pass creates. Queries the world exactly once
    /// per direction.
    pub fn observe<W: World>(&self, world: &W, graph: &mut Graph) {
        for direction in Direction::SCAN_ORDER {
            if world.can_go(self.agent, direction) {
                graph.link_or_create(direction);
            }
        }
    }

    /// Decide this turn's action from the current graph state.
    ///
    /// In priority order:
    /// 1. Standing on a dead end: one step toward the first non-dead-end
    ///    neighbour in scan order. Retreat outranks exploration — the
    ///    agent never wastes a turn inside a fully-classified dead end.
    /// 2. Unvisited cells remain: the frontier route.
    /// 3. Otherwise [`Advice::Rendezvous`].
    ///
    /// Dead-end classification is refreshed from scratch first, so the
    /// verdict never depends on what order earlier turns asked in.
    pub fn advise(&self, graph: &mut Graph) -> Advice {
        graph.refresh_dead_ends();

        let here = graph.node(graph.current());
        if here.is_dead_end() {
            for (direction, neighbour) in here.neighbours() {
                if !graph.node(neighbour).is_dead_end() {
                    return Advice::Move(smallvec![direction]);
                }
            }
        }

        if !graph.is_explored() {
            let route = graph.route_to_unvisited();
            if !route.is_empty() {
                return Advice::Move(route);
            }
        }

        Advice::Rendezvous
    }
}
