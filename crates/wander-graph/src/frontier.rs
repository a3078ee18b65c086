//! Nearest-unvisited frontier search.
//!
//! Breadth-first expansion of *tadpoles* — partial routes that grow one
//! step per level out of the current node. Tadpoles are created and
//! discarded entirely within one search call; they never outlive it.
//!
//! Deduplication is graph-wide: the first tadpole to reach a node owns
//! it, later arrivals are dropped. A per-route loop check would return
//! the same route (the first one BFS discovers in scan order) while
//! letting the expansion count grow combinatorially in cyclic mazes;
//! the first-reached table keeps the search linear in node count.

use crate::graph::Graph;
use wander_core::{Direction, NodeId, Route};

/// A candidate route mid-growth: the steps taken so far and the node
/// its head currently sits on.
#[derive(Clone, Debug)]
struct Tadpole {
    route: Route,
    head: NodeId,
}

impl Graph {
    /// Shortest route from the current cell to the nearest unvisited
    /// cell, or an empty route when every discovered cell is visited.
    ///
    /// Shortest by hop count; among equally short targets the winner is
    /// the first discovered by breadth-first expansion with children
    /// spawned in scan order, so ties break by direction priority.
    pub fn route_to_unvisited(&self) -> Route {
        let mut reached = vec![false; self.node_count()];
        reached[self.current().index()] = true;
        let mut level = vec![Tadpole {
            route: Route::new(),
            head: self.current(),
        }];

        while !level.is_empty() {
            let mut next_level = Vec::new();
            for tadpole in &level {
                let head = self.node(tadpole.head);
                for direction in Direction::SCAN_ORDER {
                    let Some(target) = head.link(direction) else {
                        continue;
                    };
                    if reached[target.index()] {
                        continue;
                    }
                    reached[target.index()] = true;
                    let mut route = tadpole.route.clone();
                    route.push(direction);
                    if !self.node(target).is_visited() {
                        return route;
                    }
                    next_level.push(Tadpole {
                        route,
                        head: target,
                    });
                }
            }
            level = next_level;
        }
        Route::new()
    }
}
