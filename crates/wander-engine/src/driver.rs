//! The synchronous turn loop.

use crate::config::DriverConfig;
use wander_core::{AgentId, Direction, DriverError, Route, World};
use wander_graph::Graph;
use wander_pathfinder::{Advice, Pathfinder};

/// How a completed run ended.
///
/// Fatal invariant violations are not outcomes — they surface as
/// [`DriverError`] from [`RendezvousDriver::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The agents stood on the same cell after a committed step.
    Met,
    /// The explored regions are provably disjoint mazes.
    CannotMeet,
}

/// Everything a finished run leaves behind.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Terminal classification.
    pub outcome: Outcome,
    /// World turns elapsed over the whole run.
    pub turns: u32,
    /// Agent A's graph, current node parked where the run ended.
    pub graph_a: Graph,
    /// Agent B's graph.
    pub graph_b: Graph,
}

/// One agent's bundle of policy, knowledge, and cached advice.
struct AgentSide {
    pathfinder: Pathfinder,
    graph: Graph,
    advice: Option<Advice>,
}

impl AgentSide {
    fn new(agent: AgentId) -> Self {
        Self {
            pathfinder: Pathfinder::new(agent),
            graph: Graph::new(),
            advice: None,
        }
    }
}

/// The two-agent turn loop over a shared world.
///
/// Owns the world and both agents. Each turn it interprets the pair of
/// advices, steps whoever should move, and re-fetches advice only for
/// agents that actually moved — an idle agent's graph is unchanged, so
/// its cached advice stays valid.
///
/// # Errors from [`run`](RendezvousDriver::run)
///
/// [`DriverError::AdviceContradiction`] when an agent advises
/// rendezvous against its graph's explored state (including at the end
/// of an unsuccessful fallback sweep), [`DriverError::SweepExhausted`]
/// when the fallback sweep hits its budget, and
/// [`DriverError::Graph`] when a step contract violation surfaces from
/// a graph.
pub struct RendezvousDriver<W: World> {
    world: W,
    side_a: AgentSide,
    side_b: AgentSide,
    config: DriverConfig,
}

impl<W: World> RendezvousDriver<W> {
    /// Drive `world` with the default configuration.
    pub fn new(world: W) -> Self {
        Self::with_config(world, DriverConfig::default())
    }

    /// Drive `world` with an explicit configuration.
    pub fn with_config(world: W, config: DriverConfig) -> Self {
        Self {
            world,
            side_a: AgentSide::new(AgentId::A),
            side_b: AgentSide::new(AgentId::B),
            config,
        }
    }

    /// Run to a terminal state.
    ///
    /// Consumes the driver; the report carries both graphs so the
    /// caller can hand them to map reconciliation.
    pub fn run(mut self) -> Result<RunReport, DriverError> {
        // Initial node-update before any advice is computed.
        self.side_a
            .pathfinder
            .observe(&self.world, &mut self.side_a.graph);
        self.side_b
            .pathfinder
            .observe(&self.world, &mut self.side_b.graph);

        let outcome = self.drive()?;
        Ok(RunReport {
            outcome,
            turns: self.world.turn_count(),
            graph_a: self.side_a.graph,
            graph_b: self.side_b.graph,
        })
    }

    fn drive(&mut self) -> Result<Outcome, DriverError> {
        loop {
            let advice_a = match self.side_a.advice.take() {
                Some(advice) => advice,
                None => self.side_a.pathfinder.advise(&mut self.side_a.graph),
            };
            let advice_b = match self.side_b.advice.take() {
                Some(advice) => advice,
                None => self.side_b.pathfinder.advise(&mut self.side_b.graph),
            };

            match (advice_a, advice_b) {
                (Advice::Move(route_a), Advice::Move(route_b)) => {
                    if let Some(outcome) = self.joint_walk(&route_a, &route_b)? {
                        return Ok(outcome);
                    }
                }
                (Advice::Move(route), Advice::Rendezvous) => {
                    // B is idle this turn; its advice stays current.
                    self.side_b.advice = Some(Advice::Rendezvous);
                    if impossible(&self.side_b.graph, &self.side_a.graph) {
                        return Ok(Outcome::CannotMeet);
                    }
                    if let Some(outcome) = self.solo_walk(AgentId::A, &route)? {
                        return Ok(outcome);
                    }
                }
                (Advice::Rendezvous, Advice::Move(route)) => {
                    self.side_a.advice = Some(Advice::Rendezvous);
                    if impossible(&self.side_a.graph, &self.side_b.graph) {
                        return Ok(Outcome::CannotMeet);
                    }
                    if let Some(outcome) = self.solo_walk(AgentId::B, &route)? {
                        return Ok(outcome);
                    }
                }
                (Advice::Rendezvous, Advice::Rendezvous) => {
                    return self.converge();
                }
            }
        }
    }

    /// Step both agents together for the overlapping prefix of their
    /// routes, checking for a meeting after every joint step.
    fn joint_walk(
        &mut self,
        route_a: &Route,
        route_b: &Route,
    ) -> Result<Option<Outcome>, DriverError> {
        let steps = route_a.len().min(route_b.len());
        for index in 0..steps {
            let step_a = route_a[index];
            let step_b = route_b[index];
            let met = self.world.step(Some(step_a), Some(step_b));
            self.side_a.graph.advance(step_a)?;
            self.side_a
                .pathfinder
                .observe(&self.world, &mut self.side_a.graph);
            self.side_b.graph.advance(step_b)?;
            self.side_b
                .pathfinder
                .observe(&self.world, &mut self.side_b.graph);
            if met {
                return Ok(Some(Outcome::Met));
            }
        }
        Ok(None)
    }

    /// Walk one agent through its whole route while the partner idles.
    fn solo_walk(
        &mut self,
        agent: AgentId,
        route: &Route,
    ) -> Result<Option<Outcome>, DriverError> {
        for &direction in route.iter() {
            if self.step_agent(agent, direction)? {
                return Ok(Some(Outcome::Met));
            }
        }
        Ok(None)
    }

    /// Commit one solo step: world first (its move calls are ordered
    /// and side-effecting), then the graph, then the node-update pass.
    fn step_agent(&mut self, agent: AgentId, direction: Direction) -> Result<bool, DriverError> {
        let met = match agent {
            AgentId::A => self.world.step(Some(direction), None),
            AgentId::B => self.world.step(None, Some(direction)),
        };
        let (world, side) = match agent {
            AgentId::A => (&self.world, &mut self.side_a),
            AgentId::B => (&self.world, &mut self.side_b),
        };
        side.graph.advance(direction)?;
        side.pathfinder.observe(world, &mut side.graph);
        Ok(met)
    }

    /// Both agents believe exploration is done.
    ///
    /// Differing node counts prove the mazes disjoint. Equal counts
    /// prove nothing — symmetric disjoint mazes exist — so agent A
    /// re-sweeps its maze node by node hunting for a literal encounter
    /// while B stays put, bounded by the configured step budget.
    fn converge(&mut self) -> Result<Outcome, DriverError> {
        if !self.side_a.graph.is_explored() {
            return Err(DriverError::AdviceContradiction { agent: AgentId::A });
        }
        if !self.side_b.graph.is_explored() {
            return Err(DriverError::AdviceContradiction { agent: AgentId::B });
        }
        if self.side_a.graph.node_count() != self.side_b.graph.node_count() {
            return Ok(Outcome::CannotMeet);
        }

        self.side_a.graph.reset_visited();
        self.side_a.graph.reset_dead_ends();
        let mut steps = 0u32;
        loop {
            match self.side_a.pathfinder.advise(&mut self.side_a.graph) {
                Advice::Move(route) => {
                    for &direction in route.iter() {
                        if steps >= self.config.sweep_step_budget {
                            return Err(DriverError::SweepExhausted { steps });
                        }
                        let met = self.step_agent(AgentId::A, direction)?;
                        steps += 1;
                        if met {
                            return Ok(Outcome::Met);
                        }
                    }
                }
                // The sweep finished without an encounter: the advice
                // and the hunt's premise contradict each other.
                Advice::Rendezvous => {
                    return Err(DriverError::AdviceContradiction { agent: AgentId::A })
                }
            }
        }
    }
}

/// The size-based impossibility pre-check for Move/Rendezvous turns:
/// a fully-explored resting side smaller than the moving side's graph
/// can never match it.
fn impossible(resting: &Graph, moving: &Graph) -> bool {
    resting.node_count() < moving.node_count() && resting.is_explored()
}
