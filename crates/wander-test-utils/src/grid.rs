//! ASCII-defined grid worlds.

use std::collections::HashSet;
use wander_core::{AgentId, Direction, Position, World};

/// One maze parsed from ASCII art.
///
/// `#` is a wall, `.` an open cell, `A`/`B` an open cell with that
/// agent standing on it. Any other character is treated as a wall.
/// The top art row is the highest `y`, matching the convention that
/// `Up` increases `y`.
#[derive(Clone, Debug)]
struct Maze {
    open: HashSet<Position>,
}

impl Maze {
    fn parse(art: &str) -> (Maze, Option<Position>, Option<Position>) {
        let lines: Vec<&str> = art.lines().collect();
        let height = lines.len() as i32;
        let mut open = HashSet::new();
        let mut a = None;
        let mut b = None;
        for (row, line) in lines.iter().enumerate() {
            let y = height - 1 - row as i32;
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(col as i32, y);
                match ch {
                    '.' => {
                        open.insert(pos);
                    }
                    'A' => {
                        open.insert(pos);
                        a = Some(pos);
                    }
                    'B' => {
                        open.insert(pos);
                        b = Some(pos);
                    }
                    _ => {}
                }
            }
        }
        (Maze { open }, a, b)
    }

    fn is_open(&self, pos: Position) -> bool {
        self.open.contains(&pos)
    }
}

/// A scripted ground-truth world for two agents.
///
/// Either both agents share one maze (a meeting is possible) or each
/// wanders its own disjoint maze (a meeting can never be reported).
/// Implements the full [`World`] contract: capability queries, joint
/// or solo stepping, same-cell detection, and a turn counter.
#[derive(Clone, Debug)]
pub struct GridWorld {
    shared: bool,
    maze_a: Maze,
    maze_b: Maze,
    pos_a: Position,
    pos_b: Position,
    turns: u32,
}

impl GridWorld {
    /// Both agents in one maze. The art must contain `A` and `B`.
    pub fn shared(art: &str) -> Self {
        let (maze, a, b) = Maze::parse(art);
        Self {
            shared: true,
            maze_a: maze.clone(),
            maze_b: maze,
            pos_a: a.expect("shared art must contain 'A'"),
            pos_b: b.expect("shared art must contain 'B'"),
            turns: 0,
        }
    }

    /// Each agent in its own maze; they can never meet.
    ///
    /// `art_a` must contain `A`, `art_b` must contain `B`.
    pub fn disjoint(art_a: &str, art_b: &str) -> Self {
        let (maze_a, a, _) = Maze::parse(art_a);
        let (maze_b, _, b) = Maze::parse(art_b);
        Self {
            shared: false,
            maze_a,
            maze_b,
            pos_a: a.expect("disjoint art_a must contain 'A'"),
            pos_b: b.expect("disjoint art_b must contain 'B'"),
            turns: 0,
        }
    }

    /// Whether the agents currently occupy the same cell of a shared
    /// maze.
    pub fn met(&self) -> bool {
        self.shared && self.pos_a == self.pos_b
    }

    /// World-frame position of `agent`, for test assertions.
    pub fn position(&self, agent: AgentId) -> Position {
        match agent {
            AgentId::A => self.pos_a,
            AgentId::B => self.pos_b,
        }
    }
}

impl World for GridWorld {
    fn can_go(&self, agent: AgentId, direction: Direction) -> bool {
        match agent {
            AgentId::A => self.maze_a.is_open(self.pos_a.at(direction)),
            AgentId::B => self.maze_b.is_open(self.pos_b.at(direction)),
        }
    }

    fn step(&mut self, a: Option<Direction>, b: Option<Direction>) -> bool {
        if let Some(direction) = a {
            assert!(
                self.can_go(AgentId::A, direction),
                "agent A stepped {direction} into a wall at {}",
                self.pos_a
            );
            self.pos_a = self.pos_a.at(direction);
        }
        if let Some(direction) = b {
            assert!(
                self.can_go(AgentId::B, direction),
                "agent B stepped {direction} into a wall at {}",
                self.pos_b
            );
            self.pos_b = self.pos_b.at(direction);
        }
        self.turns += 1;
        self.met()
    }

    fn turn_count(&self) -> u32 {
        self.turns
    }
}
