//! Seeded random maze generation.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate the ASCII art of a random connected `side`×`side` maze.
///
/// Starts from an open room, then walls off cells in a shuffled order,
/// keeping every open cell reachable from every other. Agent `A` is
/// pinned to the top-left corner and `B` to the bottom-right; both
/// always stay open. Identical seeds produce identical mazes
/// (ChaCha8, the workspace's determinism workhorse).
pub fn random_maze(side: usize, seed: u64) -> String {
    assert!(side >= 2, "maze needs room for two agents");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = vec![vec![true; side]; side];

    let protected = [(0usize, 0usize), (side - 1, side - 1)];
    let mut candidates: Vec<(usize, usize)> = (0..side)
        .flat_map(|r| (0..side).map(move |c| (r, c)))
        .filter(|rc| !protected.contains(rc))
        .collect();
    candidates.shuffle(&mut rng);

    // Try to wall off roughly 40% of the interior.
    let attempts = candidates.len() * 2 / 5;
    for &(r, c) in candidates.iter().take(attempts) {
        cells[r][c] = false;
        if !connected(&cells) {
            cells[r][c] = true;
        }
    }

    let mut art = String::new();
    for (r, row) in cells.iter().enumerate() {
        for (c, &open) in row.iter().enumerate() {
            art.push(match ((r, c), open) {
                ((0, 0), _) => 'A',
                (rc, _) if rc == (side - 1, side - 1) => 'B',
                (_, true) => '.',
                (_, false) => '#',
            });
        }
        if r < side - 1 {
            art.push('\n');
        }
    }
    art
}

/// Whether all open cells form one 4-connected component.
fn connected(cells: &[Vec<bool>]) -> bool {
    let side = cells.len();
    let total_open: usize = cells.iter().flatten().filter(|&&open| open).count();
    let mut seen = vec![vec![false; side]; side];
    let mut queue = vec![(0usize, 0usize)];
    seen[0][0] = true;
    let mut reached = 0usize;
    while let Some((r, c)) = queue.pop() {
        reached += 1;
        let push = |nr: usize, nc: usize, seen: &mut Vec<Vec<bool>>, queue: &mut Vec<(usize, usize)>| {
            if cells[nr][nc] && !seen[nr][nc] {
                seen[nr][nc] = true;
                queue.push((nr, nc));
            }
        };
        if r > 0 {
            push(r - 1, c, &mut seen, &mut queue);
        }
        if r + 1 < side {
            push(r + 1, c, &mut seen, &mut queue);
        }
        if c > 0 {
            push(r, c - 1, &mut seen, &mut queue);
        }
        if c + 1 < side {
            push(r, c + 1, &mut seen, &mut queue);
        }
    }
    reached == total_open
}
