use std::collections::{BinaryHeap, HashMap, HashSet};

use pathgrid_core::{Grid, Point};

use crate::distance::manhattan;
use crate::error::PathError;

/// Heap entry ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy)]
struct FrontierEntry {
    pos: Point,
    f: f32,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f).is_eq()
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Bookkeeping for one search invocation.
///
/// Owned exclusively by a single [`find_path`] call; nothing is shared
/// between invocations or threads.
struct SearchState {
    /// Best known cost from start, per discovered coordinate.
    g_scores: HashMap<Point, f32>,
    /// `g + heuristic`, the priority key, per discovered coordinate.
    f_scores: HashMap<Point, f32>,
    /// Predecessor links for path reconstruction. Never set for the start.
    parents: HashMap<Point, Point>,
    /// Discovered-but-not-expanded coordinates, ordered by ascending f.
    /// May carry stale duplicate entries for a coordinate whose score
    /// improved after it was queued.
    frontier: BinaryHeap<FrontierEntry>,
    /// Coordinates currently queued. A pop that finds its coordinate
    /// absent here is a stale duplicate and is ignored.
    frontier_members: HashSet<Point>,
    /// Fully expanded coordinates; never revisited.
    explored: HashSet<Point>,
}

impl SearchState {
    fn new() -> Self {
        Self {
            g_scores: HashMap::new(),
            f_scores: HashMap::new(),
            parents: HashMap::new(),
            frontier: BinaryHeap::new(),
            frontier_members: HashSet::new(),
            explored: HashSet::new(),
        }
    }
}

/// Compute the cheapest path from `start` to `goal` on a 4-connected grid.
///
/// The cost of a step is the weight of the cell being entered; the path
/// cost is the sum of entered cells' weights, excluding the start cell.
/// Returns the full coordinate sequence from `start` to `goal` inclusive
/// (a single element when `start == goal`).
///
/// The search is cost-optimal for grids whose walkable cells all have
/// weight >= 1, and deterministic: identical inputs yield identical paths.
///
/// # Errors
///
/// - [`PathError::OutOfBounds`] if `start` or `goal` lies outside the grid.
/// - [`PathError::Unwalkable`] if the cell at `start` or `goal` is blocked.
/// - [`PathError::NoPathFound`] if `goal` is unreachable from `start`.
pub fn find_path(grid: &Grid, start: Point, goal: Point) -> Result<Vec<Point>, PathError> {
    if !grid.contains(start) {
        return Err(PathError::OutOfBounds(start));
    }
    if !grid.contains(goal) {
        return Err(PathError::OutOfBounds(goal));
    }
    if !grid.cell_at(start).walkable {
        return Err(PathError::Unwalkable(start));
    }
    if !grid.cell_at(goal).walkable {
        return Err(PathError::Unwalkable(goal));
    }

    let mut state = SearchState::new();

    let start_f = manhattan(start, goal) as f32;
    state.g_scores.insert(start, 0.0);
    state.f_scores.insert(start, start_f);
    state.frontier.push(FrontierEntry {
        pos: start,
        f: start_f,
    });
    state.frontier_members.insert(start);

    while let Some(FrontierEntry { pos: current, .. }) = state.frontier.pop() {
        if !state.frontier_members.remove(&current) {
            // Stale duplicate of a coordinate that already left the frontier.
            continue;
        }

        if current == goal {
            return Ok(reconstruct(&state.parents, current));
        }

        state.explored.insert(current);
        let current_g = state.g_scores[&current];

        for neighbor in current.neighbors_4() {
            if !grid.contains(neighbor) {
                continue;
            }
            let cell = grid.cell_at(neighbor);
            if !cell.walkable || state.explored.contains(&neighbor) {
                continue;
            }

            let tentative_g = current_g + cell.weight;

            // Non-strict: an equal-cost rediscovery keeps the first parent.
            if let Some(&existing_g) = state.g_scores.get(&neighbor) {
                if tentative_g >= existing_g {
                    continue;
                }
            }

            state.parents.insert(neighbor, current);
            state.g_scores.insert(neighbor, tentative_g);
            let f = tentative_g + manhattan(neighbor, goal) as f32;
            state.f_scores.insert(neighbor, f);

            // Push even if the coordinate is already queued: the fresher
            // key must be able to surface, and the membership check on pop
            // discards whichever entry goes stale.
            state.frontier.push(FrontierEntry { pos: neighbor, f });
            state.frontier_members.insert(neighbor);
        }
    }

    Err(PathError::NoPathFound)
}

/// Walk the parent links backward from `goal` and reverse.
///
/// Only the start coordinate has no parent entry, so the walk always
/// terminates there.
fn reconstruct(parents: &HashMap<Point, Point>, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = parents.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}


#[cfg(test)]
mod optimality {
    use super::*;
    use pathgrid_core::Cell;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    /// Brute-force cheapest cost by relaxing to a fixpoint. Slow but
    /// obviously correct on the small grids used here.
    fn baseline_cost(grid: &Grid, start: Point, goal: Point) -> Option<f32> {
        let mut dist: HashMap<Point, f32> = HashMap::new();
        dist.insert(start, 0.0);
        let mut changed = true;
        while changed {
            changed = false;
            for (p, _) in grid.iter() {
                let Some(&dp) = dist.get(&p) else {
                    continue;
                };
                for n in p.neighbors_4() {
                    if !grid.contains(n) {
                        continue;
                    }
                    let cell = grid.cell_at(n);
                    if !cell.walkable {
                        continue;
                    }
                    let nd = dp + cell.weight;
                    if dist.get(&n).is_none_or(|&e| nd < e) {
                        dist.insert(n, nd);
                        changed = true;
                    }
                }
            }
        }
        dist.get(&goal).copied()
    }

    #[test]
    fn random_grids_match_baseline() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut checked = 0;

        for _ in 0..300 {
            let width = rng.random_range(1..=8);
            let height = rng.random_range(1..=8);
            let g = Grid::from_fn(width, height, |_| {
                if rng.random_bool(0.7) {
                    Cell::floor().with_weight(rng.random_range(1..=9) as f32)
                } else {
                    Cell::wall()
                }
            })
            .unwrap();

            let walkable: Vec<Point> = g
                .iter()
                .filter(|&(_, c)| c.walkable)
                .map(|(p, _)| p)
                .collect();
            if walkable.is_empty() {
                continue;
            }
            let start = walkable[rng.random_range(0..walkable.len())];
            let goal = walkable[rng.random_range(0..walkable.len())];

            let expected = baseline_cost(&g, start, goal);
            match find_path(&g, start, goal) {
                Ok(path) => {
                    let cost: f32 = path[1..].iter().map(|&p| g.cell_at(p).weight).sum();
                    let expected = expected.expect("search found a path the baseline missed");
                    assert!(
                        (cost - expected).abs() < 1e-4,
                        "cost {cost} != cheapest {expected} ({width}x{height}, {start} -> {goal})"
                    );
                    checked += 1;
                }
                Err(PathError::NoPathFound) => {
                    assert_eq!(expected, None, "baseline found a path the search missed");
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        // Make sure the generator actually exercised the search.
        assert!(checked > 50, "only {checked} solvable cases generated");
    }
}
