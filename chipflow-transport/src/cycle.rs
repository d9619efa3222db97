use crate::plan::Plan;

const UP: usize = 0;
const RIGHT: usize = 1;
const DOWN: usize = 2;
const LEFT: usize = 3;

/// Upper bound on search expansions. The basis of any plan produced by this
/// crate is a forest, so the search always terminates; the budget guards
/// against hand-built plans whose allocated cells form a closed rectangle the
/// walk could circle forever.
const MAX_SEARCH_STEPS: usize = 1 << 20;

/// One frame of the route search stack.
#[derive(Debug, Clone, Copy)]
struct RoutePoint {
    row: usize,
    col: usize,
    /// Direction of the edge that reached this cell; `None` for the start.
    arrival: Option<usize>,
    /// How many candidate directions were already tried at this cell.
    tried: usize,
}

impl RoutePoint {
    /// Next direction to search from this cell. The start cell tries all four
    /// in cyclic order; any later cell tries everything except the reverse of
    /// its arrival direction: left turn, straight through, right turn.
    fn candidate(&self) -> Option<usize> {
        match self.arrival {
            None if self.tried < 4 => Some(self.tried),
            Some(arrival) if self.tried < 3 => Some((arrival + 3 + self.tried) % 4),
            _ => None,
        }
    }
}

/// Finds a closed alternating route through the entering cell at
/// `(start_row, start_col)` (which must already be allocated) and a subset of
/// the plan's allocated cells.
///
/// The search walks rays across the grid: a move in some direction lands on
/// the nearest allocated cell strictly along that ray. Straight-through moves
/// are allowed, so the raw route may visit collinear cells; those are elided
/// before returning, leaving only the corners of a rectilinear polygon whose
/// edges strictly alternate between row and column moves. Returns `None` when
/// no closed route exists.
pub fn find_cycle(plan: &Plan, start_row: usize, start_col: usize) -> Option<Vec<(usize, usize)>> {
    let mut route = vec![RoutePoint {
        row: start_row,
        col: start_col,
        arrival: None,
        tried: 0,
    }];

    let mut steps = 0;
    while let Some(&point) = route.last() {
        steps += 1;
        if steps > MAX_SEARCH_STEPS {
            return None;
        }

        let Some(direction) = point.candidate() else {
            // dead end: drop this cell and force the previous one to turn
            route.pop();
            if let Some(previous) = route.last_mut() {
                previous.tried += 1;
            }
            continue;
        };

        let Some((row, col)) = nearest_allocated(plan, point.row, point.col, direction) else {
            if let Some(last) = route.last_mut() {
                last.tried += 1;
            }
            continue;
        };

        if row == start_row && col == start_col {
            if route.len() >= 3 {
                return Some(corners(&route, direction));
            }
            if let Some(last) = route.last_mut() {
                last.tried += 1;
            }
            continue;
        }

        route.push(RoutePoint {
            row,
            col,
            arrival: Some(direction),
            tried: 0,
        });
    }

    None
}

/// Nearest allocated cell strictly along the ray from `(row, col)`.
fn nearest_allocated(
    plan: &Plan,
    row: usize,
    col: usize,
    direction: usize,
) -> Option<(usize, usize)> {
    match direction {
        UP => (0..row)
            .rev()
            .map(|i| (i, col))
            .find(|&(i, j)| plan.is_allocated(i, j)),
        RIGHT => (col + 1..plan.num_consumers())
            .map(|j| (row, j))
            .find(|&(i, j)| plan.is_allocated(i, j)),
        DOWN => (row + 1..plan.num_suppliers())
            .map(|i| (i, col))
            .find(|&(i, j)| plan.is_allocated(i, j)),
        LEFT => (0..col)
            .rev()
            .map(|j| (row, j))
            .find(|&(i, j)| plan.is_allocated(i, j)),
        _ => unreachable!(),
    }
}

/// Compacts a closed route down to its corner cells. A cell entered and left
/// in the same direction lies mid-segment and takes no part in the
/// redistribution, so it is dropped.
fn corners(route: &[RoutePoint], closing_direction: usize) -> Vec<(usize, usize)> {
    let mut edges: Vec<usize> = route[1..].iter().filter_map(|p| p.arrival).collect();
    edges.push(closing_direction);

    let mut cycle = Vec::with_capacity(route.len());
    cycle.push((route[0].row, route[0].col));
    for (i, point) in route.iter().enumerate().skip(1) {
        if edges[i - 1] != edges[i] {
            cycle.push((point.row, point.col));
        }
    }
    cycle
}
