use crate::cycle::find_cycle;
use crate::plan::{CostMatrix, Plan};

/// Upper bound on pivots. Every non-degenerate pivot strictly lowers the
/// total cost and there are finitely many basic plans, so well-formed inputs
/// stop long before this; the cap guards against adversarial plans where
/// degenerate pivots could repeat.
const MAX_PIVOTS: usize = 10_000;

/// Optimizes a feasible plan in place with the method of potentials.
///
/// Each iteration solves the dual potentials from the allocated cells, grades
/// every unallocated cell by its opportunity cost, and stops once no grade is
/// negative. Otherwise the worst-graded cell enters the basis with quantity
/// zero and flow is redistributed around the closed route through it: even
/// positions gain, odd positions lose, and any cell dropping to exactly zero
/// leaves the basis. When no closed route exists the entering cell is
/// structurally unreachable and the current plan is kept as-is.
pub fn optimize_plan(costs: &CostMatrix, plan: &mut Plan) {
    if plan.num_suppliers() == 0 || plan.num_consumers() == 0 {
        return;
    }

    for _ in 0..MAX_PIVOTS {
        let (u, v) = compute_potentials(costs, plan);

        let mut entering: Option<(usize, usize, f64)> = None;
        for i in 0..plan.num_suppliers() {
            for j in 0..plan.num_consumers() {
                if plan.is_allocated(i, j) {
                    continue;
                }
                let grade = costs[[i, j]] as f64 - u[i] - v[j];
                if entering.map_or(true, |(_, _, best)| grade < best) {
                    entering = Some((i, j, grade));
                }
            }
        }

        let Some((row, col, grade)) = entering else {
            return;
        };
        if grade >= 0.0 {
            return;
        }

        plan.allocate(row, col, 0.0);
        let Some(cycle) = find_cycle(plan, row, col) else {
            plan.clear(row, col);
            return;
        };

        // largest quantity that can move around the route without driving a
        // losing cell negative
        let theta = cycle
            .iter()
            .skip(1)
            .step_by(2)
            .filter_map(|&(i, j)| plan.quantity(i, j))
            .fold(f64::INFINITY, f64::min);

        for (position, &(i, j)) in cycle.iter().enumerate() {
            let quantity = plan.quantity(i, j).unwrap_or(0.0);
            let quantity = if position % 2 == 0 {
                quantity + theta
            } else {
                quantity - theta
            };
            if quantity == 0.0 {
                plan.clear(i, j);
            } else {
                plan.allocate(i, j, quantity);
            }
        }
    }
}

/// Solves the dual potentials from the allocated cells: `u[0]` is fixed to 0
/// and every allocated cell ties its row and column potentials together via
/// `u[i] + v[j] == cost[i, j]`. A degenerate plan can leave the basis
/// disconnected; whenever a full scan resolves nothing, the next unresolved
/// supplier is fixed to 0 as an extra gauge so propagation can continue.
fn compute_potentials(costs: &CostMatrix, plan: &Plan) -> (Vec<f64>, Vec<f64>) {
    let mut u: Vec<Option<f64>> = vec![None; plan.num_suppliers()];
    let mut v: Vec<Option<f64>> = vec![None; plan.num_consumers()];
    u[0] = Some(0.0);

    while u.iter().any(Option::is_none) || v.iter().any(Option::is_none) {
        let mut resolved_any = false;
        for (i, j, _) in plan.allocated_cells() {
            match (u[i], v[j]) {
                (Some(ui), None) => {
                    v[j] = Some(costs[[i, j]] as f64 - ui);
                    resolved_any = true;
                }
                (None, Some(vj)) => {
                    u[i] = Some(costs[[i, j]] as f64 - vj);
                    resolved_any = true;
                }
                _ => {}
            }
        }

        if !resolved_any {
            match u.iter_mut().find(|potential| potential.is_none()) {
                Some(unresolved) => *unresolved = Some(0.0),
                // only columns with no allocated cell remain; they get the
                // default below
                None => break,
            }
        }
    }

    (
        u.into_iter().map(|p| p.unwrap_or(0.0)).collect(),
        v.into_iter().map(|p| p.unwrap_or(0.0)).collect(),
    )
}
