use crate::plan::{CostMatrix, Plan};

/// Total cost of a plan: `sum(cost * quantity)` over the allocated cells,
/// with each quantity truncated to an integer first.
pub fn plan_cost(costs: &CostMatrix, plan: &Plan) -> i64 {
    plan.allocated_cells()
        .map(|(i, j, quantity)| costs[[i, j]] * quantity as i64)
        .sum()
}
