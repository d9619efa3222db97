use crate::plan::{CostMatrix, Plan};

/// Builds an initial feasible plan with the greedy minimum-cost method.
///
/// Assumes a balanced problem: total supply equals total demand (the caller
/// guarantees this). Each step picks the cheapest cell whose supplier and
/// consumer are both still open, preferring on cost ties the cell with the
/// larger supply-minus-demand margin, allocates as much as fits, and closes
/// the exhausted axis. A supplier whose remaining quantity hits zero without
/// being closed stays eligible, so the result may carry zero-quantity cells
/// and an over- or under-populated basis; the optimizer tolerates both.
pub fn build_base_plan(costs: &CostMatrix, supplies: &[f64], demands: &[f64]) -> Plan {
    let mut plan = Plan::empty(supplies.len(), demands.len());
    let mut remaining_supply: Vec<Option<f64>> = supplies.iter().copied().map(Some).collect();
    let mut remaining_demand: Vec<Option<f64>> = demands.iter().copied().map(Some).collect();

    loop {
        // cheapest open cell, ties broken by the larger margin
        let mut best: Option<(usize, usize, i64, f64)> = None;
        for (i, supply) in remaining_supply.iter().enumerate() {
            let Some(supply) = supply else { continue };
            for (j, demand) in remaining_demand.iter().enumerate() {
                let Some(demand) = demand else { continue };
                let cost = costs[[i, j]];
                let margin = supply - demand;
                let better = match best {
                    None => true,
                    Some((_, _, best_cost, best_margin)) => {
                        cost < best_cost || (cost == best_cost && margin > best_margin)
                    }
                };
                if better {
                    best = Some((i, j, cost, margin));
                }
            }
        }

        let Some((i, j, _, _)) = best else { break };
        let supply = remaining_supply[i].unwrap_or(0.0);
        let demand = remaining_demand[j].unwrap_or(0.0);
        if supply >= demand {
            plan.allocate(i, j, demand);
            remaining_supply[i] = Some(supply - demand);
            remaining_demand[j] = None;
        } else {
            plan.allocate(i, j, supply);
            remaining_demand[j] = Some(demand - supply);
            remaining_supply[i] = None;
        }
    }

    plan
}
