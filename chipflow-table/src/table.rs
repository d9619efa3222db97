use chipflow_transport::{build_base_plan, optimize_plan, plan_cost, CostMatrix};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Outcome of balancing a table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Equilibrium {
    /// The total chip count does not divide evenly across the seats.
    Impossible,
    /// Every seat already holds the same amount.
    AlreadyBalanced,
    /// Minimum number of single-chip moves that evens out the table.
    Moves(i64),
}

impl Equilibrium {
    /// Move count, zero when balancing is impossible or already done.
    pub fn moves(&self) -> i64 {
        match self {
            Equilibrium::Moves(moves) => *moves,
            _ => 0,
        }
    }
}

/// A poker table described by the chip count at each seat, in seat order
/// around the table.
#[derive(Debug, Clone)]
pub struct Table {
    chips: Vec<i64>,
}

impl Table {
    pub fn new(chips: Vec<i64>) -> Self {
        Self { chips }
    }

    /// Chips can be evened out only when they divide evenly across seats.
    pub fn equilibrium_possible(&self) -> bool {
        !self.chips.is_empty() && self.chips.iter().sum::<i64>() % self.chips.len() as i64 == 0
    }

    /// Minimum number of moves to bring every seat to the equilibrium point,
    /// where one move carries one chip to an adjacent seat.
    ///
    /// Seats above the equilibrium supply their excess, seats below it
    /// consume their deficit, and the cost of a supplier/consumer pair is the
    /// shorter of the clockwise and counter-clockwise seat distances. The
    /// reduction is a balanced transportation problem by construction, so the
    /// optimized plan cost is exactly the move count.
    pub fn min_moves_to_equilibrium(&self) -> Equilibrium {
        if !self.equilibrium_possible() {
            return Equilibrium::Impossible;
        }
        if self.chips.iter().max() == self.chips.iter().min() {
            return Equilibrium::AlreadyBalanced;
        }

        let seats = self.chips.len() as i64;
        let equilibrium = self.chips.iter().sum::<i64>() / seats;

        let mut suppliers: Vec<(usize, f64)> = Vec::new();
        let mut consumers: Vec<(usize, f64)> = Vec::new();
        for (seat, &chips) in self.chips.iter().enumerate() {
            if chips > equilibrium {
                suppliers.push((seat, (chips - equilibrium) as f64));
            }
            if chips < equilibrium {
                consumers.push((seat, (equilibrium - chips) as f64));
            }
        }

        let costs: CostMatrix =
            Array2::from_shape_fn((suppliers.len(), consumers.len()), |(i, j)| {
                let gap = (suppliers[i].0 as i64 - consumers[j].0 as i64).abs();
                gap.min(seats - gap)
            });
        let supplies: Vec<f64> = suppliers.iter().map(|&(_, excess)| excess).collect();
        let demands: Vec<f64> = consumers.iter().map(|&(_, deficit)| deficit).collect();

        let mut plan = build_base_plan(&costs, &supplies, &demands);
        optimize_plan(&costs, &mut plan);
        Equilibrium::Moves(plan_cost(&costs, &plan))
    }
}
