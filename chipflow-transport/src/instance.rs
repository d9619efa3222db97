use crate::base_plan::build_base_plan;
use crate::cost::plan_cost;
use crate::plan::{CostMatrix, Plan};
use crate::potentials::optimize_plan;
use anyhow::{anyhow, Result};
use ndarray::Array2;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use statrs::function::erf::{erf, erf_inv};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Difficulty {
    pub num_suppliers: usize,
    pub num_consumers: usize,
    pub max_quantity: u32,
}

impl From<Vec<i32>> for Difficulty {
    fn from(arr: Vec<i32>) -> Self {
        Self {
            num_suppliers: arr[0] as usize,
            num_consumers: arr[1] as usize,
            max_quantity: arr[2] as u32,
        }
    }
}

impl Into<Vec<i32>> for Difficulty {
    fn into(self) -> Vec<i32> {
        vec![
            self.num_suppliers as i32,
            self.num_consumers as i32,
            self.max_quantity as i32,
        ]
    }
}

/// A balanced transportation instance: per-pair costs plus supply and demand
/// quantities with equal totals.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Instance {
    pub seed: [u8; 32],
    pub costs: Vec<Vec<i64>>,
    pub supplies: Vec<f64>,
    pub demands: Vec<f64>,
}

impl Instance {
    /// Generates a random balanced instance. Costs are drawn from a truncated
    /// normal over the grid scale, quantities uniformly from
    /// `[1, max_quantity]`; the lighter side's last entry is topped up so
    /// total supply equals total demand.
    pub fn generate(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        if difficulty.num_suppliers == 0 || difficulty.num_consumers == 0 {
            return Err(anyhow!(
                "Instance must have at least one supplier and one consumer"
            ));
        }
        if difficulty.max_quantity == 0 {
            return Err(anyhow!("max_quantity must be positive"));
        }

        let mut rng = SmallRng::from_seed(seed.clone());

        let cost_scale = (difficulty.num_suppliers + difficulty.num_consumers) as f64;
        let costs: Vec<Vec<i64>> = (0..difficulty.num_suppliers)
            .map(|_| {
                (0..difficulty.num_consumers)
                    .map(|_| {
                        truncated_normal_sample(
                            &mut rng,
                            cost_scale / 2.0,
                            cost_scale / 4.0,
                            0.0,
                            cost_scale,
                        )
                        .round() as i64
                    })
                    .collect()
            })
            .collect();

        let mut supplies: Vec<f64> = (0..difficulty.num_suppliers)
            .map(|_| rng.gen_range(1..=difficulty.max_quantity) as f64)
            .collect();
        let mut demands: Vec<f64> = (0..difficulty.num_consumers)
            .map(|_| rng.gen_range(1..=difficulty.max_quantity) as f64)
            .collect();

        let total_supply: f64 = supplies.iter().sum();
        let total_demand: f64 = demands.iter().sum();
        if total_supply < total_demand {
            *supplies.last_mut().unwrap() += total_demand - total_supply;
        } else {
            *demands.last_mut().unwrap() += total_supply - total_demand;
        }

        Ok(Instance {
            seed: seed.clone(),
            costs,
            supplies,
            demands,
        })
    }

    pub fn cost_matrix(&self) -> CostMatrix {
        Array2::from_shape_fn((self.supplies.len(), self.demands.len()), |(i, j)| {
            self.costs[i][j]
        })
    }

    /// Runs the three solver stages and returns the optimized plan with its
    /// total cost.
    pub fn solve(&self) -> (Plan, i64) {
        let costs = self.cost_matrix();
        let mut plan = build_base_plan(&costs, &self.supplies, &self.demands);
        optimize_plan(&costs, &mut plan);
        let total_cost = plan_cost(&costs, &plan);
        (plan, total_cost)
    }
}

fn truncated_normal_sample<T: Rng>(
    rng: &mut T,
    mean: f64,
    std_dev: f64,
    min_val: f64,
    max_val: f64,
) -> f64 {
    let cdf_min = 0.5 * (1.0 + erf((min_val - mean) / (std_dev * (2.0_f64).sqrt())));
    let cdf_max = 0.5 * (1.0 + erf((max_val - mean) / (std_dev * (2.0_f64).sqrt())));
    let sample = rng.gen::<f64>() * (cdf_max - cdf_min) + cdf_min;
    mean + std_dev * (2.0_f64).sqrt() * erf_inv(2.0 * sample - 1.0)
}
