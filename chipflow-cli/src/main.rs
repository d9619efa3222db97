use anyhow::{anyhow, Result};
use chipflow_table::{parse_chips, Table};
use chipflow_transport::{Difficulty, Instance};
use clap::{arg, Command};
use serde_json::json;
use std::{fs, io::Read};

fn cli() -> Command {
    Command::new("chipflow")
        .about("Balances poker tables and solves transportation instances")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("balance")
                .about("Computes the minimum chip moves to even out a table")
                .arg(
                    arg!(<CHIPS> "Chips string (e.g. \"chips: [1, 2, 3, 6]\"), or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves a balanced transportation instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random balanced instance")
                .arg(arg!(<SEED> "Seed value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(<DIFFICULTY> "Difficulty as 'num_suppliers,num_consumers,max_quantity'")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("balance", sub_m)) => balance(sub_m.get_one::<String>("CHIPS").unwrap().clone()),
        Some(("solve", sub_m)) => solve(sub_m.get_one::<String>("INSTANCE").unwrap().clone()),
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            sub_m.get_one::<String>("DIFFICULTY").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn balance(chips: String) -> Result<()> {
    let input = if chips == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer.trim_end().to_string()
    } else {
        chips
    };

    let table = Table::new(parse_chips(&input)?);
    let outcome = table.min_moves_to_equilibrium();
    let moves = outcome.moves();
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "outcome": outcome,
            "moves": moves,
        }))?
    );
    Ok(())
}

fn solve(instance: String) -> Result<()> {
    let instance = load_instance(&instance)?;
    let (plan, total_cost) = instance.solve();

    let allocations: Vec<_> = plan
        .allocated_cells()
        .map(|(supplier, consumer, quantity)| {
            json!({
                "supplier": supplier,
                "consumer": consumer,
                "quantity": quantity,
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "total_cost": total_cost,
            "allocations": allocations,
        }))?
    );
    Ok(())
}

fn generate(seed: u64, difficulty: String) -> Result<()> {
    let parts = difficulty
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<i32>, _>>()
        .map_err(|_| anyhow!("Difficulty must be 'num_suppliers,num_consumers,max_quantity'"))?;
    if parts.len() != 3 {
        return Err(anyhow!(
            "Difficulty must be 'num_suppliers,num_consumers,max_quantity'"
        ));
    }

    let mut seed_bytes = [0u8; 32];
    seed_bytes[..8].copy_from_slice(&seed.to_be_bytes());
    let instance = Instance::generate(&seed_bytes, &Difficulty::from(parts))?;
    println!("{}", serde_json::to_string_pretty(&instance)?);
    Ok(())
}

fn load_instance(instance: &str) -> Result<Instance> {
    let content = if instance.ends_with(".json") {
        fs::read_to_string(instance)
            .map_err(|e| anyhow!("Failed to read instance file '{}': {}", instance, e))?
    } else {
        instance.to_string()
    };
    serde_json::from_str(&content).map_err(|e| anyhow!("Failed to parse instance: {}", e))
}
