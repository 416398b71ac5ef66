use std::env;
use std::process;

use coinchange::{CoinChangeSolver, Result};

fn report(solver: &CoinChangeSolver, coins: &[i64], amount: i64) -> Result<()> {
    println!("coins {:?}, amount {}", coins, amount);
    match solver.make_change(coins, amount)? {
        Some(change) => println!("  minimum coins: {} {:?}", change.len(), change),
        None => println!("  minimum coins: unreachable"),
    }
    println!("  combinations: {}", solver.count_ways(coins, amount)?);
    Ok(())
}

fn parse(args: &[String]) -> std::result::Result<(i64, Vec<i64>), String> {
    let (amount, coins) = args
        .split_first()
        .ok_or_else(|| "usage: coin_change <amount> <coin> [<coin> ...]".to_string())?;
    let amount = amount
        .parse::<i64>()
        .map_err(|e| format!("bad amount {:?}: {}", amount, e))?;
    let coins = coins
        .iter()
        .map(|c| c.parse::<i64>().map_err(|e| format!("bad coin {:?}: {}", c, e)))
        .collect::<std::result::Result<Vec<i64>, String>>()?;
    Ok((amount, coins))
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let solver = CoinChangeSolver::default();

    let runs = if args.is_empty() {
        vec![
            (5, vec![1, 2, 3]),
            (4, vec![1, 2, 3]),
            (10, vec![2, 5, 3, 6]),
            (10, vec![12]),
            (11, vec![5]),
        ]
    } else {
        match parse(&args) {
            Ok(run) => vec![run],
            Err(msg) => {
                eprintln!("{}", msg);
                process::exit(2);
            }
        }
    };

    for (amount, coins) in runs {
        if let Err(err) = report(&solver, &coins, amount) {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}
