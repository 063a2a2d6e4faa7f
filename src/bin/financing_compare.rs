//! Command-line front end for the financing comparison
//!
//! Examples:
//!   financing_compare compare --principal 50000 --term 60
//!   financing_compare grid --principal 50000 --output grid.csv
//!   financing_compare schedule --principal 50000 --term 60 --output schedule.csv

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use financing_comparator::{
    schedule::write_schedule_csv, payment_schedule, ComparatorConfig, Comparator, ComparisonResult,
};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "financing_compare", about = "Compare flat-rate financing against a bank loan")]
struct Cli {
    /// JSON file overriding rates, principal bounds, terms or labels
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare both plans for one principal and term
    Compare {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        term: u32,
        /// Print the raw comparison as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare one principal across every allowed term
    Grid {
        #[arg(long)]
        principal: f64,
        /// CSV output path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Month-by-month installments of both plans
    Schedule {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        term: u32,
        /// CSV output path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// One CSV line of the term grid
#[derive(Debug, Serialize)]
struct GridRow {
    term_months: u32,
    flat_monthly_payment: f64,
    flat_total_amount: f64,
    flat_financing_cost: f64,
    bank_monthly_payment: f64,
    bank_total_amount: f64,
    bank_financing_cost: f64,
    monthly_payment_delta: f64,
    total_savings: f64,
    recommended_option: String,
}

impl From<&ComparisonResult> for GridRow {
    fn from(r: &ComparisonResult) -> Self {
        Self {
            term_months: r.term_months,
            flat_monthly_payment: r.option_a.monthly_payment,
            flat_total_amount: r.option_a.total_amount,
            flat_financing_cost: r.option_a.financing_cost,
            bank_monthly_payment: r.option_b.monthly_payment,
            bank_total_amount: r.option_b.total_amount,
            bank_financing_cost: r.option_b.financing_cost,
            monthly_payment_delta: r.monthly_payment_delta,
            total_savings: r.total_savings,
            recommended_option: format!("{:?}", r.recommended_option),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ComparatorConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ComparatorConfig::default(),
    };
    let comparator = Comparator::new(config);

    match cli.command {
        Command::Compare { principal, term, json } => {
            let result = comparator.compare(principal, term)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_comparison(&result);
            }
        }
        Command::Grid { principal, output } => {
            let start = Instant::now();
            let results = comparator.compare_all_terms(principal);
            let rows = results
                .iter()
                .map(|r| r.as_ref().map(GridRow::from).map_err(Clone::clone))
                .collect::<Result<Vec<_>, _>>()?;
            log::info!("compared {} terms in {:?}", rows.len(), start.elapsed());

            let mut writer = csv::Writer::from_writer(open_output(output.as_ref())?);
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        Command::Schedule { principal, term, output } => {
            let result = comparator.compare(principal, term)?;
            let rows = payment_schedule(&result);
            write_schedule_csv(&rows, open_output(output.as_ref())?)?;
            if let Some(path) = output {
                println!("Schedule written to {}", path.display());
            }
        }
    }

    Ok(())
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    })
}

fn print_comparison(r: &ComparisonResult) {
    println!("Principal ${:.2} over {} months", r.principal, r.term_months);
    println!();
    println!("{:<20} {:>14} {:>14} {:>14} {:>8}",
             "Plan", "Monthly", "Total", "Cost", "Rate%");
    for option in [&r.option_a, &r.option_b] {
        println!("{:<20} {:>14.2} {:>14.2} {:>14.2} {:>8.2}",
                 option.label,
                 option.monthly_payment,
                 option.total_amount,
                 option.financing_cost,
                 option.annual_rate);
    }
    println!();
    println!("Monthly payment difference: {:.2}", r.monthly_payment_delta);
    println!("Financing cost difference:  {:.2}", r.total_cost_delta);
    println!("Total savings:              {:.2}", r.total_savings);
    println!("Recommended: {:?}", r.recommended_option);
}
