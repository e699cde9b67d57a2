//! CLI driver for the interest-matching library.
//!
//! Mirrors the modes of the original batch tool: inspect the catalog, resolve
//! a single interest, and append to / list the optional SQLite store.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use eduplatform::catalog::Catalog;
use eduplatform::interest::{InterestDbManager, RegistrationForm, SelectionField};
use eduplatform::matching::InterestMatcher;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "eduplatform", version, about = "Course-interest registration and matching")]
struct Cli {
    /// Path to a catalog JSON file (defaults to the builtin catalog)
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the reference lists and catalog statistics
    Catalog,

    /// Resolve one interest: availability first, recommendations as fallback
    Resolve {
        #[arg(long)]
        course: String,
        /// Preferred unit (repeatable)
        #[arg(long = "unit", value_name = "UNIT", required = true)]
        units: Vec<String>,
        /// Preferred weekday (repeatable)
        #[arg(long = "day", value_name = "DAY", required = true)]
        days: Vec<String>,
        /// Preferred shift (repeatable)
        #[arg(long = "shift", value_name = "SHIFT", required = true)]
        shifts: Vec<String>,
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate an interest and append it to the store
    Register {
        #[arg(long)]
        course: String,
        #[arg(long = "unit", value_name = "UNIT", required = true)]
        units: Vec<String>,
        #[arg(long = "day", value_name = "DAY", required = true)]
        days: Vec<String>,
        #[arg(long = "shift", value_name = "SHIFT", required = true)]
        shifts: Vec<String>,
        /// SQLite store path
        #[arg(long, value_name = "PATH")]
        db: PathBuf,
    },

    /// List interests in the store, with their match reports
    List {
        /// SQLite store path
        #[arg(long, value_name = "PATH")]
        db: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Catalog => print_catalog(&catalog),
        Command::Resolve {
            course,
            units,
            days,
            shifts,
            json,
        } => {
            let interest = build_interest(&catalog, &course, &units, &days, &shifts)?;
            let matcher = InterestMatcher::new(catalog);
            let report = matcher.report(&interest);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Register {
            course,
            units,
            days,
            shifts,
            db,
        } => {
            let interest = build_interest(&catalog, &course, &units, &days, &shifts)?;
            let store = InterestDbManager::new(
                db.to_str().context("store path is not valid UTF-8")?,
            )?;
            store.append(&interest)?;
            info!(id = %interest.id, course = %interest.course_name, "interest registered");
            println!("Registered interest {} for \"{}\"", interest.id, interest.course_name);
        }
        Command::List { db, json } => {
            let store = InterestDbManager::new(
                db.to_str().context("store path is not valid UTF-8")?,
            )?;
            let interests = store.load_all()?;
            let matcher = InterestMatcher::new(catalog);

            if json {
                let reports: Vec<_> = interests.iter().map(|i| matcher.report(i)).collect();
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else if interests.is_empty() {
                println!("No interests registered.");
            } else {
                for interest in &interests {
                    let report = matcher.report(interest);
                    println!(
                        "{}  {}  (registered {})",
                        interest.id,
                        interest.course_name,
                        interest.registered_at.format("%Y-%m-%d %H:%M")
                    );
                    print_report(&report);
                    println!();
                }
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&std::path::Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_path(path)
            .map_err(|e| anyhow!("failed to load catalog from {}: {e}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

/// Runs the selections through the registration form so they get the same
/// validation as interactive submission.
fn build_interest(
    catalog: &Catalog,
    course: &str,
    units: &[String],
    days: &[String],
    shifts: &[String],
) -> Result<eduplatform::CourseInterest> {
    let mut form = RegistrationForm::new(course);
    for unit in units {
        form.toggle(SelectionField::Unit, unit, catalog)?;
    }
    for day in days {
        form.toggle(SelectionField::Day, day, catalog)?;
    }
    for shift in shifts {
        form.toggle(SelectionField::Shift, shift, catalog)?;
    }
    Ok(form.submit()?)
}

fn print_catalog(catalog: &Catalog) {
    println!("Units:");
    for unit in catalog.units() {
        println!("  {unit}");
    }
    println!("Days:");
    for day in catalog.days() {
        println!("  {day}");
    }
    println!("Shifts:");
    for shift in catalog.shifts() {
        println!("  {shift}");
    }
    println!(
        "{} availability slot(s), {} similar-course offering(s)",
        catalog.slot_count(),
        catalog.offerings().len()
    );
}

fn print_report(report: &eduplatform::InterestReport) {
    match report.availability.slot() {
        Some(slot) => {
            println!("  Class available: {} / {} - {}", slot.unit, slot.day, slot.shift);
            println!(
                "  Starts {}, enroll by {}",
                slot.start_date, slot.enroll_deadline
            );
        }
        None => {
            let unit = report.interest.first_unit().unwrap_or("the selected units");
            println!("  No class at {unit} matches the selected days and shifts.");
            if report.recommendations.is_empty() {
                println!("  No similar courses to suggest.");
            } else {
                println!("  Similar courses:");
                for offering in &report.recommendations {
                    println!(
                        "    {} ({}): {} ({:.1} km), {} - {}, starts {}, enroll by {}",
                        offering.name,
                        offering.code,
                        offering.unit,
                        offering.distance_km,
                        offering.day,
                        offering.shift,
                        offering.start_date,
                        offering.enroll_deadline
                    );
                }
            }
        }
    }
}
