//! Risk Assessment CLI Tool
//!
//! Run any of the four health risk scorers from the command line, or
//! assess a JSON-encoded request produced by another layer.
//!
//! Usage:
//!   risk-assess diabetes --age 52 --weight-kg 88 --height-m 1.75 ...
//!   risk-assess cardio --age 60 --gender male --cholesterol 220 ...
//!   risk-assess from-json <file.json|->
//!   risk-assess trend --seed 42        (requires the `demo` feature)

use clap::{Parser, Subcommand};
use health_risk_core::*;
use std::fs;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "risk-assess")]
#[command(version = "0.1.0")]
#[command(about = "Deterministic health risk scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Diabetes risk (FINDRISC-style point score)
    Diabetes {
        #[arg(long)]
        age: u32,
        #[arg(long)]
        weight_kg: f64,
        #[arg(long)]
        height_m: f64,
        #[arg(long)]
        waist_cm: u32,
        /// Days per week with physical activity (0-7)
        #[arg(long)]
        activity: u32,
        /// Family history of diabetes
        #[arg(long)]
        family_history: bool,
        /// Fasting blood glucose in mg/dL
        #[arg(long)]
        glucose: u32,
        /// HbA1c percentage (collected, not scored)
        #[arg(long, default_value = "5.5")]
        hba1c: f64,
    },

    /// Cardiovascular 10-year risk (percentage)
    Cardio {
        #[arg(long)]
        age: u32,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Total cholesterol in mg/dL
        #[arg(long)]
        cholesterol: u32,
        /// HDL cholesterol in mg/dL
        #[arg(long)]
        hdl: u32,
        /// Systolic blood pressure in mmHg
        #[arg(long)]
        systolic_bp: u32,
        #[arg(long)]
        smoker: bool,
        #[arg(long)]
        diabetes: bool,
    },

    /// Oncology risk (point score)
    Oncology {
        #[arg(long)]
        age: u32,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Family history of cancer
        #[arg(long)]
        family_history: bool,
        /// Cumulative smoking exposure in pack-years
        #[arg(long)]
        pack_years: u32,
        /// Alcohol consumption in drinks per week
        #[arg(long)]
        alcohol: u32,
        #[arg(long)]
        bmi: f64,
        /// Days per week with physical activity (0-7)
        #[arg(long)]
        activity: u32,
    },

    /// Ocular risk (point score)
    Ocular {
        #[arg(long)]
        diabetes: bool,
        /// HbA1c percentage; scored only with --diabetes
        #[arg(long, default_value = "5.5")]
        hba1c: f64,
        /// Years since diabetes diagnosis; scored only with --diabetes
        #[arg(long, default_value = "0")]
        years_with_diabetes: u32,
        /// Intraocular pressure in mmHg
        #[arg(long)]
        pressure: u32,
        /// Family history of glaucoma
        #[arg(long)]
        family_history: bool,
        #[arg(long)]
        hypertension: bool,
    },

    /// Assess a JSON-encoded request: {"category": "diabetes", ...}
    FromJson {
        /// Path to a JSON file, or '-' for stdin
        input: String,
    },

    /// Emit seeded demo trend data as JSON
    #[cfg(feature = "demo")]
    Trend {
        /// Seed for the deterministic random walk
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let request = match cli.command {
        Commands::Diabetes {
            age,
            weight_kg,
            height_m,
            waist_cm,
            activity,
            family_history,
            glucose,
            hba1c,
        } => AssessmentRequest::Diabetes(DiabetesInput {
            age,
            weight_kg,
            height_m,
            waist_cm,
            activity_days_per_week: activity,
            family_history,
            fasting_glucose_mg_dl: glucose,
            hba1c_percent: hba1c,
        }),

        Commands::Cardio {
            age,
            gender,
            cholesterol,
            hdl,
            systolic_bp,
            smoker,
            diabetes,
        } => AssessmentRequest::Cardiovascular(CardiovascularInput {
            age,
            gender: gender.parse()?,
            total_cholesterol_mg_dl: cholesterol,
            hdl_mg_dl: hdl,
            systolic_bp_mm_hg: systolic_bp,
            is_smoker: smoker,
            has_diabetes: diabetes,
        }),

        Commands::Oncology {
            age,
            gender,
            family_history,
            pack_years,
            alcohol,
            bmi,
            activity,
        } => AssessmentRequest::Oncology(OncologyInput {
            age,
            gender: gender.parse()?,
            family_history,
            smoking_pack_years: pack_years,
            alcohol_drinks_per_week: alcohol,
            bmi,
            activity_days_per_week: activity,
        }),

        Commands::Ocular {
            diabetes,
            hba1c,
            years_with_diabetes,
            pressure,
            family_history,
            hypertension,
        } => AssessmentRequest::Ocular(OcularInput {
            has_diabetes: diabetes,
            hba1c_percent: hba1c,
            years_with_diabetes,
            intraocular_pressure_mm_hg: pressure,
            family_history_glaucoma: family_history,
            has_hypertension: hypertension,
        }),

        Commands::FromJson { input } => {
            let json = read_input(&input)?;
            serde_json::from_str::<AssessmentRequest>(&json)?
        }

        #[cfg(feature = "demo")]
        Commands::Trend { seed } => {
            let points = health_risk_core::trend::demo_trend(seed);
            println!("{}", serde_json::to_string_pretty(&points)?);
            return Ok(());
        }
    };

    request.validate()?;
    let result = request.assess();

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "text" => {
            println!("Category: {}", request.category());
            println!("Risk Score: {}", result.score);
            println!("Classification: {}", result.display_label);
            println!("Interpretation: {}", result.classification.description());
        }
        other => return Err(format!("Unknown format: '{}'", other).into()),
    }

    Ok(())
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}
