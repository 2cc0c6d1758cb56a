use clap::{Parser, Subcommand};
use clap_complete::Shell;

use bmiplan::i18n::Locale;
use bmiplan::models::measurement::{HeightUnit, WeightUnit};

#[derive(Parser)]
#[command(name = "bmiplan", version, about = "BMI calculator and nutritional planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override the configured display language (en, es, pt)
    #[arg(long, global = true)]
    pub lang: Option<Locale>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize profile and data directory
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Compute BMI, category and health notes, and record it in history
    Bmi {
        /// Weight, in the configured (or --weight-unit) unit
        weight: String,

        /// Height, in the configured (or --height-unit) unit; defaults to the profile
        height: Option<String>,

        /// Age in years (2-120); defaults to the profile
        #[arg(long)]
        age: Option<String>,

        /// male, female or other; defaults to the profile
        #[arg(long)]
        gender: Option<String>,

        /// Unit of the weight argument
        #[arg(long)]
        weight_unit: Option<WeightUnit>,

        /// Unit of the height argument
        #[arg(long)]
        height_unit: Option<HeightUnit>,

        /// Do not append the result to history
        #[arg(long)]
        no_save: bool,
    },

    /// Compute BMR, TDEE, calorie target and macronutrients
    Plan {
        /// Weight in kg; defaults to the newest history entry
        #[arg(long)]
        weight: Option<String>,

        /// Height in cm; defaults to the profile
        #[arg(long)]
        height: Option<String>,

        /// Age in years; defaults to the profile
        #[arg(long)]
        age: Option<String>,

        /// male, female or other; defaults to the profile
        #[arg(long)]
        gender: Option<String>,

        /// sedentary, lightly, moderately, very or extra
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// loss, maintenance or gain
        #[arg(long, default_value = "maintenance")]
        goal: String,
    },

    /// Show or clear BMI history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Convert a displayed value to the other unit, rounded to one decimal
    Convert {
        /// weight or height
        quantity: String,
        /// Value to convert
        value: f64,
        /// Unit the value is in (kg, lb, cm, in)
        #[arg(long)]
        from: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recorded results, newest first
    Show {
        /// Number of recent entries to show
        #[arg(long)]
        last: Option<usize>,
    },
    /// Remove all recorded results
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. height, age, gender, units.weight, plan.gain_surplus, locale)
        key: String,
        /// Config value
        value: String,
    },
}
