mod cli;
mod cmd;

use bmiplan::core::plan::PlanError;
use bmiplan::core::validate::ValidationError;
use bmiplan::i18n::Translate;
use bmiplan::output;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, HistoryAction};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let (name, result) = match cli.command {
        Commands::Init { skip } => ("init", cmd::init::run(skip)),
        Commands::Bmi {
            weight,
            height,
            age,
            gender,
            weight_unit,
            height_unit,
            no_save,
        } => (
            "bmi",
            cmd::bmi::run(
                cmd::bmi::BmiArgs {
                    weight: &weight,
                    height: height.as_deref(),
                    age: age.as_deref(),
                    gender: gender.as_deref(),
                    weight_unit,
                    height_unit,
                    save: !no_save,
                },
                cli.lang,
                cli.human,
            ),
        ),
        Commands::Plan {
            weight,
            height,
            age,
            gender,
            activity,
            goal,
        } => (
            "plan",
            cmd::plan::run(
                cmd::plan::PlanArgs {
                    weight: weight.as_deref(),
                    height: height.as_deref(),
                    age: age.as_deref(),
                    gender: gender.as_deref(),
                    activity: &activity,
                    goal: &goal,
                },
                cli.lang,
                cli.human,
            ),
        ),
        Commands::History { action } => match action {
            HistoryAction::Show { last } => ("history", cmd::history::run_show(last, cli.lang, cli.human)),
            HistoryAction::Clear => ("history", cmd::history::run_clear(cli.lang, cli.human)),
        },
        Commands::Convert {
            quantity,
            value,
            from,
        } => ("convert", cmd::convert::run(&quantity, value, &from, cli.human)),
        Commands::Config { action } => match action {
            ConfigAction::Show => ("config", cmd::config::run_show(cli.human)),
            ConfigAction::Set { key, value } => ("config", cmd::config::run_set(&key, &value)),
        },
        Commands::Completions { shell } => ("completions", cmd::completions::run(shell)),
    };

    if let Err(e) = result {
        let tr = cmd::catalog(cli.lang);
        let (code, message, data) = if let Some(v) = e.downcast_ref::<ValidationError>() {
            let message: Vec<String> = v
                .flags
                .message_tags()
                .iter()
                .map(|t| tr.translate(t))
                .collect();
            let flags = serde_json::to_value(v.flags).unwrap_or_default();
            ("validation_error", message.join(" "), flags)
        } else if let Some(p) = e.downcast_ref::<PlanError>() {
            (p.code(), tr.translate(p.tag()), serde_json::Value::Null)
        } else {
            ("general_error", e.to_string(), serde_json::Value::Null)
        };

        if cli.human {
            eprintln!("error: {}", message);
        } else {
            let err = output::error_with_data(name, code, &message, data);
            eprintln!("{}", err);
        }
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bmiplan=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
