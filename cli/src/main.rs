//! Sample console application for the argspec engine.
//!
//! Demonstrates the full pipeline end to end: a schema declared over a
//! plain struct, process arguments parsed into it, a JSON report dump,
//! rendered help, and exit codes distinguishing parse errors (1) from an
//! explicit help request (2).

use std::process::ExitCode;
use std::sync::LazyLock;

use argspec_core::{ArgProperty, Range, Schema, StringLength, Value, ValueKind};
use argspec_parser::{HelpGenerator, ParseReport, parse_args};
use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PersonType {
    #[default]
    Father,
    Mother,
    Child,
}

impl PersonType {
    const MEMBERS: [&'static str; 3] = ["Father", "Mother", "Child"];

    fn name(self) -> &'static str {
        match self {
            PersonType::Father => "Father",
            PersonType::Mother => "Mother",
            PersonType::Child => "Child",
        }
    }

    /// The converter hands the setter the member's declared spelling.
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Father" => Some(PersonType::Father),
            "Mother" => Some(PersonType::Mother),
            "Child" => Some(PersonType::Child),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct SampleApp {
    name: String,
    age: i64,
    birth_date: NaiveDate,
    occupation: String,
    person_type: PersonType,
    children: Vec<String>,
    help: bool,
    report: bool,
}

impl Default for SampleApp {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            birth_date: NaiveDate::default(),
            occupation: String::new(),
            person_type: PersonType::default(),
            children: Vec::new(),
            help: false,
            report: false,
        }
    }
}

// Build-once-then-freeze: the schema is shared read-only for the process
// lifetime. A build failure here is a broken declaration, not bad input.
static SCHEMA: LazyLock<Schema<SampleApp>> =
    LazyLock::new(|| build_schema().expect("sample schema must build"));

fn build_schema() -> Result<Schema<SampleApp>, argspec_core::SchemaError> {
    Schema::<SampleApp>::builder()
        .positional(["Name"])
        .property(
            ArgProperty::new(
                "Name",
                ValueKind::Str,
                |app: &SampleApp| Value::from(app.name.clone()),
                |app, v| {
                    if let Some(s) = v.as_str() {
                        app.name = s.to_string();
                    }
                },
            )
            .required()
            .describe("The person to greet."),
        )
        .property(
            ArgProperty::new(
                "Age",
                ValueKind::Int,
                |app: &SampleApp| Value::from(app.age),
                |app, v| app.age = v.as_int().unwrap_or_default(),
            )
            .describe("The person's age in years.")
            .rule(Range::new(0.0, 150.0)),
        )
        .property(
            ArgProperty::new(
                "BirthDate",
                ValueKind::Date,
                |app: &SampleApp| Value::from(app.birth_date),
                |app, v| {
                    if let Some(d) = v.as_date() {
                        app.birth_date = d;
                    }
                },
            )
            .describe("Birth date, used for the birthday countdown."),
        )
        .property(
            ArgProperty::new(
                "Occupation",
                ValueKind::Str,
                |app: &SampleApp| Value::from(app.occupation.clone()),
                |app, v| {
                    if let Some(s) = v.as_str() {
                        app.occupation = s.to_string();
                    }
                },
            )
            .alias("Job")
            .rule(StringLength::max(30)),
        )
        .property(
            ArgProperty::new(
                "PersonType",
                ValueKind::enumeration(PersonType::MEMBERS),
                |app: &SampleApp| Value::from(app.person_type.name()),
                |app, v| {
                    if let Some(t) = v.as_str().and_then(PersonType::from_name) {
                        app.person_type = t;
                    }
                },
            )
            .alias("Type")
            .show_in_usage(true)
            .describe("The person's role in the family."),
        )
        .property(
            ArgProperty::new(
                "Children",
                ValueKind::list(ValueKind::Str),
                |app: &SampleApp| Value::from(app.children.clone()),
                |app, v| {
                    if let Some(items) = v.as_string_list() {
                        app.children = items;
                    }
                },
            )
            .describe("Names of the person's children."),
        )
        .property(
            ArgProperty::new(
                "Help",
                ValueKind::Bool,
                |app: &SampleApp| Value::from(app.help),
                |app, v| app.help = v.as_bool().unwrap_or(false),
            )
            .alias("?")
            .describe("Show this help."),
        )
        .property(
            ArgProperty::new(
                "Report",
                ValueKind::Bool,
                |app: &SampleApp| Value::from(app.report),
                |app, v| app.report = v.as_bool().unwrap_or(false),
            )
            .describe("Dump the parse report as JSON and exit."),
        )
        .build()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("ARGSPEC_LOG").unwrap_or_else(|_| "warn".to_string()))
        .init();

    let mut results = parse_args(&SCHEMA, std::env::args().skip(1));
    results.report.application_file_name = application_file_name();
    results.report.title = Some("Argspec Sample".to_string());
    results.report.description = Some(env!("CARGO_PKG_DESCRIPTION").to_string());
    results.report.copyright = Some("(c) 2026 the argspec authors".to_string());

    if results.target.report {
        return dump_report(&results.report);
    }

    // Errors are shown only after checking for an explicit help request,
    // so asking for help never displays them.
    if results.target.help || results.report.has_errors() {
        print_banner(&results.report);
        let generator = HelpGenerator::new(&results.report);
        print!("{}", generator.render());
        return if results.target.help {
            ExitCode::from(2)
        } else {
            ExitCode::from(1)
        };
    }

    print_banner(&results.report);
    run(&results.target)
}

fn run(app: &SampleApp) -> ExitCode {
    debug!(name = %app.name, "starting sample app");

    let mut line = format!("Hello, {}", app.name);
    if !app.occupation.is_empty() {
        line.push_str(&format!(" the {}", app.occupation));
    }
    line.push_str(&format!(" ({})!", app.person_type.name()));
    println!("{line}");

    if !app.children.is_empty() {
        println!("Children: {}", app.children.join(", "));
    }

    if app.birth_date != NaiveDate::default() {
        let today = Local::now().date_naive();
        if app.birth_date.month() == today.month() && app.birth_date.day() == today.day() {
            println!("Happy birthday {}!!!", app.name);
        } else {
            let mut next = app.birth_date.with_year(today.year()).unwrap_or(today);
            if next < today {
                next = next.with_year(today.year() + 1).unwrap_or(next);
            }
            println!(
                "Only {} days until your birthday!",
                (next - today).num_days()
            );
        }
    }

    ExitCode::SUCCESS
}

fn dump_report(report: &ParseReport) -> ExitCode {
    match serde_json::to_string_pretty(report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialize report: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_banner(report: &ParseReport) {
    if let Some(title) = &report.title {
        println!("{title}");
    }
    if let Some(description) = &report.description {
        println!("{description}");
    }
    if let Some(copyright) = &report.copyright {
        println!("{copyright}");
    }
    println!();
}

fn application_file_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "argspec-sample".to_string())
}
