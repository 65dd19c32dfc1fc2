//! Judge a person against a bundled rule set

use std::path::Path;

use spec::output::{EvaluationReport, OutputMode};
use spec::rules::{self, Person};
use spec::{Conjunction, RulesConfig};

/// Check a person against the vampire rules
pub fn vampire(
    config: Option<&Path>,
    age: u32,
    mortal: bool,
    diet: Vec<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = RulesConfig::load(config)?;
    let person = Person {
        age,
        mortal,
        diet,
        ..Person::default()
    };
    judge("vampire", &rules::vampire(&config.vampire), &person, mode)
}

/// Check a person against the scholar rules
pub fn scholar(
    config: Option<&Path>,
    name: String,
    age: u32,
    mortal: bool,
    birth_year: i32,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = RulesConfig::load(config)?;
    let person = Person {
        name,
        age,
        mortal,
        birth_year,
        ..Person::default()
    };
    judge("scholar", &rules::scholar(&config.scholar), &person, mode)
}

fn judge(
    rules: &str,
    conjunction: &Conjunction<Person>,
    person: &Person,
    mode: OutputMode,
) -> anyhow::Result<()> {
    log::debug!("evaluating {person} against {rules}: {conjunction:?}");

    let evaluation = conjunction.evaluate(person);
    let report = EvaluationReport::new(rules, person.to_string(), &evaluation);
    report.render(mode);

    if !report.satisfied {
        log::info!("{} of {} {rules} rule(s) failed", report.failed(), report.verdicts.len());
        std::process::exit(1);
    }

    Ok(())
}
