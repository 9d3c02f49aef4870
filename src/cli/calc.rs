use std::process;

use bmi_calculator::{BmiResult, Config, OutputFormat, ValidationErrors, evaluate};
use serde_json::{Value, json};
use tracing::instrument;

use super::terminal::Styler;

/// Exit status when either input is rejected.
const INVALID_INPUT: i32 = 1;

#[derive(Debug, clap::Parser)]
#[command(about = "Calculate BMI from a weight and a height")]
pub struct Command {
    /// Body weight in kilograms (e.g. 70 or 70,5)
    #[arg(allow_hyphen_values = true)]
    weight: String,

    /// Height in metres (e.g. 1.75 or 1,75)
    #[arg(allow_hyphen_values = true)]
    height: String,

    /// Output format (text, json); defaults to the configured format
    #[arg(long, value_name = "FORMAT")]
    output: Option<OutputFormat>,
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let styler = Styler::new(config.color);
        let format = self.output.unwrap_or(config.output);

        match (evaluate(&self.weight, &self.height), format) {
            (Ok(result), OutputFormat::Text) => println!("{}", render_result(&result, styler)),
            (Ok(result), OutputFormat::Json) => {
                println!("{}", serde_json::to_string_pretty(&result_json(&result))?);
            }
            (Err(errors), OutputFormat::Text) => {
                eprintln!("{}", render_errors(&errors, styler));
                process::exit(INVALID_INPUT);
            }
            (Err(errors), OutputFormat::Json) => {
                println!("{}", serde_json::to_string_pretty(&errors_json(&errors))?);
                process::exit(INVALID_INPUT);
            }
        }

        Ok(())
    }
}

/// The value on one line and the category label on the next.
pub fn render_result(result: &BmiResult, styler: Styler) -> String {
    format!(
        "Your BMI: {:.1}\n{}",
        result.value(),
        styler.category(result.category())
    )
}

/// One inline message per rejected field.
pub fn render_errors(errors: &ValidationErrors, styler: Styler) -> String {
    errors
        .rejected()
        .map(|(field, reason)| styler.error(&reason.message(field)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn result_json(result: &BmiResult) -> Value {
    json!({
        "value": result.value(),
        "category": result.category(),
        "label": result.category().label(),
        "severity": result.severity_rank(),
    })
}

fn errors_json(errors: &ValidationErrors) -> Value {
    json!({
        "errors": {
            "weight": errors.weight,
            "height": errors.height,
        }
    })
}

#[cfg(test)]
mod tests {
    use bmi_calculator::InvalidReason;

    use super::*;

    #[test]
    fn text_shows_rounded_value_and_label() {
        let result = evaluate("70", "1.75").unwrap();
        assert_eq!(
            render_result(&result, Styler::plain()),
            "Your BMI: 22.9\nNormal weight"
        );
    }

    #[test]
    fn whole_values_keep_one_decimal() {
        let result = BmiResult::compute(25.0, 1.0);
        assert!(render_result(&result, Styler::plain()).starts_with("Your BMI: 25.0\n"));
    }

    #[test]
    fn errors_are_listed_per_field() {
        let errors = evaluate("", "abc").unwrap_err();
        assert_eq!(
            render_errors(&errors, Styler::plain()),
            "Enter your weight\nInvalid height"
        );
    }

    #[test]
    fn json_result() {
        let result = evaluate("120", "1,70").unwrap();
        assert_eq!(
            result_json(&result),
            json!({
                "value": 41.5,
                "category": "obesity_class_iii",
                "label": "Obesity class III",
                "severity": 5,
            })
        );
    }

    #[test]
    fn json_errors_use_codes() {
        let errors = ValidationErrors {
            weight: Some(InvalidReason::NonPositiveOrUnparseable),
            height: None,
        };
        assert_eq!(
            errors_json(&errors),
            json!({
                "errors": {
                    "weight": "non_positive_or_unparseable",
                    "height": null,
                }
            })
        );
    }
}
