use bmi_calculator::{Category, Config, OutputFormat};
use serde_json::{Value, json};
use tracing::instrument;

use super::terminal::{Styler, is_narrow};

#[derive(Debug, Default, clap::Parser)]
#[command(about = "Show the BMI categories and their ranges")]
pub struct Command {
    /// Output format (text, json); defaults to the configured format
    #[arg(long, value_name = "FORMAT")]
    output: Option<OutputFormat>,
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        match self.output.unwrap_or(config.output) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scale_json())?),
            OutputFormat::Text => {
                let styler = Styler::new(config.color);
                println!("{}", render_scale(styler, is_narrow()));
            }
        }
        Ok(())
    }
}

/// Half-open range of a category, e.g. `18.5 to < 25`.
fn range(category: Category) -> String {
    match (category.lower_bound(), category.upper_bound()) {
        (None, Some(upper)) => format!("< {upper}"),
        (Some(lower), Some(upper)) => format!("{lower} to < {upper}"),
        (Some(lower), None) => format!(">= {lower}"),
        (None, None) => "any".to_string(),
    }
}

fn render_scale(styler: Styler, narrow: bool) -> String {
    let mut lines = Vec::with_capacity(Category::ALL.len() + 1);
    if !narrow {
        lines.push(styler.dim(&format!("{:<14} Category", "BMI")));
    }
    for category in Category::ALL {
        let bounds = range(category);
        if narrow {
            lines.push(format!("{bounds}: {}", styler.category(category)));
        } else {
            lines.push(format!("{bounds:<14} {}", styler.category(category)));
        }
    }
    lines.join("\n")
}

fn scale_json() -> Value {
    let categories: Vec<_> = Category::ALL
        .into_iter()
        .map(|category| {
            json!({
                "category": category,
                "label": category.label(),
                "severity": category.severity(),
                "lower": category.lower_bound(),
                "upper": category.upper_bound(),
            })
        })
        .collect();
    json!({ "categories": categories })
}
