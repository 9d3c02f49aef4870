use bmi_calculator::{BmiForm, Config, Field};
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use tracing::{info, instrument};

use super::{calc::render_result, terminal::Styler};

#[derive(Debug, Default, clap::Parser)]
#[command(about = "Fill in the BMI form interactively (default)")]
pub struct Command {}

impl Command {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let styler = Styler::new(config.color);
        let theme = ColorfulTheme::default();
        let mut form = BmiForm::new();

        println!("{}", styler.heading("BMI Calculator"));

        loop {
            for field in fields_to_prompt(&form) {
                let text: String = Input::with_theme(&theme)
                    .with_prompt(field.prompt())
                    .with_initial_text(form.text(field))
                    .allow_empty(true)
                    .interact_text()?;
                form.set(field, text);
            }

            match form.calculate() {
                Ok(result) => {
                    info!(value = result.value(), category = %result.category(), "result shown");
                    println!("\n{}\n", render_result(result, styler));
                }
                Err(errors) => {
                    for (field, reason) in errors.rejected() {
                        eprintln!("{}", styler.error(&reason.message(field)));
                    }
                    continue;
                }
            }

            let again = Confirm::with_theme(&theme)
                .with_prompt("Clear and calculate again?")
                .default(true)
                .interact()?;
            if !again {
                return Ok(());
            }
            form.reset();
        }
    }
}

/// Fields to ask for next: the rejected ones after a failed calculation,
/// otherwise both.
fn fields_to_prompt(form: &BmiForm) -> Vec<Field> {
    let rejected: Vec<_> = [Field::Weight, Field::Height]
        .into_iter()
        .filter(|field| form.error(*field).is_some())
        .collect();

    if rejected.is_empty() {
        vec![Field::Weight, Field::Height]
    } else {
        rejected
    }
}
