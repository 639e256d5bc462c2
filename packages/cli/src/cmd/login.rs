//! `storefront login` - walk the auth wizard interactively

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use storefront_core::{AuthWizard, Field, Outcome, Session, Step};
use tracing::debug;

use crate::context::{AppContext, ConsoleNotifier};
use crate::view::TerminalView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepAction {
    Submit,
    Back,
    ForgotPassword,
    Cancel,
}

fn actions_for(step: Step) -> Vec<(StepAction, &'static str)> {
    let mut actions = vec![(StepAction::Submit, step.action_label())];
    if step != Step::Identify {
        actions.push((StepAction::Back, "Back"));
    }
    if step == Step::Password {
        actions.push((StepAction::ForgotPassword, "Forgot password"));
    }
    actions.push((StepAction::Cancel, "Cancel"));
    actions
}

pub async fn run(ctx: &AppContext) -> Result<()> {
    let mut wizard = AuthWizard::new();
    let mut view = TerminalView::new(ctx.term.clone());
    let mut notifier = ConsoleNotifier;
    let mut session = Session::default();

    wizard.open(&mut view);

    loop {
        let step = view.visible();
        match choose_action(ctx, step)? {
            StepAction::Submit => {
                prompt_fields(ctx, &mut view, step)?;
                let outcome = wizard.submit(&ctx.api, &mut view, &mut notifier).await;
                debug!(?outcome, "step submitted");
                if let Outcome::Authenticated { display_name } = outcome {
                    session.sign_in(&display_name);
                    println!();
                    println!(
                        "{} {}",
                        "Signed in as".bright_green(),
                        session.label().bright_green().bold()
                    );
                    break;
                }
            }
            StepAction::Back => {
                wizard.back(&mut view);
            }
            StepAction::ForgotPassword => wizard.forgot_password(&mut notifier),
            StepAction::Cancel => {
                wizard.close(&mut view);
                println!("{}", "Cancelled".dimmed());
                break;
            }
        }
    }

    Ok(())
}

fn choose_action(ctx: &AppContext, step: Step) -> Result<StepAction> {
    let actions = actions_for(step);
    let labels: Vec<&str> = actions.iter().map(|(_, label)| *label).collect();

    let selection = Select::with_theme(&ctx.theme())
        .items(&labels)
        .default(0)
        .interact_on(&ctx.term)?;

    Ok(actions[selection].0)
}

fn prompt_fields(ctx: &AppContext, view: &mut TerminalView, step: Step) -> Result<()> {
    let theme = ctx.theme();

    match step {
        Step::Identify => {
            let identifier: String = Input::with_theme(&theme)
                .with_prompt("Email or phone number")
                .with_initial_text(view.value(Field::Identifier))
                .allow_empty(true)
                .interact_text_on(&ctx.term)?;
            view.enter(Field::Identifier, &identifier);
        }
        Step::Password => {
            let password = Password::with_theme(&theme)
                .with_prompt("Password")
                .allow_empty_password(true)
                .interact_on(&ctx.term)?;
            view.enter(Field::Password, &password);
        }
        Step::Verify => {
            let code: String = Input::with_theme(&theme)
                .with_prompt("Verification code")
                .allow_empty(true)
                .interact_text_on(&ctx.term)?;
            view.enter(Field::Code, &code);
        }
        Step::Register => {
            for (field, prompt) in [
                (Field::Username, "Username"),
                (Field::Email, "Email"),
                (Field::Phone, "Phone"),
            ] {
                let value: String = Input::with_theme(&theme)
                    .with_prompt(prompt)
                    .with_initial_text(view.value(field))
                    .allow_empty(true)
                    .interact_text_on(&ctx.term)?;
                view.enter(field, &value);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_has_no_back() {
        let actions: Vec<StepAction> = actions_for(Step::Identify).into_iter().map(|(a, _)| a).collect();
        assert_eq!(actions, vec![StepAction::Submit, StepAction::Cancel]);
    }

    #[test]
    fn test_password_offers_recovery() {
        let actions: Vec<StepAction> = actions_for(Step::Password).into_iter().map(|(a, _)| a).collect();
        assert_eq!(
            actions,
            vec![
                StepAction::Submit,
                StepAction::Back,
                StepAction::ForgotPassword,
                StepAction::Cancel
            ]
        );
    }

    #[test]
    fn test_submit_label_follows_step() {
        assert_eq!(actions_for(Step::Register)[0].1, "Create account");
    }
}
