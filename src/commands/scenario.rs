use crate::core::{
    command_init::SessionContext, error::Result, print_success, state::Scenario,
};

/// Reset the persisted session to a fresh `scenario`
pub fn execute_scenario(name: &str, mut context: SessionContext) -> Result<()> {
    let scenario: Scenario = name.parse()?;

    let outcome = context.session.switch_scenario(scenario);
    context.save()?;

    print_success(&outcome.message);
    let mut presenter = context.presenter();
    context.session.present(&mut presenter);

    Ok(())
}
