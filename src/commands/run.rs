use crate::core::{
    command_init::SessionContext,
    error::Result,
    print_success,
};

/// Execute one simulated command against the persisted session
pub fn execute_run(words: Vec<String>, mut context: SessionContext) -> Result<()> {
    let line = words.join(" ");
    log::debug!("run: '{line}'");

    let outcome = context.session.execute(&line)?;
    context.save()?;

    print_success(&outcome.message);
    let mut presenter = context.presenter();
    context.session.present(&mut presenter);

    Ok(())
}
