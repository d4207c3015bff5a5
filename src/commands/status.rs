use crate::core::{command_init::SessionContext, error::Result, output::print_stats};

/// Render the four zones of the persisted session
pub fn execute_status(context: SessionContext, show_stats: bool) -> Result<()> {
    let mut presenter = context.presenter();
    context.session.present(&mut presenter);

    if show_stats {
        print_stats(&context.session.stats());
    }

    Ok(())
}
