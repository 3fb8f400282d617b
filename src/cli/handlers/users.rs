use crate::cli::OutputFormatter;
use crate::error::Result;
use crate::sync::AppContext;

/// Handle the `users` command
pub async fn handle_users(ctx: &AppContext, output: &OutputFormatter) -> Result<()> {
    let users = ctx.users.list().await?;

    if output.is_json() {
        return output.print_json(&users);
    }

    if users.is_empty() {
        output.info("No users.");
        return Ok(());
    }

    for user in &users {
        output.info(&format!("#{:<4} {}", user.id, user.name));
    }

    Ok(())
}
