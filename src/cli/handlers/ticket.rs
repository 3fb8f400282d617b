use crate::cli::OutputFormatter;
use crate::core::{TicketId, UserId};
use crate::error::{Result, TickdeckError};
use crate::sync::AppContext;

/// Handle the `show` command
pub async fn handle_show(ctx: &AppContext, ticket_id: i64, output: &OutputFormatter) -> Result<()> {
    let Some(ticket) = ctx.tickets.get(TicketId(ticket_id)).await? else {
        return Err(TickdeckError::custom(format!(
            "'{ticket_id}' is not a valid ticket id"
        )));
    };

    if output.is_json() {
        return output.print_json(&ticket);
    }

    // Resolve the assignee name through the user detail query; a failed
    // lookup leaves the numeric fallback.
    let assignee = match ticket.assignee_id {
        None => "unassigned".to_string(),
        Some(id) => match ctx.users.get(id).await {
            Ok(Some(user)) => user.name,
            _ => format!("user#{id}"),
        },
    };

    output.info(&format!("Ticket #{}", ticket.id));
    output.info(&format!(
        "  Status:      {}",
        if ticket.completed { "completed" } else { "incomplete" }
    ));
    output.info(&format!("  Description: {}", ticket.description));
    output.info(&format!("  Assignee:    {assignee}"));

    Ok(())
}

/// Handle the `new` command
pub async fn handle_new(ctx: &AppContext, description: &str, output: &OutputFormatter) -> Result<()> {
    let ticket = ctx.tickets.create(description).await?;

    if output.is_json() {
        return output.print_json(&ticket);
    }

    output.success(&format!(
        "Created ticket #{}: {}",
        ticket.id, ticket.description
    ));
    Ok(())
}

/// Handle the `assign` command
pub async fn handle_assign(
    ctx: &AppContext,
    ticket_id: i64,
    user_id: i64,
    output: &OutputFormatter,
) -> Result<()> {
    ctx.tickets
        .assign(TicketId(ticket_id), UserId(user_id))
        .await?;
    output.success(&format!("Assigned ticket #{ticket_id} to user #{user_id}"));
    Ok(())
}

/// Handle the `unassign` command
pub async fn handle_unassign(
    ctx: &AppContext,
    ticket_id: i64,
    output: &OutputFormatter,
) -> Result<()> {
    ctx.tickets.unassign(TicketId(ticket_id)).await?;
    output.success(&format!("Unassigned ticket #{ticket_id}"));
    Ok(())
}

/// Handle the `done` command
pub async fn handle_done(ctx: &AppContext, ticket_id: i64, output: &OutputFormatter) -> Result<()> {
    ctx.tickets.complete(TicketId(ticket_id)).await?;
    output.success(&format!("Completed ticket #{ticket_id}"));
    Ok(())
}

/// Handle the `reopen` command
pub async fn handle_reopen(
    ctx: &AppContext,
    ticket_id: i64,
    output: &OutputFormatter,
) -> Result<()> {
    ctx.tickets.reopen(TicketId(ticket_id)).await?;
    output.success(&format!("Reopened ticket #{ticket_id}"));
    Ok(())
}
