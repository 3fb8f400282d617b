use super::{assignee_label, status_glyph};
use crate::cli::OutputFormatter;
use crate::core::StatusFilter;
use crate::error::Result;
use crate::sync::AppContext;

/// Handle the `list` command
///
/// The filter and search query are UI state: they land in the tickets
/// store and the printed rows come from the store's derived projection.
pub async fn handle_list(
    ctx: &AppContext,
    filter: &str,
    search: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let filter: StatusFilter = filter.parse()?;
    ctx.tickets.store().set_filter(filter);
    ctx.tickets
        .store()
        .set_search_query(search.unwrap_or_default());

    ctx.tickets.list().await?;

    // Assignee names are cosmetic; an unreachable user endpoint should not
    // take the listing down with it.
    if let Err(err) = ctx.users.list().await {
        output.warning(&format!("could not fetch users: {err}"));
    }

    let tickets = ctx.tickets.store().filtered_tickets();

    if output.is_json() {
        return output.print_json(&tickets);
    }

    if tickets.is_empty() {
        output.info("No tickets match.");
        return Ok(());
    }

    for ticket in &tickets {
        output.info(&format!(
            "#{:<4} {} {:<50} {}",
            ticket.id,
            status_glyph(ticket.completed),
            ticket.description,
            assignee_label(ctx.users.store(), ticket.assignee_id),
        ));
    }
    output.info(&format!(
        "\n{} ticket(s), filter: {filter}",
        tickets.len()
    ));

    Ok(())
}
