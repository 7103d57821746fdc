//! Notes command handler
//!
//! Runs the in-process notes query from the command line and prints the
//! results as a table or as raw JSON.

use crate::config::Config;
use crate::error::Result;
use crate::notes::{self, ListNotesRequest, ListNotesResponse};
use prettytable::{row, Table};

/// Run the notes query and print the results
///
/// # Arguments
///
/// * `config` - Configuration containing the note source settings
/// * `query` - Optional case-insensitive substring filter
/// * `max_results` - Optional result cap; must be at least 1
/// * `json` - When true, print raw JSON instead of a table
///
/// # Errors
///
/// Returns an error on invalid input or when the source fails.
pub async fn run_notes(
    config: Config,
    query: Option<String>,
    max_results: Option<u32>,
    json: bool,
) -> Result<()> {
    let source = notes::create_source(&config.notes)?;
    let request = ListNotesRequest { max_results, query };

    let response = notes::list_notes(source.as_ref(), request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_notes_table(&response);
    }

    Ok(())
}

fn print_notes_table(response: &ListNotesResponse) {
    if response.notes.is_empty() {
        println!("No notes matched (total: {})", response.total_count);
        return;
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "TITLE", "TAGS", "CREATED"]);
    for note in &response.notes {
        let short_id = note.id.to_string().chars().take(8).collect::<String>();
        let tags = note
            .tags
            .as_deref()
            .map(|tags| tags.join(", "))
            .unwrap_or_default();
        table.add_row(row![
            short_id,
            note.title,
            tags,
            note.created_at.format("%Y-%m-%d %H:%M")
        ]);
    }
    table.printstd();
    println!(
        "Showing {} of {} matching note(s)",
        response.notes.len(),
        response.total_count
    );
}
