use std::io::{self, IsTerminal, Write};

use crossterm::style::{Color, Stylize};

use crate::app::{AppContext, HotentryError, Result};
use crate::config::colors::to_crossterm;
use crate::config::ColorConfig;
use crate::pipeline::text::pad;
use crate::pipeline::{FormatOptions, RenderRow, Rendered};
use crate::store::Store;
use crate::tui::{self, Selection};

const PICKER_LABEL: &str = "選択した内容をブラウザで開くことができます";

/// Print the hot entry table, colored when stdout is a terminal.
pub async fn show_entries(ctx: &AppContext, popular: bool) -> Result<()> {
    let opts = FormatOptions::terminal(&ctx.config, popular);
    let rendered = ctx.render(&opts).await?;

    let stdout = io::stdout();
    let colors = stdout.is_terminal().then_some(&ctx.config.colors);
    let mut out = stdout.lock();
    write_table(&mut out, &rendered, colors)?;
    out.flush()?;
    Ok(())
}

/// Write the table; `colors` of `None` writes plain text.
pub fn write_table<W: Write>(
    out: &mut W,
    rendered: &Rendered,
    colors: Option<&ColorConfig>,
) -> io::Result<()> {
    let columns = &rendered.columns;
    let count_color = colors.map(|c| to_crossterm(c.bookmark_count));
    let title_color = colors.map(|c| to_crossterm(c.title));

    writeln!(
        out,
        " {} | {} | {} ",
        paint(&pad("Bookmark", columns.bookmark), count_color),
        paint(&pad("Title", columns.title), title_color),
        pad("URL", columns.url),
    )?;
    writeln!(out, "{}", "-".repeat(columns.total()))?;

    for row in &rendered.rows {
        writeln!(
            out,
            " {} | {} | {} ",
            paint(&pad(&row.bookmark_count, columns.bookmark), count_color),
            paint(&row.title, title_color),
            row.url,
        )?;
    }

    Ok(())
}

fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.with(color).to_string(),
        None => text.to_string(),
    }
}

/// Let the user pick one entry and open it in the default browser.
pub async fn link_mode(ctx: &AppContext, popular: bool) -> Result<()> {
    let opts = FormatOptions::terminal(&ctx.config, popular);
    let rendered = ctx.render(&opts).await?;

    if rendered.is_empty() {
        println!("No entries to open");
        return Ok(());
    }

    let header = picker_header(&rendered);
    let lines = rendered
        .rows
        .iter()
        .map(|row| row.picker_line(&rendered.columns))
        .collect();

    let selection = tui::pick(
        PICKER_LABEL,
        &header,
        lines,
        ctx.config.terminal.page_size,
        &ctx.config.colors,
    )?;

    let Some(row) = selected_row(&rendered, &selection)? else {
        println!("No entry selected");
        return Ok(());
    };

    tracing::debug!(entry_id = %row.entry_id, "entry selected");
    println!("Open URL: {}", row.link);
    open_browser(&row.link)
}

/// Lines are built one per row, so the picked index addresses the row and
/// its untruncated link directly.
fn selected_row<'a>(rendered: &'a Rendered, selection: &Selection) -> Result<Option<&'a RenderRow>> {
    match selection {
        Selection::Chosen(index) => rendered
            .rows
            .get(*index)
            .map(Some)
            .ok_or_else(|| HotentryError::Prompt(format!("no entry at index {}", index))),
        Selection::Cancelled => Ok(None),
    }
}

fn picker_header(rendered: &Rendered) -> String {
    let columns = &rendered.columns;
    format!(
        "   {}   | {} |  {} ",
        pad("Bookmark", columns.bookmark),
        pad("Title", columns.title),
        pad("URL", columns.url),
    )
}

pub fn open_browser(url: &str) -> Result<()> {
    let os = std::env::consts::OS;
    if !is_supported_platform(os) {
        return Err(HotentryError::Platform(os.to_string()));
    }

    open::that(url).map_err(|e| HotentryError::BrowserLaunch(e.to_string()))
}

fn is_supported_platform(os: &str) -> bool {
    matches!(
        os,
        "macos" | "windows" | "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly"
    )
}

pub fn block_domain(ctx: &AppContext, domain: &str) -> Result<()> {
    if ctx.store.add_domain(domain)? {
        println!("Blocked domain: {}", domain.trim());
    } else {
        println!("Nothing to add: {:?} is empty or already blocked", domain);
    }
    Ok(())
}

pub fn block_word(ctx: &AppContext, word: &str) -> Result<()> {
    if ctx.store.add_word(word)? {
        println!("Blocked word: {}", word.trim());
    } else {
        println!("Nothing to add: {:?} is empty or already blocked", word);
    }
    Ok(())
}

pub fn list_blocklist(ctx: &AppContext) -> Result<()> {
    let stored_domains = ctx.store.list_domains()?;
    let stored_words = ctx.store.list_words()?;
    let blocklist = ctx.blocklist()?;

    if blocklist.is_empty() {
        println!("No block rules");
        return Ok(());
    }

    println!("Domains:");
    for d in blocklist.domains() {
        let origin = if stored_domains.contains(d) { "registered" } else { "config" };
        println!("  {} ({})", d, origin);
    }

    println!("Words:");
    for w in blocklist.words() {
        let origin = if stored_words.contains(w) { "registered" } else { "config" };
        println!("  {} ({})", w, origin);
    }

    Ok(())
}
