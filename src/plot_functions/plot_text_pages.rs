// src/plot_functions/plot_text_pages.rs
// Cover, per-run summary and placeholder pages of the report document.

use std::path::Path;

use crate::constants::{
    COLOR_PLACEHOLDER_TEXT, COVER_LIST_START_Y, COVER_LIST_STEP_Y, COVER_SUBTITLE_Y,
    COVER_TITLE_Y, REPORT_TITLE, SUMMARY_BODY_Y, SUMMARY_HEADING_Y, TEXT_PAGE_HEIGHT,
    TEXT_PAGE_WIDTH,
};
use crate::font_config::{
    FONT_TUPLE_BODY, FONT_TUPLE_BODY_MONO, FONT_TUPLE_MAIN_TITLE, FONT_TUPLE_MESSAGE,
    FONT_TUPLE_PAGE_HEADING,
};
use crate::plot_framework::{draw_text_page, text_block, TextLine};
use crate::types::PlotResult;

pub fn cover_lines(labels: &[String]) -> Vec<TextLine> {
    let mut lines = vec![
        TextLine::new(REPORT_TITLE, FONT_TUPLE_MAIN_TITLE, COVER_TITLE_Y).bold(),
        TextLine::new("Tests included:", FONT_TUPLE_PAGE_HEADING, COVER_SUBTITLE_Y),
    ];
    lines.extend(labels.iter().enumerate().map(|(i, label)| {
        TextLine::new(
            label.as_str(),
            FONT_TUPLE_BODY,
            COVER_LIST_START_Y + i as f64 * COVER_LIST_STEP_Y,
        )
    }));
    lines
}

pub fn plot_cover_page(output_path: &Path, labels: &[String]) -> PlotResult {
    draw_text_page(output_path, (TEXT_PAGE_WIDTH, TEXT_PAGE_HEIGHT), &cover_lines(labels))?;
    log::info!("Cover page saved as '{}'.", output_path.display());
    Ok(())
}

/// Run label as heading, followed by the run's console text block.
pub fn plot_summary_page(output_path: &Path, label: &str, body: &str) -> PlotResult {
    let mut lines = vec![TextLine::new(label, FONT_TUPLE_PAGE_HEADING, SUMMARY_HEADING_Y).bold()];
    lines.extend(text_block(body, FONT_TUPLE_BODY_MONO, SUMMARY_BODY_Y, TEXT_PAGE_HEIGHT));
    draw_text_page(output_path, (TEXT_PAGE_WIDTH, TEXT_PAGE_HEIGHT), &lines)?;
    log::info!("  Summary page saved as '{}'.", output_path.display());
    Ok(())
}

/// Stand-in page for an input that loaded without any usable rows.
pub fn plot_placeholder_page(output_path: &Path, label: &str, reason: &str) -> PlotResult {
    let lines = [
        TextLine::new(label, FONT_TUPLE_PAGE_HEADING, 0.45).bold(),
        TextLine::new(format!("({reason})"), FONT_TUPLE_MESSAGE, 0.50)
            .colored(*COLOR_PLACEHOLDER_TEXT),
    ];
    draw_text_page(output_path, (TEXT_PAGE_WIDTH, TEXT_PAGE_HEIGHT), &lines)?;
    log::info!("  Placeholder page saved as '{}'.", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_lists_every_label_in_order() {
        let labels = vec!["baseline".to_string(), "shaker".to_string()];
        let lines = cover_lines(&labels);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].text, REPORT_TITLE);
        assert!(lines[0].bold);
        assert_eq!(lines[2].text, "baseline");
        assert_eq!(lines[3].text, "shaker");
        assert!(lines[3].y_fraction > lines[2].y_fraction);
    }
}
