//! The grades spreadsheet writer.
//!
//! One row per card in review order, with an empty grading column per
//! reviewer between the card link and the reference columns.

use std::path::Path;

use rust_xlsxwriter::{Format, Url, Workbook};

use crate::cards::card::Card;
use crate::error::Result;

pub const LEADING_COLUMNS: [&str; 2] = ["Card Name", "Expansion"];
pub const TRAILING_COLUMNS: [&str; 4] = ["Color", "Cost", "Rarity", "Type"];

/// Write the grade sheet for `cards`, in the order given.
pub fn write_grade_sheet(path: &Path, cards: &[Card], reviewers: &[String]) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    let mut columns: Vec<&str> = LEADING_COLUMNS.to_vec();
    columns.extend(reviewers.iter().map(String::as_str));
    columns.extend(TRAILING_COLUMNS);
    for (column, title) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, column as u16, *title, &header)?;
    }

    let trailing_start = (LEADING_COLUMNS.len() + reviewers.len()) as u16;
    for (index, card) in cards.iter().enumerate() {
        let row = index as u32 + 1;
        // A double quote inside the display text would end it early
        let display_name = card.name.replace('"', "");
        worksheet.write_url(row, 0, Url::new(card.card_url()).set_text(display_name))?;
        worksheet.write_string(row, 1, &card.expansion)?;
        worksheet.write_string(row, trailing_start, &card.casting_identity)?;
        worksheet.write_string(row, trailing_start + 1, &card.mana_cost)?;
        worksheet.write_string(row, trailing_start + 2, card.rarity.as_str())?;
        worksheet.write_string(row, trailing_start + 3, &card.type_line)?;
    }

    worksheet.set_column_width(0, 30)?;
    for offset in 0..reviewers.len() {
        worksheet.set_column_width((LEADING_COLUMNS.len() + offset) as u16, 12)?;
    }
    worksheet.set_column_width(trailing_start + 3, 30)?;

    workbook.save(path)?;
    Ok(())
}
