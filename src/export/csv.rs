//! CSV export functionality
//!
//! Exports the expense collection (and optionally the category table) in a
//! spreadsheet-friendly layout. Amounts appear in both USD and NGN; the NGN
//! column always uses the static exchange-rate constant, independent of the
//! currently selected display currency.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::display::format_date;
use crate::error::{FlowError, FlowResult};
use crate::models::{Category, Expense, NGN_PER_USD};

/// Header row for the expense block
const EXPENSE_HEADER: &str = "Date,Description,Category,Amount (USD),Amount (NGN),Created At";

/// Header row for the optional category block
const CATEGORY_HEADER: &str = "Name,Color,Budget,Icon";

/// Export expenses to CSV, with an optional trailing category section
///
/// The header rows are written verbatim; every data cell is quoted.
pub fn export_csv<W: Write>(
    expenses: &[Expense],
    categories: Option<&[Category]>,
    writer: &mut W,
) -> FlowResult<()> {
    writeln!(writer, "{}", EXPENSE_HEADER).map_err(|e| FlowError::Export(e.to_string()))?;

    write_quoted_records(
        writer,
        expenses.iter().map(|expense| {
            vec![
                format_date(&expense.date),
                expense.description.clone(),
                expense.category.clone(),
                format!("{:.2}", expense.amount),
                format!("{:.0}", expense.amount * NGN_PER_USD),
                format_date(&expense.created_at),
            ]
        }),
    )?;

    if let Some(categories) = categories {
        writeln!(writer).map_err(|e| FlowError::Export(e.to_string()))?;
        writeln!(writer, "# Categories").map_err(|e| FlowError::Export(e.to_string()))?;
        writeln!(writer, "{}", CATEGORY_HEADER).map_err(|e| FlowError::Export(e.to_string()))?;

        write_quoted_records(
            writer,
            categories.iter().map(|category| {
                vec![
                    category.name.clone(),
                    category.color.clone(),
                    category
                        .budget
                        .map(|b| format!("{:.2}", b))
                        .unwrap_or_default(),
                    category.icon.clone(),
                ]
            }),
        )?;
    }

    Ok(())
}

fn write_quoted_records<W: Write>(
    writer: &mut W,
    records: impl Iterator<Item = Vec<String>>,
) -> FlowResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .has_headers(false)
        .from_writer(vec![]);

    for record in records {
        csv_writer
            .write_record(&record)
            .map_err(|e| FlowError::Export(e.to_string()))?;
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| FlowError::Export(e.to_string()))?;
    writer
        .write_all(&bytes)
        .map_err(|e| FlowError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;
    use chrono::Utc;

    fn export_to_string(expenses: &[Expense], categories: Option<&[Category]>) -> String {
        let mut output = Vec::new();
        export_csv(expenses, categories, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_header_row_is_exact() {
        let output = export_to_string(&[], None);
        assert_eq!(
            output.lines().next().unwrap(),
            "Date,Description,Category,Amount (USD),Amount (NGN),Created At"
        );
    }

    #[test]
    fn test_cells_are_quoted_and_ngn_uses_static_rate() {
        let expenses = vec![Expense::new(10.0, "Lunch", "Food & Dining", Utc::now())];
        let output = export_to_string(&expenses, None);

        let row = output.lines().nth(1).unwrap();
        assert!(row.contains("\"Lunch\""));
        assert!(row.contains("\"10.00\""));
        assert!(row.contains("\"15000\""));
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        let expenses = vec![Expense::new(5.0, "the \"good\" bread", "Food & Dining", Utc::now())];
        let output = export_to_string(&expenses, None);

        assert!(output.contains("\"the \"\"good\"\" bread\""));
    }

    #[test]
    fn test_category_section_is_optional() {
        let expenses = vec![Expense::new(10.0, "Lunch", "Food & Dining", Utc::now())];

        let without = export_to_string(&expenses, None);
        assert!(!without.contains("# Categories"));

        let categories = default_categories();
        let with = export_to_string(&expenses, Some(&categories));
        assert!(with.contains("\n\n# Categories\nName,Color,Budget,Icon\n"));
        assert!(with.contains("\"Food & Dining\",\"#FF6B6B\",\"500.00\",\"utensils\""));
    }
}
