//! Category display formatting

use crate::models::{Category, Currency};

use super::format::format_currency;

/// Format a list of categories as an aligned table
pub fn format_category_list(categories: &[Category], currency: Currency) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:<8}  ID\n",
        "Name",
        "Budget",
        "Color",
        name_width = name_width
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:-<8}  {:-<8}\n",
        "",
        "",
        "",
        "",
        name_width = name_width
    ));

    for category in categories {
        let budget_str = category
            .budget
            .map(|b| format_currency(b, currency))
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:<8}  {}\n",
            category.name,
            budget_str,
            category.color,
            category.id,
            name_width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;

    #[test]
    fn test_empty_list_message() {
        assert_eq!(format_category_list(&[], Currency::Usd), "No categories found.");
    }

    #[test]
    fn test_list_contains_defaults() {
        let output = format_category_list(&default_categories(), Currency::Usd);
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("$500.00"));
        assert!(output.contains("#FF6B6B"));
    }
}
