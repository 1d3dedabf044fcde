use super::ui;
use crate::core::CountryCurrencyResolver;
use comfy_table::Cell;

/// Country rows as (name, region code, currency code), sorted by name.
/// `filter` matches case-insensitively against name, region and currency.
pub fn country_rows(
    resolver: &CountryCurrencyResolver,
    filter: Option<&str>,
) -> Vec<(&'static str, &'static str, &'static str)> {
    let needle = filter.map(|f| f.trim().to_lowercase());
    resolver
        .list_countries()
        .into_iter()
        .filter_map(|name| {
            let code = resolver.country_code_for(name)?;
            let currency = resolver.currency_code_for(Some(code));
            let matches = needle.as_deref().is_none_or(|n| {
                name.to_lowercase().contains(n)
                    || code.eq_ignore_ascii_case(n)
                    || currency.eq_ignore_ascii_case(n)
            });
            matches.then_some((name, code, currency))
        })
        .collect()
}

pub fn display_countries(resolver: &CountryCurrencyResolver, filter: Option<&str>) -> String {
    let rows = country_rows(resolver, filter);
    if rows.is_empty() {
        return ui::style_text("No matching countries", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Country"),
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
    ]);
    for (name, code, currency) in &rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(code),
            ui::currency_cell(currency),
        ]);
    }

    format!(
        "{}\n{}",
        table,
        ui::style_text(&format!("{} countries", rows.len()), ui::StyleType::Subtle)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_every_country() {
        let resolver = CountryCurrencyResolver::new();
        let rows = country_rows(&resolver, None);
        assert_eq!(rows.len(), resolver.list_countries().len());
        assert!(rows.contains(&("United States", "US", "USD")));
        assert!(rows.contains(&("Antarctica", "AQ", "")));
    }

    #[test]
    fn test_filter_matches_name_code_and_currency() {
        let resolver = CountryCurrencyResolver::new();

        let rows = country_rows(&resolver, Some("zealand"));
        assert_eq!(rows, vec![("New Zealand", "NZ", "NZD")]);

        let rows = country_rows(&resolver, Some("jp"));
        assert_eq!(rows, vec![("Japan", "JP", "JPY")]);

        let rows = country_rows(&resolver, Some("chf"));
        let names: Vec<_> = rows.iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["Liechtenstein", "Switzerland"]);
    }

    #[test]
    fn test_display_reports_empty_result() {
        let resolver = CountryCurrencyResolver::new();
        let output = display_countries(&resolver, Some("no such place"));
        assert!(output.contains("No matching countries"));

        let output = display_countries(&resolver, Some("Germany"));
        assert!(output.contains("EUR"));
    }
}
