use folio_config as cfg;

use crate::catalog::RawCatalogRecord;
use crate::text::{markup_to_text, truncate_chars};
use crate::BookViewModel;

/// Normalizes a provider record into a display model. Total: every optional field that
/// is missing or blank is replaced by its fixed fallback.
pub fn map_to_view_model(raw: &RawCatalogRecord) -> BookViewModel {
    let info = &raw.volume_info;
    let links = info.image_links.as_ref();

    BookViewModel {
        id: raw.id.clone(),
        title: present_or(info.title.as_deref(), cfg::UNKNOWN_TITLE),
        author: join_authors(info.authors.as_deref()),
        price: format_price(raw.list_price_amount()),
        description: describe(info.description.as_deref()),
        publisher: present_or(info.publisher.as_deref(), cfg::UNKNOWN_PUBLISHER),
        publication_date: present_or(info.published_date.as_deref(), cfg::UNKNOWN_DATE),
        language: present_or(info.language.as_deref(), cfg::UNKNOWN_LANGUAGE),
        page_count: match info.page_count {
            Some(n) if n > 0 => n.to_string(),
            _ => cfg::UNKNOWN_PAGE_COUNT.to_string(),
        },
        images: [
            present_or(
                links.and_then(|l| l.thumbnail.as_deref()),
                cfg::PLACEHOLDER_IMAGE_URL,
            ),
            present_or(
                links.and_then(|l| l.small_thumbnail.as_deref()),
                cfg::PLACEHOLDER_IMAGE_URL,
            ),
        ],
    }
}

fn present_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

fn join_authors(authors: Option<&[String]>) -> String {
    let names: Vec<&str> = authors
        .unwrap_or_default()
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();

    if names.is_empty() {
        cfg::UNKNOWN_AUTHOR.to_string()
    } else {
        names.join(", ")
    }
}

fn format_price(amount: Option<f64>) -> String {
    let amount = amount
        .filter(|a| a.is_finite() && *a > 0.0)
        .unwrap_or(cfg::DEFAULT_PRICE);
    format!("{amount:.2}")
}

fn describe(description: Option<&str>) -> String {
    let text = markup_to_text(description.unwrap_or_default());
    if text.is_empty() {
        return cfg::NO_DESCRIPTION.to_string();
    }
    format!(
        "{}{}",
        truncate_chars(&text, cfg::DESCRIPTION_MAX_CHARS),
        cfg::ELLIPSIS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_formatted_to_two_decimals() {
        assert_eq!(format_price(Some(9.5)), "9.50");
        assert_eq!(format_price(Some(24.999)), "25.00");
    }

    #[test]
    fn zero_or_non_finite_price_uses_default() {
        assert_eq!(format_price(None), "12.49");
        assert_eq!(format_price(Some(0.0)), "12.49");
        assert_eq!(format_price(Some(f64::NAN)), "12.49");
    }

    #[test]
    fn blank_author_names_are_skipped() {
        let authors = vec![" ".to_string(), "Frank Herbert".to_string()];
        assert_eq!(join_authors(Some(authors.as_slice())), "Frank Herbert");
        assert_eq!(join_authors(Some(&[] as &[String])), "Unknown Author");
        assert_eq!(join_authors(None), "Unknown Author");
    }

    #[test]
    fn short_description_still_gets_the_ellipsis() {
        assert_eq!(describe(Some("<i>Spice</i> must flow")), "Spice must flow...");
    }

    #[test]
    fn markup_only_description_falls_back() {
        assert_eq!(describe(Some("<p> </p>")), "No description available.");
    }
}
