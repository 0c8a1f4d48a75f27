use crate::error::ScrapeError;
use crate::models::{PriceLabel, RestaurantRecord};
use crate::scrapers::dom::{compile_selector, DomNode};
use crate::scrapers::types::SiteAdapter;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// [`SiteAdapter`] with its selectors parsed, built once per scrape
pub struct CompiledAdapter<'s> {
    zone: Option<Selector>,
    listing: Selector,
    heading: Selector,
    image: Selector,
    summary: Selector,
    span: Selector,
    bold: Selector,
    site: &'s SiteAdapter,
}

impl<'s> CompiledAdapter<'s> {
    pub fn compile(site: &'s SiteAdapter) -> Result<Self, ScrapeError> {
        Ok(Self {
            zone: site.zone_selector.as_deref().map(compile_selector).transpose()?,
            listing: compile_selector(&site.listing_selector)?,
            heading: compile_selector(&site.heading_selector)?,
            image: compile_selector(&site.image_selector)?,
            summary: compile_selector(&site.summary_selector)?,
            span: compile_selector(&site.span_selector)?,
            bold: compile_selector(&site.bold_selector)?,
            site,
        })
    }
}

/// Find the listing tiles, in page order.
///
/// An empty match set (or a missing zone, when one is configured) is a
/// structural failure rather than an empty success.
pub fn locate_listings<'a>(
    document: &'a Html,
    adapter: &CompiledAdapter<'_>,
) -> Result<Vec<ElementRef<'a>>, ScrapeError> {
    let root = document.root_element();
    let structural = || ScrapeError::Structural(adapter.site.missing_listings_message.clone());

    let scope = match &adapter.zone {
        Some(zone) => root.find_first(zone).ok_or_else(structural)?,
        None => root,
    };

    let listings = scope.find_all(&adapter.listing);
    if listings.is_empty() {
        return Err(structural());
    }

    Ok(listings)
}

/// Pull one record out of a listing tile. `None` when the tile has no heading.
pub fn extract_record<'a, N: DomNode<'a>>(
    node: &N,
    adapter: &CompiledAdapter<'_>,
) -> Option<RestaurantRecord> {
    let heading = node.find_first(&adapter.heading)?;
    let title = strip_ordinal(&heading.text_content());

    let image = node
        .find_first(&adapter.image)
        .and_then(|img| img.attribute(&adapter.site.image_attribute))
        .map(str::to_string);

    let (description, raw_price) = match node.find_first(&adapter.summary) {
        Some(summary) => extract_summary(&summary, adapter),
        None => (String::new(), String::new()),
    };

    let description = if description.is_empty() {
        adapter.site.description_placeholder.clone()
    } else {
        description
    };

    Some(RestaurantRecord {
        title,
        image,
        description,
        price: PriceLabel::normalize(&raw_price),
    })
}

/// Description and raw price text from the summary block.
///
/// First span is the description, second span the price. When the spans give
/// no price, fall back to the text following a bold `Price:` label.
fn extract_summary<'a, N: DomNode<'a>>(
    summary: &N,
    adapter: &CompiledAdapter<'_>,
) -> (String, String) {
    let prefix = adapter.site.price_prefix.as_str();
    let spans = summary.find_all(&adapter.span);

    let description = spans
        .first()
        .map(|span| span.text_content())
        .unwrap_or_default();

    let mut price = spans
        .get(1)
        .map(|span| span.text_content().replace(prefix, "").trim().to_string())
        .unwrap_or_default();

    if price.is_empty() {
        let label = summary
            .find_all(&adapter.bold)
            .into_iter()
            .find(|bold| bold.text_content().contains(prefix));

        if let Some(text) = label.and_then(|bold| bold.next_text()) {
            debug!("Price taken from text after bold label");
            price = text.trim().to_string();
        }
    }

    (description, price)
}

/// Drop a leading `"<digits>."` ordinal from a title.
///
/// Only the part before the first `.` is inspected, so `"3.5 Stars Cafe"`
/// loses its `"3."` too.
pub fn strip_ordinal(raw: &str) -> String {
    match raw.split_once('.') {
        Some((head, rest)) if !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()) => {
            rest.trim().to_string()
        }
        _ => raw.to_string(),
    }
}

/// Locate and extract every restaurant on an already parsed page.
pub fn extract_restaurants(
    document: &Html,
    site: &SiteAdapter,
) -> Result<Vec<RestaurantRecord>, ScrapeError> {
    let adapter = CompiledAdapter::compile(site)?;
    let listings = locate_listings(document, &adapter)?;
    debug!("Found {} listing tiles", listings.len());

    let mut restaurants = Vec::with_capacity(listings.len());
    for (idx, listing) in listings.iter().enumerate() {
        match extract_record(listing, &adapter) {
            Some(record) => restaurants.push(record),
            None => debug!("Skipped listing {}: no heading", idx),
        }
    }

    Ok(restaurants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::dom::parse_document;

    fn extract(html: &str) -> Result<Vec<RestaurantRecord>, ScrapeError> {
        extract_restaurants(&parse_document(html.as_bytes()), &SiteAdapter::default())
    }

    fn tile(body: &str) -> String {
        format!(r#"<html><body><article class="tile">{body}</article></body></html>"#)
    }

    #[test]
    fn strip_ordinal_removes_numeric_prefix() {
        assert_eq!(strip_ordinal("12. Bombay Canteen"), "Bombay Canteen");
        assert_eq!(strip_ordinal("1.Masque"), "Masque");
    }

    #[test]
    fn strip_ordinal_keeps_plain_titles() {
        assert_eq!(strip_ordinal("Trishna"), "Trishna");
        assert_eq!(strip_ordinal("Dr. Wine"), "Dr. Wine");
        assert_eq!(strip_ordinal(".5 Bar"), ".5 Bar");
        assert_eq!(strip_ordinal("The Table 2.0"), "The Table 2.0");
    }

    #[test]
    fn strip_ordinal_also_cuts_decimal_looking_titles() {
        assert_eq!(strip_ordinal("3.5 Stars Cafe"), "5 Stars Cafe");
    }

    #[test]
    fn reads_description_and_price_from_spans() {
        let html = tile(
            r#"<h3>1. Bombay Canteen</h3>
               <img src="http://img/1.jpg">
               <div data-testid="summary_testID">
                 <span>Great food</span><span>Price: Pricey</span>
               </div>"#,
        );

        let records = extract(&html).unwrap();
        assert_eq!(
            records,
            vec![RestaurantRecord {
                title: "Bombay Canteen".to_string(),
                image: Some("http://img/1.jpg".to_string()),
                description: "Great food".to_string(),
                price: PriceLabel::Pricey,
            }]
        );
    }

    #[test]
    fn unknown_price_token_is_unavailable() {
        let html = tile(
            r#"<h3>Soam</h3>
               <div data-testid="summary_testID"><span>Cozy cafe</span><span>thaali</span></div>"#,
        );

        let records = extract(&html).unwrap();
        assert_eq!(records[0].description, "Cozy cafe");
        assert_eq!(records[0].price, PriceLabel::Unavailable);
    }

    #[test]
    fn falls_back_to_text_after_bold_label() {
        let html = tile(
            r#"<h3>Swati Snacks</h3>
               <div data-testid="summary_testID"><p><strong>Price:</strong> Average</p></div>"#,
        );

        let records = extract(&html).unwrap();
        assert_eq!(records[0].price, PriceLabel::Average);
        assert_eq!(records[0].description, "No description available.");
    }

    #[test]
    fn single_span_uses_bold_fallback_for_price() {
        let html = tile(
            r#"<h3>Gajalee</h3>
               <div data-testid="summary_testID">
                 <span>Coastal seafood</span><p><b>Price:</b> bargain</p>
               </div>"#,
        );

        let records = extract(&html).unwrap();
        assert_eq!(records[0].description, "Coastal seafood");
        assert_eq!(records[0].price, PriceLabel::Bargain);
    }

    #[test]
    fn missing_summary_gets_placeholder_and_unavailable_price() {
        let records = extract(&tile("<h2>Trishna</h2>")).unwrap();

        assert_eq!(records[0].title, "Trishna");
        assert_eq!(records[0].image, None);
        assert_eq!(records[0].description, "No description available.");
        assert_eq!(records[0].price, PriceLabel::Unavailable);
    }

    #[test]
    fn image_without_src_is_none() {
        let records = extract(&tile(r#"<h3>Bastian</h3><img data-src="/lazy.jpg">"#)).unwrap();
        assert_eq!(records[0].image, None);
    }

    #[test]
    fn tiles_without_heading_are_skipped() {
        let html = r#"<html><body>
            <article class="tile"><p>Sponsored</p></article>
            <article class="tile"><h3>2. Americano</h3></article>
            <article class="tile"><h3>3. Bayroute</h3></article>
        </body></html>"#;

        let titles: Vec<_> = extract(html)
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["Americano", "Bayroute"]);
    }

    #[test]
    fn no_tiles_is_a_structural_failure() {
        let err = extract("<html><body><div id=\"root\"></div></body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::Structural(_)));
    }

    #[test]
    fn configured_zone_must_exist() {
        let site = SiteAdapter {
            zone_selector: Some("div.zoneItems".to_string()),
            ..SiteAdapter::default()
        };
        let document = parse_document(tile("<h3>Trishna</h3>").as_bytes());

        let err = extract_restaurants(&document, &site).unwrap_err();
        assert!(matches!(err, ScrapeError::Structural(_)));
    }

    #[test]
    fn configured_zone_scopes_the_search() {
        let site = SiteAdapter {
            zone_selector: Some("div.zoneItems".to_string()),
            ..SiteAdapter::default()
        };
        let html = r#"<html><body>
            <article class="tile"><h3>Outside</h3></article>
            <div class="zoneItems"><article class="tile"><h3>Inside</h3></article></div>
        </body></html>"#;

        let records = extract_restaurants(&parse_document(html.as_bytes()), &site).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Inside");
    }

    #[test]
    fn invalid_adapter_selector_is_an_error() {
        let site = SiteAdapter {
            listing_selector: "article[".to_string(),
            ..SiteAdapter::default()
        };
        let document = parse_document(tile("<h3>Trishna</h3>").as_bytes());

        let err = extract_restaurants(&document, &site).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidSelector { .. }));
    }
}
