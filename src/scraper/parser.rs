// parser.rs
use crate::domain::Listing;
use crate::errors::ListingError;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use tracing::{debug, info};
use url::Url;

// <div class="listing-item">
//  ├── span.price            "$450,000"
//  ├── span.bedrooms | beds  "3"
//  ├── span.bathrooms | baths
//  ├── span.garage           (presence only)
//  └── a.listing-link[href]
struct Selectors {
    container: Selector,
    price: Selector,
    bedrooms: [Selector; 2],
    bathrooms: [Selector; 2],
    garage: Selector,
    link: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        let sel = |css: &str| Selector::parse(css).expect("static selector is valid");
        Selectors {
            container: sel("div.listing-item"),
            price: sel("span.price"),
            bedrooms: [sel("span.bedrooms"), sel("span.beds")],
            bathrooms: [sel("span.bathrooms"), sel("span.baths")],
            garage: sel("span.garage"),
            link: sel("a.listing-link"),
        }
    })
}

/// Extracts every listing container on the page. Each entry succeeds or
/// fails on its own; one bad container never hides the others.
///
/// `page_url` is used to resolve relative listing links.
pub fn parse_listings(html: &str, page_url: &str) -> Vec<Result<Listing, ListingError>> {
    let document = Html::parse_document(html);
    debug!("📄 Parsed document:\n{}", document.html());

    let base = Url::parse(page_url).ok();
    let sel = selectors();

    let containers: Vec<ElementRef> = document.select(&sel.container).collect();
    info!("🔎 Found {} listings", containers.len());

    containers
        .into_iter()
        .map(|el| extract_listing(el, sel, base.as_ref()))
        .collect()
}

fn extract_listing(
    el: ElementRef,
    sel: &Selectors,
    base: Option<&Url>,
) -> Result<Listing, ListingError> {
    let price_text = first_text(el, &sel.price).ok_or(ListingError::MissingField("price"))?;
    let price = parse_price(&price_text)?;

    let bedrooms = first_of(el, &sel.bedrooms)
        .map(|t| parse_count("bedrooms", &t))
        .transpose()?;
    let bathrooms = first_of(el, &sel.bathrooms)
        .map(|t| parse_count("bathrooms", &t))
        .transpose()?;

    let garage = el.select(&sel.garage).next().is_some();

    let href = el
        .select(&sel.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or(ListingError::MissingField("url"))?;

    Ok(Listing {
        price,
        bedrooms,
        bathrooms,
        garage,
        url: resolve_href(base, href),
    })
}

fn first_text(el: ElementRef, selector: &Selector) -> Option<String> {
    el.select(selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
}

/// Text of the first alternate class that is present.
fn first_of(el: ElementRef, alternates: &[Selector]) -> Option<String> {
    alternates.iter().find_map(|s| first_text(el, s))
}

/// "$450,000" -> 450000
pub fn parse_price(text: &str) -> Result<i64, ListingError> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    cleaned
        .trim()
        .parse::<i64>()
        .map_err(|_| ListingError::InvalidNumber {
            field: "price",
            value: text.to_string(),
        })
}

fn parse_count(field: &'static str, text: &str) -> Result<i64, ListingError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ListingError::InvalidNumber {
            field,
            value: text.to_string(),
        })
}

/// Absolute links are kept as written; relative ones are joined onto the page.
fn resolve_href(base: Option<&Url>, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    base.and_then(|b| b.join(href).ok())
        .map(String::from)
        .unwrap_or_else(|| href.to_string())
}
