use crate::domain::Listing;
use crate::errors::FetchError;
use crate::scraper::{RawResponse, Transport};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Hands out canned responses in order and counts requests.
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<RawResponse, FetchError>>>,
    calls: Cell<u32>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<RawResponse, FetchError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: Cell::new(0),
        }
    }

    pub fn status(status: u16, times: usize) -> Vec<Result<RawResponse, FetchError>> {
        (0..times).map(|_| Ok(response(status, ""))).collect()
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, _url: &str) -> Result<RawResponse, FetchError> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for request {}", self.calls.get()))
    }
}

pub fn response(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status,
        body: body.to_string(),
    }
}

pub fn listing(price: i64, bedrooms: Option<i64>, bathrooms: Option<i64>) -> Listing {
    Listing {
        price,
        bedrooms,
        bathrooms,
        garage: false,
        url: format!("https://example.com/homes/{price}"),
    }
}

/// One listing card as it appears on the results page.
pub fn card(price: &str, beds: &str, baths: &str, garage: bool, href: &str) -> String {
    format!(
        r#"<div class="listing-item">
             <span class="price">{price}</span>
             {beds}
             {baths}
             {garage}
             <a class="listing-link" href="{href}">View</a>
           </div>"#,
        garage = if garage { r#"<span class="garage">2 car</span>"# } else { "" },
    )
}

pub fn page(cards: &[String]) -> String {
    format!(
        "<html><body><div class=\"results\">{}</div></body></html>",
        cards.concat()
    )
}

pub const PAGE_URL: &str = "https://www.realtor.com/realestateandhomes-search/Allegheny-County_PA";
