use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use serde::Deserialize;

/// One row of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// `"first last"`.
    pub name: String,
    pub email: String,
    /// URL of the small avatar image.
    pub thumbnail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type FetchResult = Result<Vec<Contact>, FetchError>;

// ── wire format ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Page {
    results: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct User {
    name: UserName,
    email: String,
    picture: Picture,
}

#[derive(Debug, Deserialize)]
struct UserName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct Picture {
    thumbnail: String,
}

impl From<User> for Contact {
    fn from(user: User) -> Self {
        Contact {
            name: format!("{} {}", user.name.first, user.name.last),
            email: user.email,
            thumbnail: user.picture.thumbnail,
        }
    }
}

/// Parses a randomuser page into contacts, keeping the server's order.
pub fn parse_contacts(body: &str) -> Result<Vec<Contact>, serde_json::Error> {
    let page: Page = serde_json::from_str(body)?;
    Ok(page.results.into_iter().map(Contact::from).collect())
}

// ── fetching ──────────────────────────────────────────────────────────────

/// Requests `count` random users from `endpoint`. Blocks the calling thread.
pub fn fetch_contacts(endpoint: &str, count: u32) -> FetchResult {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("nabu-studio/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(10))
        .build()?;

    let response = client.get(endpoint).query(&[("results", count)]).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text()?;
    let contacts = parse_contacts(&body)?;
    log::debug!("decoded {} contacts ({} bytes)", contacts.len(), body.len());
    Ok(contacts)
}

/// Runs [`fetch_contacts`] on a worker thread.
///
/// The receiver yields exactly one message. If the frame loop is gone by the
/// time the fetch finishes, the result is dropped.
pub fn spawn_fetch(endpoint: String, count: u32) -> std::io::Result<Receiver<FetchResult>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("contact-fetch".into())
        .spawn(move || {
            log::info!("fetching {count} contacts from {endpoint}");
            let result = fetch_contacts(&endpoint, count);
            if tx.send(result).is_err() {
                log::debug!("frame loop exited before contacts arrived");
            }
        })?;
    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": { "title": "Ms", "first": "Ava", "last": "Lindqvist" },
                "email": "ava.lindqvist@example.com",
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/12.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/12.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/12.jpg"
                }
            },
            {
                "gender": "male",
                "name": { "title": "Mr", "first": "Tomás", "last": "Ortega" },
                "email": "tomas.ortega@example.com",
                "picture": {
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/men/3.jpg"
                }
            }
        ],
        "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
    }"#;

    #[test]
    fn maps_name_email_and_thumbnail() {
        let contacts = parse_contacts(PAGE).unwrap();
        assert_eq!(
            contacts,
            [
                Contact {
                    name: "Ava Lindqvist".into(),
                    email: "ava.lindqvist@example.com".into(),
                    thumbnail: "https://randomuser.me/api/portraits/thumb/women/12.jpg".into(),
                },
                Contact {
                    name: "Tomás Ortega".into(),
                    email: "tomas.ortega@example.com".into(),
                    thumbnail: "https://randomuser.me/api/portraits/thumb/men/3.jpg".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_page_is_an_empty_list() {
        assert!(parse_contacts(r#"{ "results": [] }"#).unwrap().is_empty());
    }

    #[test]
    fn missing_fields_are_decode_errors() {
        let err = parse_contacts(r#"{ "results": [ { "email": "x@example.com" } ] }"#).unwrap_err();
        assert!(FetchError::from(err).to_string().starts_with("unexpected response body"));
    }
}
