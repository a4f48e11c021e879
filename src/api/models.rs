//! Wire models for the Unsplash API.
//!
//! Only the fields the gallery actually renders are modeled; serde skips
//! the rest of the (large) Unsplash payload. `/photos/random` returns a
//! bare JSON array of [`Photo`], `/search/photos` wraps its matches in a
//! [`SearchResponse`] envelope.

use serde::Deserialize;

/// A single photo record returned by the API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    /// Unique Unsplash photo id
    pub id: String,
    /// Alt text; missing or null for many photos
    pub alt_description: Option<String>,
    /// Image renditions by size
    pub urls: PhotoUrls,
    /// Links to the photo's own pages
    pub links: PhotoLinks,
    /// The photographer who took it
    pub user: Photographer,
}

/// URLs of the available renditions of one photo
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhotoUrls {
    /// ~400px wide rendition, the one the grid displays
    pub small: String,
}

/// Links attached to a photo record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhotoLinks {
    /// Permalink to the photo page on unsplash.com
    pub html: String,
}

/// The photographer credited for a photo
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photographer {
    /// Display name
    pub name: String,
    /// Links to the photographer's pages
    pub links: PhotographerLinks,
}

/// Links attached to a photographer record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhotographerLinks {
    /// Profile page on unsplash.com
    pub html: String,
}

/// Envelope of `/search/photos`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    /// First page of matches, at most the requested page size
    pub results: Vec<Photo>,
}

#[cfg(test)]
impl Photo {
    /// Minimal in-memory photo for state tests
    pub(crate) fn fixture(id: &str) -> Self {
        Photo {
            id: id.to_string(),
            alt_description: None,
            urls: PhotoUrls {
                small: format!("https://images.example/{id}-small.jpg"),
            },
            links: PhotoLinks {
                html: format!("https://unsplash.example/photos/{id}"),
            },
            user: Photographer {
                name: "Test Photographer".to_string(),
                links: PhotographerLinks {
                    html: "https://unsplash.example/@tester".to_string(),
                },
            },
        }
    }
}
