//! Gallery view state and its transition rules.
//!
//! Everything the gallery renders lives in [`GalleryState`]: the photo
//! sequence, the loading flag, the error banner, and the active query
//! label. The shell mutates it only through the methods below.
//!
//! Overlapping requests are resolved with a sequence number instead of
//! last-write-wins: [`GalleryState::begin_request`] hands out the number a
//! completion must present, and a completion that is no longer the newest
//! one commits nothing at all — not photos, not an error, not even the
//! loading flag.

use crate::api::models::Photo;

/// Banner text when a random batch fails
pub const RANDOM_ERROR: &str = "Failed to fetch photos. Please check your API key.";

/// Banner text when a search fails
pub const SEARCH_ERROR: &str = "Failed to search photos. Please try again.";

/// The complete renderable snapshot for the session.
///
/// Replaced wholesale on every committed completion: photos are never
/// merged across requests. An error banner may coexist with photos from
/// an earlier request; a failure leaves the previous batch on screen.
#[derive(Debug, Default)]
pub struct GalleryState {
    /// Current result set, in API response order
    photos: Vec<Photo>,
    /// True from dispatch until the newest request completes
    loading: bool,
    /// Static banner message, set by a committed failure
    error: Option<&'static str>,
    /// Active query label; empty means "random photos" mode
    current_query: String,
    /// Sequence number of the newest issued request (0 = none yet)
    newest: u64,
}

impl GalleryState {
    /// Fresh state: no photos, idle, no error, random mode
    pub fn new() -> Self {
        GalleryState::default()
    }

    /// Start a new request: turns the loading flag on, clears any previous
    /// banner, and allocates the sequence number the completion must
    /// present to commit.
    pub fn begin_request(&mut self) -> u64 {
        self.newest += 1;
        self.loading = true;
        self.error = None;
        self.newest
    }

    /// True when `seq` no longer identifies the newest request
    pub fn is_stale(&self, seq: u64) -> bool {
        seq != self.newest
    }

    /// Commit a successful random batch: the photo sequence is replaced
    /// and the query label cleared. Returns false, changing nothing, when
    /// the completion is stale.
    pub fn commit_random(&mut self, seq: u64, photos: Vec<Photo>) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        self.photos = photos;
        self.current_query.clear();
        self.loading = false;
        true
    }

    /// Commit a successful search for `query` (already trimmed): the photo
    /// sequence is replaced and the query becomes the active label.
    /// Returns false, changing nothing, when the completion is stale.
    pub fn commit_search(&mut self, seq: u64, query: String, photos: Vec<Photo>) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        self.photos = photos;
        self.current_query = query;
        self.loading = false;
        true
    }

    /// Record a failed random batch. Prior photos stay visible.
    pub fn fail_random(&mut self, seq: u64) -> bool {
        self.fail(seq, RANDOM_ERROR)
    }

    /// Record a failed search. Prior photos stay visible.
    pub fn fail_search(&mut self, seq: u64) -> bool {
        self.fail(seq, SEARCH_ERROR)
    }

    fn fail(&mut self, seq: u64, message: &'static str) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        self.error = Some(message);
        self.loading = false;
        true
    }

    /// Current result set, in API response order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Whether a request is pending (as observed by the UI)
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The banner message of the latest committed failure, if any
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Active query label; empty in random mode
    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    /// Whether the photo id belongs to the current result set
    pub fn contains(&self, photo_id: &str) -> bool {
        self.photos.iter().any(|photo| photo.id == photo_id)
    }

    /// The empty-gallery message is shown only when there is nothing else
    /// to show: no photos, no pending request, no error banner.
    pub fn shows_no_results(&self) -> bool {
        self.photos.is_empty() && !self.loading && self.error.is_none()
    }
}

/// Prepare raw search-box text for dispatch: the trimmed query, or None
/// when the submission should fall back to a random batch.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
