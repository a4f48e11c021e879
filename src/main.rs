use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use std::collections::HashMap;

mod api;
mod config;
mod state;
mod ui;

use api::client::UnsplashClient;
use api::models::Photo;
use config::Config;
use state::gallery::{self, GalleryState};

/// Main application state
struct PhotoGallery {
    /// Everything the gallery renders: photos, loading, error, query label
    gallery: GalleryState,
    /// Search box contents; independent of the gallery until submitted
    search_input: String,
    /// Downloaded image handles keyed by photo id
    thumbnails: HashMap<String, Handle>,
    /// Shared API client, cloned into every background task
    client: UnsplashClient,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the search box
    SearchInputChanged(String),
    /// User submitted the search box (Enter or the Search button)
    SearchSubmitted,
    /// User clicked a quick-tag shortcut
    QuickSearch(&'static str),
    /// User asked for a fresh random batch
    RandomRequested,
    /// A random batch completed, tagged with its request number
    RandomLoaded(u64, Result<Vec<Photo>, String>),
    /// A search completed; carries the query the batch answers
    SearchLoaded(u64, String, Result<Vec<Photo>, String>),
    /// One photo's rendition finished downloading
    ThumbnailLoaded(String, Result<Handle, String>),
    /// Open an external page (photographer profile, photo permalink)
    OpenUrl(String),
}

impl PhotoGallery {
    /// Create the application and kick off the initial random batch
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        println!("🖼️  Photo gallery starting (API: {})", config.api_url);

        let app = PhotoGallery {
            gallery: GalleryState::new(),
            search_input: String::new(),
            thumbnails: HashMap::new(),
            client: UnsplashClient::new(&config.api_url, &config.access_key),
        };

        // Show something immediately, like the original page did on mount
        (app, Task::done(Message::RandomRequested))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchInputChanged(value) => {
                self.search_input = value;
                Task::none()
            }
            Message::SearchSubmitted => {
                let raw = self.search_input.clone();
                self.dispatch_search(&raw)
            }
            Message::QuickSearch(tag) => {
                // A quick tag fills the box and searches in one step
                self.search_input = tag.to_string();
                self.dispatch_search(tag)
            }
            Message::RandomRequested => self.dispatch_random(),
            Message::RandomLoaded(seq, result) => match result {
                Ok(photos) => {
                    if !self.gallery.commit_random(seq, photos) {
                        println!("⏭️  Ignoring stale random batch (request #{seq})");
                        return Task::none();
                    }
                    println!(
                        "✅ Random batch loaded: {} photos",
                        self.gallery.photos().len()
                    );
                    self.refresh_thumbnails()
                }
                Err(detail) => {
                    eprintln!("❌ Error fetching random photos: {detail}");
                    self.gallery.fail_random(seq);
                    Task::none()
                }
            },
            Message::SearchLoaded(seq, query, result) => match result {
                Ok(photos) => {
                    if !self.gallery.commit_search(seq, query, photos) {
                        println!("⏭️  Ignoring stale search results (request #{seq})");
                        return Task::none();
                    }
                    println!(
                        "✅ Search \"{}\" returned {} photos",
                        self.gallery.current_query(),
                        self.gallery.photos().len()
                    );
                    self.refresh_thumbnails()
                }
                Err(detail) => {
                    eprintln!("❌ Error searching photos: {detail}");
                    self.gallery.fail_search(seq);
                    Task::none()
                }
            },
            Message::ThumbnailLoaded(photo_id, result) => {
                match result {
                    Ok(handle) if self.gallery.contains(&photo_id) => {
                        self.thumbnails.insert(photo_id, handle);
                    }
                    Ok(_) => {
                        // Arrived after its photo left the result set
                    }
                    Err(detail) => {
                        eprintln!("⚠️  Thumbnail for {photo_id} failed: {detail}");
                    }
                }
                Task::none()
            }
            Message::OpenUrl(url) => {
                if let Err(e) = open::that_detached(&url) {
                    eprintln!("⚠️  Could not open {url}: {e}");
                }
                Task::none()
            }
        }
    }

    /// Issue the random-batch request
    fn dispatch_random(&mut self) -> Task<Message> {
        let seq = self.gallery.begin_request();
        let client = self.client.clone();
        println!("🎲 Fetching a random batch (request #{seq})");
        Task::perform(
            async move {
                let result = client.random_photos().await.map_err(|e| e.to_string());
                (seq, result)
            },
            |(seq, result)| Message::RandomLoaded(seq, result),
        )
    }

    /// Issue a keyword search; empty or whitespace-only submissions fall
    /// back to a random batch
    fn dispatch_search(&mut self, raw: &str) -> Task<Message> {
        let Some(query) = gallery::normalize_query(raw) else {
            return self.dispatch_random();
        };
        let seq = self.gallery.begin_request();
        let client = self.client.clone();
        println!("🔍 Searching for \"{query}\" (request #{seq})");
        Task::perform(
            async move {
                let result = client.search_photos(&query).await.map_err(|e| e.to_string());
                (seq, query, result)
            },
            |(seq, query, result)| Message::SearchLoaded(seq, query, result),
        )
    }

    /// Drop the old handles and start downloads for the current result set
    fn refresh_thumbnails(&mut self) -> Task<Message> {
        self.thumbnails.clear();
        let downloads: Vec<Task<Message>> = self
            .gallery
            .photos()
            .iter()
            .map(|photo| {
                Task::perform(
                    ui::thumbnails::load(
                        self.client.clone(),
                        photo.id.clone(),
                        photo.urls.small.clone(),
                    ),
                    |(photo_id, result)| Message::ThumbnailLoaded(photo_id, result),
                )
            })
            .collect();
        Task::batch(downloads)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("📸 Photo Gallery").size(40),
            text("Discover beautiful photos from Unsplash").size(16),
        ]
        .spacing(5)
        .align_x(Alignment::Center);

        let mut page = column![
            container(header).center_x(Length::Fill),
            ui::controls::panel(&self.search_input),
        ]
        .spacing(20)
        .padding(30);

        if !self.gallery.current_query().is_empty() {
            page = page.push(text(format!(
                "Showing results for: \"{}\"",
                self.gallery.current_query()
            )));
        }

        if self.gallery.is_loading() {
            page = page.push(text("Loading amazing photos... ✨").size(18));
        }

        if let Some(message) = self.gallery.error() {
            page = page.push(
                container(text(message).style(text::danger))
                    .padding(10)
                    .style(container::rounded_box),
            );
        }

        page = page.push(ui::grid::photo_grid(self.gallery.photos(), &self.thumbnails));

        if self.gallery.shows_no_results() {
            page = page.push(
                container(text("No photos found. Try a different search term!").size(18))
                    .center_x(Length::Fill),
            );
        }

        let footer = row![
            text("Powered by "),
            button(text("Unsplash"))
                .on_press(Message::OpenUrl("https://unsplash.com".to_string()))
                .style(button::text)
                .padding(0),
        ]
        .align_y(Alignment::Center);
        page = page.push(container(footer).center_x(Length::Fill));

        scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Photo Gallery",
        PhotoGallery::update,
        PhotoGallery::view,
    )
    .theme(PhotoGallery::theme)
    .centered()
    .run_with(PhotoGallery::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gallery::{RANDOM_ERROR, SEARCH_ERROR};

    fn app() -> PhotoGallery {
        PhotoGallery {
            gallery: GalleryState::new(),
            search_input: String::new(),
            thumbnails: HashMap::new(),
            // Tests never poll the returned tasks, so no request is sent
            client: UnsplashClient::new("http://127.0.0.1:1", "test-key"),
        }
    }

    #[test]
    fn empty_and_whitespace_submissions_dispatch_in_random_mode() {
        for input in ["", "   "] {
            let mut app = app();
            app.search_input = input.to_string();
            let _task = app.update(Message::SearchSubmitted);
            assert!(app.gallery.is_loading());
            assert_eq!(app.gallery.current_query(), "");

            // The pending request commits as a random batch
            let _task = app.update(Message::RandomLoaded(1, Ok(vec![Photo::fixture("a")])));
            assert_eq!(app.gallery.photos().len(), 1);
            assert_eq!(app.gallery.current_query(), "");
            assert!(!app.gallery.is_loading());
        }
    }

    #[test]
    fn submitted_text_is_trimmed_before_it_becomes_the_label() {
        let mut app = app();
        app.search_input = "  nature  ".to_string();
        let _task = app.update(Message::SearchSubmitted);
        let _task = app.update(Message::SearchLoaded(
            1,
            "nature".to_string(),
            Ok(vec![Photo::fixture("n")]),
        ));
        assert_eq!(app.gallery.current_query(), "nature");
    }

    #[test]
    fn quick_search_fills_the_box_and_searches() {
        let mut app = app();
        let _task = app.update(Message::QuickSearch("cats"));
        assert_eq!(app.search_input, "cats");
        assert!(app.gallery.is_loading());

        let _task = app.update(Message::SearchLoaded(
            1,
            "cats".to_string(),
            Ok(vec![Photo::fixture("c")]),
        ));
        assert_eq!(app.gallery.current_query(), "cats");
    }

    #[test]
    fn stale_completions_are_ignored_by_update() {
        let mut app = app();
        let _task = app.update(Message::RandomRequested); // request #1
        let _task = app.update(Message::QuickSearch("boats")); // request #2

        let _task = app.update(Message::RandomLoaded(1, Ok(vec![Photo::fixture("x")])));
        assert!(app.gallery.photos().is_empty());
        assert!(app.gallery.is_loading());

        let _task = app.update(Message::SearchLoaded(
            2,
            "boats".to_string(),
            Ok(vec![Photo::fixture("y")]),
        ));
        assert_eq!(app.gallery.photos().len(), 1);
        assert_eq!(app.gallery.current_query(), "boats");
        assert!(!app.gallery.is_loading());
    }

    #[test]
    fn committed_failures_raise_the_matching_banner() {
        let mut app = app();
        let _task = app.update(Message::RandomRequested);
        let _task = app.update(Message::RandomLoaded(1, Err("boom".to_string())));
        assert_eq!(app.gallery.error(), Some(RANDOM_ERROR));

        let _task = app.update(Message::QuickSearch("cars"));
        let _task = app.update(Message::SearchLoaded(2, "cars".to_string(), Err("boom".to_string())));
        assert_eq!(app.gallery.error(), Some(SEARCH_ERROR));
    }

    #[test]
    fn thumbnails_for_departed_photos_are_dropped() {
        let mut app = app();
        let _task = app.update(Message::RandomRequested);
        let _task = app.update(Message::RandomLoaded(1, Ok(vec![Photo::fixture("kept")])));

        let handle = Handle::from_bytes(vec![0u8; 4]);
        let _task = app.update(Message::ThumbnailLoaded("gone".to_string(), Ok(handle.clone())));
        assert!(app.thumbnails.is_empty());

        let _task = app.update(Message::ThumbnailLoaded("kept".to_string(), Ok(handle)));
        assert_eq!(app.thumbnails.len(), 1);
    }

    #[test]
    fn committing_a_new_result_set_clears_old_thumbnails() {
        let mut app = app();
        let _task = app.update(Message::RandomRequested);
        let _task = app.update(Message::RandomLoaded(1, Ok(vec![Photo::fixture("old")])));
        let _task = app.update(Message::ThumbnailLoaded(
            "old".to_string(),
            Ok(Handle::from_bytes(vec![0u8; 4])),
        ));
        assert_eq!(app.thumbnails.len(), 1);

        let _task = app.update(Message::QuickSearch("flowers"));
        let _task = app.update(Message::SearchLoaded(
            2,
            "flowers".to_string(),
            Ok(vec![Photo::fixture("new")]),
        ));
        assert!(app.thumbnails.is_empty());
    }
}
