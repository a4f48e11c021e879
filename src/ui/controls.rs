//! Search controls: text box, quick tags, and the random-batch button.

use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element};

use crate::Message;

/// Predefined one-click search keywords
pub const QUICK_TAGS: [&str; 6] = ["cars", "flowers", "boats", "nature", "cats", "architecture"];

/// The full control panel shown above the grid
pub fn panel(search_input: &str) -> Element<'_, Message> {
    let search_bar = row![
        text_input("Search for photos (e.g., cats, nature, cars)...", search_input)
            .on_input(Message::SearchInputChanged)
            .on_submit(Message::SearchSubmitted)
            .padding(10),
        button(text("🔍 Search"))
            .on_press(Message::SearchSubmitted)
            .padding(10),
    ]
    .spacing(10);

    let mut tags = row![text("Quick search:")]
        .spacing(10)
        .align_y(Alignment::Center);
    for tag in QUICK_TAGS {
        tags = tags.push(button(text(tag)).on_press(Message::QuickSearch(tag)));
    }

    column![
        search_bar,
        tags,
        button(text("🎲 Random Photos"))
            .on_press(Message::RandomRequested)
            .padding(10),
    ]
    .spacing(15)
    .into()
}
