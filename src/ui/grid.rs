//! The photo grid: a wrapped flow of credit-carrying cards.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::api::models::Photo;
use crate::Message;

/// Card image area, sized for the ~400px "small" rendition
const IMAGE_WIDTH: f32 = 320.0;
const IMAGE_HEIGHT: f32 = 220.0;

/// Lay out one card per photo; images pop in as their downloads finish.
pub fn photo_grid<'a>(
    photos: &'a [Photo],
    thumbnails: &'a HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = photos
        .iter()
        .map(|photo| photo_card(photo, thumbnails.get(&photo.id)))
        .collect();

    Wrap::with_elements(cards)
        .spacing(15.0)
        .line_spacing(15.0)
        .into()
}

fn photo_card<'a>(photo: &'a Photo, thumbnail: Option<&image::Handle>) -> Element<'a, Message> {
    // Until the rendition arrives the card shows the photo's alt text,
    // like a browser does for an <img> that has nothing to draw yet
    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(IMAGE_WIDTH))
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(
            text(photo.alt_description.as_deref().unwrap_or("Unsplash photo")).size(14),
        )
        .center_x(Length::Fixed(IMAGE_WIDTH))
        .center_y(Length::Fixed(IMAGE_HEIGHT))
        .padding(10)
        .style(container::bordered_box)
        .into(),
    };

    let credit = row![
        text("📷 by "),
        button(text(&photo.user.name))
            .on_press(Message::OpenUrl(photo.user.links.html.clone()))
            .style(button::text)
            .padding(0),
    ]
    .align_y(Alignment::Center);

    let permalink = button(text("View on Unsplash").size(14))
        .on_press(Message::OpenUrl(photo.links.html.clone()))
        .style(button::text)
        .padding(0);

    container(column![picture, credit, permalink].spacing(6))
        .padding(8)
        .style(container::rounded_box)
        .into()
}
