//! Background download of photo renditions for the grid.
//!
//! A browser `<img>` fetches lazily on its own; natively, every committed
//! photo gets one download task whose result re-enters the update loop as
//! an image handle keyed by photo id, so stale arrivals can be dropped.

use iced::widget::image::Handle;

use crate::api::client::UnsplashClient;

/// Download one photo's small rendition and wrap it for the image widget.
/// The photo id rides along so the shell can match the arrival to a card.
pub async fn load(
    client: UnsplashClient,
    photo_id: String,
    url: String,
) -> (String, Result<Handle, String>) {
    let bytes = match client.image_bytes(&url).await {
        Ok(bytes) => bytes,
        Err(e) => return (photo_id, Err(format!("download failed: {e}"))),
    };
    (photo_id, handle_from_bytes(bytes))
}

/// Check that the bytes decode as an image before handing them to the
/// renderer; anything that fails here keeps its placeholder card.
fn handle_from_bytes(bytes: Vec<u8>) -> Result<Handle, String> {
    image::load_from_memory(&bytes).map_err(|e| format!("not a decodable image: {e}"))?;
    Ok(Handle::from_bytes(bytes))
}
