/// State management module
///
/// The gallery's renderable snapshot and the transition rules guarding it
/// live in gallery.rs. The shell in main.rs owns one GalleryState and
/// mutates it exclusively through those transitions, so the request
/// sequencing cannot be bypassed from view code.

pub mod gallery;
