/// UI building blocks
///
/// This module holds the widget-level pieces main.rs composes:
/// - Search controls and quick tags (controls.rs)
/// - The wrapped photo grid and its cards (grid.rs)
/// - Background thumbnail downloads (thumbnails.rs)

pub mod controls;
pub mod grid;
pub mod thumbnails;
