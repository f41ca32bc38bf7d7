pub mod glyph;
pub mod map;
pub mod popup;
pub mod radar;
pub mod scatter;
pub mod tables;
