// Resume core: the structured record loaded at startup and the plain-text
// document generator that turns it into a downloadable file.

pub mod document;
pub mod record;
