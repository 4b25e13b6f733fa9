use log::Level;

/// Where contact form drafts are addressed.
pub const INQUIRY_RECIPIENT: &str = "tetminerals@icloud.com";

pub const INQUIRY_SUBJECT_PREFIX: &str = "LTR Capital Inquiry";

/// Id of the element the interaction layer mounts into.
pub const HOST_ELEMENT_ID: &str = "site-interactions";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development builds log every binding
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
