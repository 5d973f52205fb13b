/// Maximum length of a task title in characters.
pub const MAX_TITLE_LENGTH: usize = 255;
