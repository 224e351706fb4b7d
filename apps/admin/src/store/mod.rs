pub mod content;
pub mod draft;
