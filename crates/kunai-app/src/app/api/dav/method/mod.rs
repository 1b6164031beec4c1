pub mod fallback;
pub mod options;
