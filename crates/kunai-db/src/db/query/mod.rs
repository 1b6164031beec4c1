pub mod collection;
pub mod locks;
pub mod text_match;
pub mod usr;
