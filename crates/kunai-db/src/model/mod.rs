pub mod lock;
pub mod usr;
