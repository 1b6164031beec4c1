pub mod caller;
pub mod depot;
pub mod gate;
