mod auth;
mod gate;
mod helpers;
mod locking;
mod options;
mod privileges;
