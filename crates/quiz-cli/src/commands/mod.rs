pub mod play;
pub mod template;
