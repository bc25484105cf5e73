pub mod args;
pub mod colors;
pub mod path;
pub mod table;
pub mod time;

pub use time::mins2readable;
