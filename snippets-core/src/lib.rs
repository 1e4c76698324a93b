pub mod text;

pub use text::legacy::colorize;
