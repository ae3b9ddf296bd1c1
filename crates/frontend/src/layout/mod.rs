pub mod center;
pub mod header;

pub use center::Center;
pub use header::Header;
