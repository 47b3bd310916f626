// public modules
pub mod app;
pub mod cli;
pub mod error;
pub mod hashing;
pub mod output;
pub mod scanning;
pub mod settings;

// public uses
pub use app::{App, Options, Summary};
pub use scanning::{FileInfo, IgnoreFilter};
pub use settings::Settings;
