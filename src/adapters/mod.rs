pub mod console;
pub mod csv_roster;
pub mod http_roster;
pub mod webhook;

pub use console::ConsoleNotifier;
pub use csv_roster::CsvRoster;
pub use http_roster::HttpRoster;
pub use webhook::WebhookNotifier;
