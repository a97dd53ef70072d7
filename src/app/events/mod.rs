//! AppIntent-, AppCommand- und HostRequest-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;
mod request;

pub use command::AppCommand;
pub use intent::AppIntent;
pub use request::HostRequest;
