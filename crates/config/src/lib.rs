mod config;
mod document;
mod footer;
mod i18n;
mod navbar;
mod path;
mod preset;
mod syntax;

pub use self::config::*;
pub use self::document::*;
pub use self::footer::*;
pub use self::i18n::*;
pub use self::navbar::*;
pub use self::path::*;
pub use self::preset::*;
pub use self::syntax::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
