mod cache_store;
mod file_store;

pub use self::cache_store::{CookieEntry, CookieOptions, MemoryCookieStore};
pub use self::file_store::FileCookieStore;
