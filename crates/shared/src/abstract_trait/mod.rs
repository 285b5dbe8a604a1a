mod cookie;
mod jwt;

pub use self::cookie::{CookieStoreTrait, DynCookieStore};
pub use self::jwt::{DynTokenDecoder, TokenDecoderTrait};
