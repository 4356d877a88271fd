pub mod cocktail;
pub mod response;
pub mod user;

pub use cocktail::*;
pub use response::*;
pub use user::*;
