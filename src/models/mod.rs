pub mod lenient;
pub mod movie;
pub mod results;
pub mod stats;
pub mod user;
pub mod watchlist;

pub use movie::*;
pub use results::*;
pub use stats::*;
pub use user::*;
pub use watchlist::*;
