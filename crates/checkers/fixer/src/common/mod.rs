pub mod credential;
pub mod parse;
pub mod urls;

pub use credential::*;
pub use parse::*;
pub use urls::*;
