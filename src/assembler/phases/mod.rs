pub mod types;

pub mod encode;
pub mod parse;
pub mod resolve;
pub mod scan;
pub mod tokenize;

pub use encode::encode;
pub use parse::parse;
pub use resolve::resolve;
pub use scan::scan;
pub use tokenize::tokenize;
