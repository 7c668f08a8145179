pub mod extract;
pub mod index;
pub mod query;
pub mod score;
pub mod stem;
pub mod stopwords;
pub mod urlnorm;

pub use index::{Index, SharedIndex};
pub use score::Hit;
pub use stopwords::StopwordSet;
