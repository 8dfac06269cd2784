#[macro_use]
extern crate lazy_static;

mod combining_marks;
mod composition_pairs;

pub use combining_marks::is_combining_mark;
pub use combining_marks::COMBINING_MARKS;

pub use composition_pairs::compose;
pub use composition_pairs::CompositionPair;
pub use composition_pairs::SourceError;
pub use composition_pairs::COMPOSITION_PAIRS;
