mod compositions;
mod marks;

pub use compositions::*;
pub use marks::*;
