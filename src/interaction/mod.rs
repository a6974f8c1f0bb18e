pub mod comparator;
pub mod cursor;
pub mod form;
pub mod hover;
pub mod magnetic;
pub mod pointer;
