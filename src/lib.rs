pub mod heap;
pub mod parser;
pub mod sort;
pub mod utils;

pub use heap::{EmptyHeap, MinHeap};
pub use sort::{heap_sort, heap_sort_by, sort_in_place, sort_in_place_by};
