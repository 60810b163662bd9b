use itertools::Itertools;
use ranheap::{parser::parse_int_list, sort::heap_sort};
use std::io::Read;

pub fn main() -> Result<(), String> {
    let mut data = Vec::new();
    std::io::stdin()
        .read_to_end(&mut data)
        .map_err(|e| format!("Failed to read from stdin: {}", e))?;

    let values = parse_int_list(&data)?;
    let sorted = heap_sort(values);

    println!("{}", sorted.iter().join(" "));
    Ok(())
}
