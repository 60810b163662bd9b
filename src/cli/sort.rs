use crate::cli::{self, Stats};
use log::{error, info, warn};
use memmap2::Mmap;
use ranheap::{
    measure_time,
    parser::parse_int_list,
    record_time,
    sort::{heap_sort_by, verify_sorted_by},
    utils::human_duration,
};
use std::{
    cmp::Ordering,
    error::Error,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

type Comparator = fn(&i64, &i64) -> Ordering;

pub fn sort(
    path: PathBuf,
    limit: Option<usize>,
    validate: bool,
    descending: bool,
    no_progress_bar: bool,
) -> Result<(), Box<dyn Error>> {
    let progress = cli::init_logging();

    let compare: Comparator = if descending {
        |a, b| b.cmp(a)
    } else {
        |a, b| a.cmp(b)
    };

    let start = Instant::now();
    let mut stats = Stats::new();

    if path.is_file() {
        // Single file: emit the sorted list on stdout
        sort_file(&path, &mut stats, compare, validate, true)?;
        info!("Total runtime: {}", human_duration(start.elapsed()));
        return Ok(());
    }

    let mut queue = cli::input_queue(&path, limit)?;

    // Process the first file to estimate the remaining runtime
    let first_file = if let Some(f) = queue.pop() {
        f
    } else {
        return Ok(());
    };
    let first_duration = measure_time!({
        sort_file(&first_file, &mut stats, compare, validate, false).map_err(|e| {
            error!("Error while sorting {:?}: {}", first_file, e);
            e
        })?
    });

    if !queue.is_empty() {
        // Create a progress bar if the remaining runtime is significant enough
        let pb = if !no_progress_bar && cli::should_use_progress_bar(queue.len(), first_duration) {
            let pb = cli::create_progress_bar(&progress, queue.len() + 1);
            pb.set_position(1); // Account for the first file we just sorted
            Some(pb)
        } else {
            None
        };

        // Process the remaining files
        while let Some(path) = queue.pop() {
            if let Err(e) = sort_file(&path, &mut stats, compare, validate, false) {
                stats.errors += 1;
                error!("Error while sorting {:?}: {}", path, e);
            }
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
        if let Some(pb) = &pb {
            pb.finish_with_message("done");
        }
    }

    stats.print_summary();
    info!("Total runtime: {}", human_duration(start.elapsed()));

    Ok(())
}

/// Sorts a single integer-list file, updating stats and optionally verifying the output.
fn sort_file(
    path: &Path,
    stats: &mut Stats,
    compare: Comparator,
    validate: bool,
    emit_output: bool,
) -> Result<(), Box<dyn Error>> {
    info!("Sorting {:?}", path);
    stats.processed += 1;

    // Parse the input list
    let values = {
        let file = File::open(path)?;
        // SAFETY: mapping a file is safe as long as the file isn't modified concurrently.
        let mmap = unsafe { Mmap::map(&file)? };

        record_time!(stats.parse_durations, { parse_int_list(&mmap)? })
    };
    stats.total_elements += values.len();

    let original = if validate { Some(values.clone()) } else { None };

    // Sort
    let sorted = record_time!(stats.sort_durations, { heap_sort_by(values, compare) });

    // Validate the output against the reference sort
    if let Some(original) = original {
        if let Err(msg) = verify_sorted_by(&original, &sorted, compare) {
            warn!("Validation failed for {:?}: {}", path, msg);
            stats.failed_validations += 1;
        } else {
            stats.validated_count += 1;
        }
    }

    if emit_output {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        for value in &sorted {
            writeln!(writer, "{}", value)?;
        }
        writer.flush()?;
    }

    info!("Sorted {} element(s)", sorted.len());
    Ok(())
}
