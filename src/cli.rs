use comfy_table::{Cell, ContentArrangement, Table};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use num_format::{Locale, ToFormattedString};
use ranheap::utils::human_duration;
use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub mod generate;
pub mod sort;

/// Minimal estimated runtime after which to show a progress bar instead of simple log messages.
pub const PROGRESS_BAR_THRESHOLD: Duration = Duration::from_millis(500);

/// Initializes env-driven logging, bridged with the progress bar draw target
/// so log lines don't tear running bars.
pub fn init_logging() -> MultiProgress {
    let logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).build();
    let level = logger.filter();

    let progress = MultiProgress::new();
    LogWrapper::new(progress.clone(), logger)
        .try_init()
        .expect("logger is initialized exactly once");
    log::set_max_level(level);

    progress
}

/// Collects the input files to process. A file path yields a single-entry
/// queue; a directory yields all its files. The queue is sorted in reverse,
/// so `pop()` yields paths in lexicographic order.
pub fn input_queue(path: &Path, limit: Option<usize>) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        return Err(format!("Path {:?} is not a file or directory", path).into());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    entries.sort();

    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    entries.reverse();
    Ok(entries)
}

pub fn should_use_progress_bar(num_remaining: usize, duration_per_file: Duration) -> bool {
    duration_per_file * num_remaining as u32 > PROGRESS_BAR_THRESHOLD
}

pub fn create_progress_bar(progress: &MultiProgress, len: usize) -> ProgressBar {
    let pb = progress.add(ProgressBar::new(len as u64));
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .expect("progress bar template is well-formed")
            .progress_chars("=>-"),
    );
    pb
}

/// Aggregated statistics for a batch run.
pub struct Stats {
    pub processed: usize,
    pub errors: usize,
    pub total_elements: usize,
    pub validated_count: usize,
    pub failed_validations: usize,
    pub parse_durations: Vec<Duration>,
    pub sort_durations: Vec<Duration>,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            processed: 0,
            errors: 0,
            total_elements: 0,
            validated_count: 0,
            failed_validations: 0,
            parse_durations: Vec::new(),
            sort_durations: Vec::new(),
        }
    }

    pub fn print_summary(&self) {
        let mut table = Table::new();
        table
            .load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["", "Total", "Avg", "Min", "Median", "Max"]);

        table.add_row(summary_row("Parse", &self.parse_durations));
        table.add_row(summary_row("Sort", &self.sort_durations));

        println!("\nProcessed {} file(s), {} error(s)", self.processed, self.errors);
        println!(
            "Sorted {} element(s)",
            self.total_elements.to_formatted_string(&Locale::en)
        );
        if self.validated_count + self.failed_validations > 0 {
            println!(
                "Validated {} file(s), {} failure(s)",
                self.validated_count, self.failed_validations
            );
        }
        println!("{table}");
    }
}

/// One table row summarizing a duration distribution.
fn summary_row(label: &str, durations: &[Duration]) -> Vec<Cell> {
    let mut row = vec![Cell::new(label)];

    if durations.is_empty() {
        row.extend((0..5).map(|_| Cell::new("-")));
        return row;
    }

    let mut secs: Vec<f64> = durations.iter().map(|d| d.as_secs_f64()).collect();
    secs.sort_by(|a, b| a.partial_cmp(b).expect("durations are finite"));

    let total: f64 = secs.iter().sum();
    let avg = total / secs.len() as f64;
    let min = secs[0];
    let max = secs[secs.len() - 1];
    let median = if secs.len() % 2 == 1 {
        secs[secs.len() / 2]
    } else {
        let hi = secs.len() / 2;
        (secs[hi - 1] + secs[hi]) / 2.0
    };

    for s in [total, avg, min, median, max] {
        row.push(Cell::new(human_duration(Duration::from_secs_f64(s))));
    }
    row
}
