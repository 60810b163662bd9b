use std::{
    error::Error,
    io::{self, BufWriter, Write},
};

pub fn generate(count: usize, seed: Option<u64>, min: i64, max: i64) -> Result<(), Box<dyn Error>> {
    if min > max {
        return Err(format!("Empty range: --min {} exceeds --max {}", min, max).into());
    }

    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let stdout = io::stdout();
    let handle = stdout.lock();
    let mut writer = BufWriter::new(handle);

    writeln!(writer, "# {} random integers in [{}, {}]", count, min, max)?;
    for _ in 0..count {
        writeln!(writer, "{}", rng.i64(min..=max))?;
    }

    writer.flush()?;
    Ok(())
}
