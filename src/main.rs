use anyhow::{bail, Context, Result};
use chrono::{Local, TimeZone};
use clap::Parser;
use colored::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sensor_logger::generate::{generate_records, BASE_SENSOR_ID};
use sensor_logger::record::{SensorRecord, RECORD_SIZE};
use sensor_logger::store::{read_record, write_records};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A tool to generate fake sensor readings and store them as fixed-size binary records."
)]
struct CliArgs {
    /// Number of records to generate
    count: usize,

    /// Destination record file, overwritten if it already exists
    record_file: PathBuf,

    /// After writing, read the record at this zero-based index back and display it
    #[clap(long)]
    show: Option<u64>,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    if args.count == 0 {
        bail!("count must be a positive number");
    }

    let mut rng = StdRng::from_entropy();
    let records = generate_records(&mut rng, args.count, BASE_SENSOR_ID);

    write_records(&args.record_file, &records)
        .with_context(|| format!("Failed to write records to {}", args.record_file.display()))?;

    println!(
        "Wrote {} records ({} bytes) to {}",
        records.len(),
        records.len() * RECORD_SIZE,
        args.record_file.display()
    );

    if let Some(index) = args.show {
        let record = read_record(&args.record_file, index).with_context(|| {
            format!(
                "Failed to read record {} from {}",
                index,
                args.record_file.display()
            )
        })?;
        print_record(&record);
    }

    Ok(())
}

fn print_record(record: &SensorRecord) {
    let temperature = format!("{:.2}°C", record.temperature_celsius);
    let temperature = match record.temperature_celsius {
        // Overheating
        t if t >= 45.0 => temperature.red(),
        // Below freezing
        t if t <= 0.0 => temperature.blue(),
        _ => temperature.normal(),
    };

    let when = Local
        .timestamp_opt(record.timestamp, 0)
        .single()
        .map(|t| t.format("%a %b %e %H:%M:%S %Y").to_string())
        .unwrap_or_else(|| format!("{} (seconds since epoch)", record.timestamp));

    println!("{}", format!("Sensor #{}", record.sensor_id).bold());
    println!("  Temperature: {}", temperature);
    println!("  Humidity:    {:.2}%", record.humidity_percent);
    println!("  Timestamp:   {}", when);
}
