use chrono::Utc;
use rand::Rng;

use crate::record::SensorRecord;

/// Sensor IDs are assigned sequentially starting here.
pub const BASE_SENSOR_ID: u32 = 1000;

/// Temperature range of the simulated sensors, degrees Celsius.
pub const TEMPERATURE_RANGE: (f32, f32) = (-5.0, 55.0);

/// Relative humidity range of the simulated sensors, percent.
pub const HUMIDITY_RANGE: (f32, f32) = (10.0, 100.0);

/// Generate `count` synthetic records with sequential sensor IDs starting at
/// `start_id`.
///
/// Temperature and humidity are drawn independently per record from uniform
/// distributions over [`TEMPERATURE_RANGE`] and [`HUMIDITY_RANGE`]. The
/// timestamp is sampled at generation time with one-second resolution, so
/// consecutive records usually share the same value.
///
/// The caller owns the random source; pass a seeded generator for
/// reproducible output.
pub fn generate_records<R: Rng>(rng: &mut R, count: usize, start_id: u32) -> Vec<SensorRecord> {
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        records.push(SensorRecord {
            sensor_id: start_id + i as u32,
            temperature_celsius: rng.gen_range(TEMPERATURE_RANGE.0..=TEMPERATURE_RANGE.1),
            humidity_percent: rng.gen_range(HUMIDITY_RANGE.0..=HUMIDITY_RANGE.1),
            timestamp: Utc::now().timestamp(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sequential_sensor_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let records = generate_records(&mut rng, 5, BASE_SENSOR_ID);

        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.sensor_id, BASE_SENSOR_ID + i as u32);
        }
    }

    #[test]
    fn test_readings_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let records = generate_records(&mut rng, 1000, BASE_SENSOR_ID);

        for record in &records {
            assert!(
                record.temperature_celsius >= TEMPERATURE_RANGE.0
                    && record.temperature_celsius <= TEMPERATURE_RANGE.1,
                "temperature {} out of range",
                record.temperature_celsius
            );
            assert!(
                record.humidity_percent >= HUMIDITY_RANGE.0
                    && record.humidity_percent <= HUMIDITY_RANGE.1,
                "humidity {} out of range",
                record.humidity_percent
            );
        }
    }

    #[test]
    fn test_same_seed_same_readings() {
        let mut first = StdRng::seed_from_u64(1234);
        let mut second = StdRng::seed_from_u64(1234);

        let a = generate_records(&mut first, 10, BASE_SENSOR_ID);
        let b = generate_records(&mut second, 10, BASE_SENSOR_ID);

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.temperature_celsius.to_bits(), y.temperature_celsius.to_bits());
            assert_eq!(x.humidity_percent.to_bits(), y.humidity_percent.to_bits());
        }
    }

    #[test]
    fn test_timestamps_are_current() {
        let mut rng = StdRng::seed_from_u64(0);
        let before = Utc::now().timestamp();
        let records = generate_records(&mut rng, 3, BASE_SENSOR_ID);
        let after = Utc::now().timestamp();

        for record in &records {
            assert!(record.timestamp >= before && record.timestamp <= after);
        }
    }
}
