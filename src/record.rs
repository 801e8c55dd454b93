/// Size of one encoded record on disk, in bytes.
pub const RECORD_SIZE: usize = 20;

/// One synthetic sensor sample.
///
/// On disk every record occupies exactly [`RECORD_SIZE`] bytes, fields in
/// declaration order, each little-endian:
///
/// ```text
/// offset  0..4   sensor_id            u32
/// offset  4..8   temperature_celsius  f32
/// offset  8..12  humidity_percent     f32
/// offset 12..20  timestamp            i64 (seconds since Unix epoch, UTC)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRecord {
    pub sensor_id: u32,
    pub temperature_celsius: f32,
    pub humidity_percent: f32,
    pub timestamp: i64,
}

impl SensorRecord {
    /// Encode into the fixed little-endian layout.
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[0..4].copy_from_slice(&self.sensor_id.to_le_bytes());
        buf[4..8].copy_from_slice(&self.temperature_celsius.to_le_bytes());
        buf[8..12].copy_from_slice(&self.humidity_percent.to_le_bytes());
        buf[12..20].copy_from_slice(&self.timestamp.to_le_bytes());
        buf
    }

    /// Decode a full record buffer. Every bit pattern is a valid field
    /// value, so this cannot fail on a buffer of the right size.
    pub fn decode(buf: &[u8; RECORD_SIZE]) -> Self {
        let sensor_id = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let temperature_celsius = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        let humidity_percent = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
        let timestamp = i64::from_le_bytes([
            buf[12], buf[13], buf[14], buf[15], buf[16], buf[17], buf[18], buf[19],
        ]);

        Self {
            sensor_id,
            temperature_celsius,
            humidity_percent,
            timestamp,
        }
    }
}
