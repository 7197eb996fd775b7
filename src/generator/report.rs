use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::processing::{KeyImage, PadSize, FILLED};

/// Summary of one key/cipher generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareReport {
    pub source_width: u32,
    pub source_height: u32,
    pub pad: PadSize,
    pub share_width: u32,
    pub share_height: u32,

    // Block statistics
    pub total_blocks: usize,
    pub set_blocks: usize,
    pub filled_per_block: usize,
    pub key_filled_pixels: usize,
}

impl ShareReport {
    pub fn new(source_size: (u32, u32), pad: PadSize, key: &KeyImage, set_blocks: usize) -> Self {
        let (share_width, share_height) = key.dimensions();

        Self {
            source_width: source_size.0,
            source_height: source_size.1,
            pad,
            share_width,
            share_height,
            total_blocks: source_size.0 as usize * source_size.1 as usize,
            set_blocks,
            filled_per_block: pad.filled_per_block(),
            key_filled_pixels: key.pixels().filter(|p| **p == FILLED).count(),
        }
    }

    pub fn export_to_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json_string = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json_string.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::generate_key;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_report_counts() {
        let pad = PadSize::new(3, 3).unwrap();
        let key = generate_key((4, 2), pad, &mut StdRng::seed_from_u64(1)).unwrap();
        let report = ShareReport::new((4, 2), pad, &key, 3);

        assert_eq!(report.share_width, 12);
        assert_eq!(report.share_height, 6);
        assert_eq!(report.total_blocks, 8);
        assert_eq!(report.set_blocks, 3);
        assert_eq!(report.filled_per_block, 4);
        assert_eq!(report.key_filled_pixels, 32);
    }

    #[test]
    fn test_export_to_json() {
        let pad = PadSize::new(2, 2).unwrap();
        let key = generate_key((1, 1), pad, &mut StdRng::seed_from_u64(1)).unwrap();
        let report = ShareReport::new((1, 1), pad, &key, 0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.export_to_json(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["pad"], serde_json::json!([2, 2]));
        assert_eq!(value["key_filled_pixels"], 2);
        assert_eq!(value["set_blocks"], 0);
    }
}
