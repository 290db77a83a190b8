#![no_main]

use libfuzzer_sys::fuzz_target;
use tomoslice::core::mrc;

fuzz_target!(|data: &[u8]| {
    // Darf bei beliebigen Bytes nicht paniken, nur Fehler liefern
    if let Ok(volume) = mrc::read_volume(data) {
        let [d, h, w] = volume.shape();
        assert_eq!(volume.voxel_count(), d * h * w);
    }
});
