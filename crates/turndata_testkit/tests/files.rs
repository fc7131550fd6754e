//! Turn data files on disk: owned loads, mapped views and shared readers.

use std::sync::Arc;
use turndata_codec::StreamWriter;
use turndata_core::{
    files, serialization, EdgeId, LoadConfig, TurnDataError, TurnDataExternal, TurnDataLayout,
    HEADER_SIZE,
};
use turndata_storage::{InMemoryBackend, StorageBackend};
use turndata_testkit::prelude::*;

#[test]
fn owned_and_mapped_loads_agree() {
    let store = generated_store(10_000);
    with_turn_file(&store, 0x5eed, |file| {
        let config = LoadConfig::new().expected_checksum(0x5eed);
        let (owned, _) = files::read_turn_data(&file.backend(), &config).unwrap();

        let region = file.map();
        let (view, _) = files::view_turn_data(region.as_bytes(), &config).unwrap();

        assert_eq!(owned, store);
        assert_eq!(view, store);
        assert_eq!(view.lane_data_count(), store.lane_data_count());
    });
}

#[test]
fn file_from_other_graph_is_rejected() {
    let file = TestTurnFile::create(&sample_store(), SAMPLE_CHECKSUM);
    let config = LoadConfig::new().expected_checksum(SAMPLE_CHECKSUM ^ 1);

    let err = files::read_turn_data(&file.backend(), &config).unwrap_err();
    assert!(err.is_integrity_error());

    let region = file.map();
    let err = files::view_turn_data(region.as_bytes(), &config).unwrap_err();
    assert!(matches!(err, TurnDataError::ChecksumMismatch { .. }));
}

#[test]
fn mapped_view_is_shared_across_threads() {
    let store = generated_store(4096);
    let file = TestTurnFile::create(&store, 1);
    let region = file.map();
    let (view, _) = files::view_turn_data(region.as_bytes(), &LoadConfig::new()).unwrap();

    std::thread::scope(|scope| {
        for t in 0..4u32 {
            let view = &view;
            let store = &store;
            scope.spawn(move || {
                for i in (t..4096).step_by(4) {
                    let id = EdgeId::new(i);
                    assert_eq!(view.record(id), store.record(id));
                }
            });
        }
    });
}

#[test]
fn owned_store_is_shared_through_arc() {
    let store = Arc::new(generated_store(1000));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.lane_data_count())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), store.lane_data_count());
    }
}

#[test]
fn external_columns_inside_a_larger_region() {
    // two sections back to back, as a container file might hold them
    let first = sample_store();
    let second = generated_store(50);
    let mut writer = StreamWriter::new();
    serialization::write(&mut writer, &first, 1).unwrap();
    let second_base = writer.position();
    serialization::write(&mut writer, &second, 2).unwrap();

    let mut backend = InMemoryBackend::new();
    backend.append(writer.as_bytes()).unwrap();
    let region = backend.read_all().unwrap();

    let layout = TurnDataLayout::new(50).unwrap();
    let external = TurnDataExternal::from_region(&region, second_base, &layout).unwrap();
    assert_eq!(external, second);
    assert_eq!(second_base, HEADER_SIZE + 3 * TurnDataLayout::record_width());

    let layout = TurnDataLayout::new(3).unwrap();
    let external = TurnDataExternal::from_region(&region, 0, &layout).unwrap();
    assert_eq!(external, first);
}

#[test]
fn trailing_garbage_in_file() {
    let mut bytes = hex_decode(SAMPLE_SECTION_HEX);
    bytes.push(0);
    let file = TestTurnFile::from_bytes(&bytes);
    let region = file.map();

    assert!(files::view_turn_data(region.as_bytes(), &LoadConfig::new()).is_err());
    let lenient = LoadConfig::new().allow_trailing_bytes(true);
    let (view, checksum) = files::view_turn_data(region.as_bytes(), &lenient).unwrap();
    assert_eq!(checksum, SAMPLE_CHECKSUM);
    assert_eq!(view, sample_store());
}
