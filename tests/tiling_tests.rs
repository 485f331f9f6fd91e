use sequence_tiles::{reverse_complement, tiles, write_tile_series, TileConfig};

fn collect(seq: &[u8], tile_length: usize, step_size: usize) -> Vec<Vec<u8>> {
    let config = TileConfig {
        tile_length,
        step_size,
    };
    tiles(seq, &config).map(|t| t.to_vec()).collect()
}

#[test]
fn test_tile_count_matches_formula() {
    // L=20, T=10, P=7: offsets 0, 7, 14 -> ceil((20-10)/7) + 1 = 3 tiles
    let seq = b"ACGTACGTACGTACGTACGT";
    let result = collect(seq, 10, 7);
    assert_eq!(result.len(), 3);
}

#[test]
fn test_tile_offsets_and_content() {
    let seq = b"ACGTACGTACGTACGTACGT";
    let result = collect(seq, 10, 7);
    assert_eq!(result[0], &seq[0..10]);
    assert_eq!(result[1], &seq[7..17]);
    // final tile is clipped at the sequence end
    assert_eq!(result[2], &seq[14..20]);
    assert_eq!(result[2].len(), 6);
}

#[test]
fn test_sequence_shorter_than_tile_yields_nothing() {
    let result = collect(b"ACGTA", 10, 7);
    assert!(result.is_empty());
}

#[test]
fn test_sequence_equal_to_tile_yields_one_tile() {
    let seq = b"ACGTACGTAC";
    let result = collect(seq, 10, 7);
    assert_eq!(result, vec![seq.to_vec()]);
}

#[test]
fn test_step_larger_than_tile_leaves_gaps() {
    // L=10, T=3, P=4: offsets 0, 4, 8 with bases 3 and 7 uncovered
    let seq = b"ACGTACGTAC";
    let result = collect(seq, 3, 4);
    assert_eq!(
        result,
        vec![b"ACG".to_vec(), b"ACG".to_vec(), b"AC".to_vec()]
    );
}

#[test]
fn test_step_overshoot_emits_empty_tail_tile() {
    // L=10, T=3, P=5: the loop bound is 12, so offset 10 emits a tile clipped
    // to zero length, exactly as range(0, 12, 5) does
    let seq = b"ACGTACGTAC";
    let result = collect(seq, 3, 5);
    assert_eq!(
        result,
        vec![b"ACG".to_vec(), b"CGT".to_vec(), b"".to_vec()]
    );
}

#[test]
fn test_empty_sequence() {
    let result = collect(b"", 4, 3);
    assert!(result.is_empty());
}

#[test]
fn test_offsets_have_constant_stride() {
    let seq = vec![b'A'; 100];
    let config = TileConfig {
        tile_length: 10,
        step_size: 7,
    };
    let count = tiles(&seq, &config).count();
    // every tile i starts at i*7, so the full-length tiles all sit 7 apart
    for (i, tile) in tiles(&seq, &config).enumerate() {
        let start = i * 7;
        assert_eq!(tile, &seq[start..(start + 10).min(seq.len())]);
    }
    assert_eq!(count, (100 - 10 + 6) / 7 + 1);
}

#[test]
fn test_forward_and_reverse_series_independent() {
    // worked example: ACGTACGTAC with T=4, P=3
    let forward = b"ACGTACGTAC";
    let fwd_tiles = collect(forward, 4, 3);
    assert_eq!(
        fwd_tiles,
        vec![b"ACGT".to_vec(), b"TACG".to_vec(), b"GTAC".to_vec()]
    );

    let revcomp = reverse_complement(forward);
    assert_eq!(revcomp, b"GTACGTACGT");
    let rc_tiles = collect(&revcomp, 4, 3);
    assert_eq!(
        rc_tiles,
        vec![b"GTAC".to_vec(), b"CGTA".to_vec(), b"ACGT".to_vec()]
    );
    assert_eq!(fwd_tiles.len(), rc_tiles.len());
}

#[test]
fn test_write_tile_series_format() {
    let config = TileConfig {
        tile_length: 4,
        step_size: 3,
    };
    let mut out = Vec::new();
    let count =
        write_tile_series(&mut out, ">chrI YAL001C + 100 93:107", b"ACGTACGTAC", &config).unwrap();
    assert_eq!(count, 3);
    let expected = "\
>chrI YAL001C + 100 93:107 tile_0
ACGT
>chrI YAL001C + 100 93:107 tile_1
TACG
>chrI YAL001C + 100 93:107 tile_2
GTAC
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_write_tile_series_rc_header_restarts_index() {
    let config = TileConfig {
        tile_length: 4,
        step_size: 3,
    };
    let mut out = Vec::new();
    let revcomp = reverse_complement(b"ACGTACGTAC");
    write_tile_series(&mut out, ">chrI YAL001C + 100 93:107 rc", &revcomp, &config).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(">chrI YAL001C + 100 93:107 rc tile_0\nGTAC\n"));
    assert!(text.contains(" rc tile_2\nACGT\n"));
}
