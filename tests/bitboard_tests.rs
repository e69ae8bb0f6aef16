use wordsearch::{BitBoard, BitBoardError};

#[test]
fn test_new_is_empty() {
    let bb: BitBoard = BitBoard::new(12);
    assert!(bb.is_empty());
    assert_eq!(bb.size(), 12);
    assert_eq!(bb.count_ones(), 0);
}

#[test]
fn test_get_set_toggle_clear() {
    let mut bb: BitBoard<u16> = BitBoard::new(4);

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    bb.toggle(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    bb.set(2, 3).unwrap();
    bb.set(3, 3).unwrap();
    bb.clear(2, 3).unwrap();
    assert!(!bb.get(2, 3).unwrap());
    assert_eq!(bb.count_ones(), 1);

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_spans_multiple_words() {
    // 12x12 = 144 cells, more than one u64 and more than one u128
    let mut bb: BitBoard = BitBoard::new(12);
    bb.set(0, 0).unwrap();
    bb.set(5, 4).unwrap();
    bb.set(11, 11).unwrap();
    assert_eq!(bb.count_ones(), 3);
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 0), (5, 4), (11, 11)]);
}

#[test]
fn test_out_of_bounds() {
    let mut bb: BitBoard<u8> = BitBoard::new(3);
    assert_eq!(
        bb.set(3, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 3, col: 0 }
    );
    assert!(bb.get(0, 3).is_err());
}

#[test]
fn test_from_cells_and_iter() {
    let bb: BitBoard<u16> = BitBoard::from_cells(4, [(0, 1), (3, 3)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
    assert!(BitBoard::<u16>::from_cells(4, [(4, 0)]).is_err());
}
