use seabattle::{BitBoard, BitBoardError, Coord};

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    let ok = BitBoard::<u64, 6>::try_new();
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 3, capacity: 8 })));
}

#[test]
fn test_insert_contains() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    assert!(bb.insert(Coord::new(1, 1)).unwrap());
    assert!(bb.contains(Coord::new(1, 1)).unwrap());
    // second insert reports the cell as already present
    assert!(!bb.insert(Coord::new(1, 1)).unwrap());
    assert_eq!(bb.len(), 1);

    assert!(!bb.contains(Coord::new(2, 3)).unwrap());
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    for coord in [Coord::new(-1, 0), Coord::new(0, -1), Coord::new(4, 0), Coord::new(0, 4)] {
        assert_eq!(
            bb.insert(coord).unwrap_err(),
            BitBoardError::OutOfBounds { coord }
        );
        assert!(bb.contains(coord).is_err());
    }
    assert!(bb.is_empty());
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([Coord::new(3, 3), Coord::new(0, 1)]).unwrap();
    let cells: Vec<_> = bb.iter().collect();
    assert_eq!(cells, vec![Coord::new(0, 1), Coord::new(3, 3)]);

    assert!(BitBoard::<u16, 4>::from_cells([Coord::new(5, 0)]).is_err());
}

#[test]
fn test_and_or() {
    let a = BitBoard::<u64, 6>::from_cells([Coord::new(0, 0), Coord::new(1, 1)]).unwrap();
    let b = BitBoard::<u64, 6>::from_cells([Coord::new(1, 1), Coord::new(5, 5)]).unwrap();
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![Coord::new(1, 1)]);
    assert_eq!((a | b).len(), 3);
}
