use super::*;

#[test]
fn test_allocate_small_block() {
    let mut block = allocate(4096, false).unwrap();
    assert_eq!(block.len(), 4096);
    assert!(block.reserved() >= 4096);
    assert!(block.as_slice().iter().all(|&b| b == 0));

    block.as_mut_slice()[0] = 0xAB;
    block.as_mut_slice()[4095] = 0xCD;
    assert_eq!(block.as_slice()[0], 0xAB);
    assert_eq!(block.as_slice()[4095], 0xCD);
    block.free();
}

#[test]
fn test_zero_size_rejected() {
    assert!(matches!(allocate(0, false), Err(PlatformError::ZeroSized)));
    assert!(matches!(allocate(0, true), Err(PlatformError::ZeroSized)));
}

#[test]
fn test_large_page_request_is_aligned() {
    let size = 3 * 1024 * 1024 + 17;
    let mut block = allocate(size, true).unwrap();
    assert_eq!(block.as_ptr() as usize % LARGE_PAGE_ALIGNMENT, 0);
    assert_eq!(block.len(), size);

    // Whole usable range is writable
    let slice = block.as_mut_slice();
    slice[0] = 1;
    slice[size - 1] = 2;
    assert_eq!(block.as_slice()[size - 1], 2);
}

#[test]
fn test_clear_zeroes_block() {
    let mut block = allocate(1 << 16, false).unwrap();
    block.as_mut_slice().fill(0x5A);
    block.clear();
    assert!(block.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_repeated_alloc_free_cycles() {
    for i in 1..200usize {
        let mut block = allocate(i * 1024, i % 7 == 0).unwrap();
        let len = block.len();
        block.as_mut_slice()[len - 1] = i as u8;
        drop(block);
    }
}

#[test]
fn test_huge_request_fails_cleanly() {
    // Overflows size + alignment - 1 on every target
    let err = allocate(usize::MAX, true).unwrap_err();
    assert!(matches!(err, PlatformError::Allocate { .. }));
}

#[test]
fn test_prefetch_any_offset() {
    let mut block = allocate(8192, false).unwrap();
    block.as_mut_slice()[4096] = 9;
    block.prefetch(0);
    block.prefetch(4096);
    block.prefetch(usize::MAX);
    assert_eq!(block.as_slice()[4096], 9);
}
