use pagecat::buffer::AlignedBuffer;
use pagecat::platform;

#[test]
fn buffers_are_page_aligned_for_a_spread_of_sizes() {
    let page = platform::page_size();
    let sizes = [
        1,
        2,
        page / 2,
        page - 1,
        page,
        page + 1,
        2 * page,
        7 * page + 511,
        2 * 1024 * 1024,
    ];

    for size in sizes {
        let buffer = AlignedBuffer::new(size).expect("allocate");
        assert_eq!(
            buffer.as_ptr() as usize % page,
            0,
            "start address must be page aligned for size={size}"
        );
        assert_eq!(buffer.len(), size);
    }
}

#[test]
fn cycles_of_allocate_fill_release_stay_intact() {
    for round in 0..64u32 {
        let size = 4096 + (round as usize) * 97;
        let mut buffer = AlignedBuffer::new(size).expect("allocate");

        let fill = (round % 251) as u8;
        buffer.as_mut_slice().fill(fill);
        assert!(buffer.as_slice().iter().all(|b| *b == fill));
    }
}
