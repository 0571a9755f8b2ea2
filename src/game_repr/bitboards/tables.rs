/// Squares that may receive a stone shifted one file east (file A excluded)
pub const NOT_A_FILE: u64 = 0xfefe_fefe_fefe_fefe;

/// Squares that may receive a stone shifted one file west (file H excluded)
pub const NOT_H_FILE: u64 = 0x7f7f_7f7f_7f7f_7f7f;

/// The four corner squares
pub static CORNER_MASK: u64 = generate_corner_mask();

/// Border squares that are not corners
pub static EDGE_MASK: u64 = generate_edge_mask();

/// Generate the corner mask at compile time
const fn generate_corner_mask() -> u64 {
    (1u64 << 0) | (1u64 << 7) | (1u64 << 56) | (1u64 << 63)
}

/// Generate the edge mask at compile time
const fn generate_edge_mask() -> u64 {
    let mut mask = 0u64;
    let mut sq = 0;

    while sq < 64 {
        let row = sq / 8;
        let col = sq % 8;

        if row == 0 || row == 7 || col == 0 || col == 7 {
            mask |= 1u64 << sq;
        }

        sq += 1;
    }

    mask & !generate_corner_mask()
}
