
pub const TMS0980_WORD_BITS: u32 = 9;
pub const TMS1000_WORD_BITS: u32 = 8; // Also TMS1100

// ROM sizes, in instruction words.
pub const TMS0980_ROM_WORDS: usize = 0x800;
pub const TMS1000_ROM_WORDS: usize = 0x400;
pub const TMS1100_ROM_WORDS: usize = 0x800;

// Width of the in-page address field a branch or call carries.
pub const TMS0980_PAGE_BITS: u32 = 7;
pub const TMS1000_PAGE_BITS: u32 = 6; // Also TMS1100
