pub mod converter;
pub mod hangul_fsm;
pub mod jamo_mapper;
pub mod keymap;
pub mod syllable;
pub mod unicode;
