pub mod config;
pub mod core;
pub mod distance;

pub use crate::core::converter::{
    jamos_to_hangul, keystrokes_to_hangul, JamoComposer, JamoInput, KeystrokeComposer,
    KeystrokeInput,
};
pub use crate::core::hangul_fsm::{Composer, JamoDecoder, Validity};
pub use crate::core::jamo_mapper::{Jamo, JamoKind};
pub use crate::core::keymap::{split_by_divider, to_jamos, to_keystrokes, ASCII_DIVIDER, DIVIDER};
pub use crate::core::syllable::{jamos_to_syllable, syllable_to_jamos, JamoTriple};
pub use crate::core::unicode::{classify, is_ascii, is_hangul, is_jaeum, is_jamo, is_moeum, CharClass};
pub use distance::{edit_distance, keystroke_aware_distance, DistanceError};
