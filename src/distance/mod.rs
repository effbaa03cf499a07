//! 두벌식 자판 기반 오타 거리
//!
//! 키보드 위치, 대소문자(Shift), 문자/숫자/공백 구분을 반영한 비용표로
//! 편집 거리를 계산합니다.
//!
//! ```
//! use hdku::distance::{edit_distance, keystroke_aware_distance};
//!
//! assert_eq!(edit_distance("rhrkawk", "rhrkaWk").unwrap(), 0.3);
//! assert_eq!(keystroke_aware_distance("안녕하세요", "안녕하셈").unwrap(), 2.0);
//! ```

mod cost_table;
mod levenshtein;

pub use cost_table::{symbol_index, COST_TABLE, COST_TABLE_SIZE};
pub use levenshtein::{
    deletion_cost, edit_distance, insertion_cost, keystroke_aware_distance, substitution_cost,
    DistanceError,
};
