//! 두벌식 자판 키 거리 비용표
//!
//! 행/열은 66개 기호: `a A b B ... z Z`(0~51), `0`~`9`(52~61), 공백(62),
//! 예약(63, 64), 삽입/삭제(65).
//!
//! 비용 설계:
//! - 삽입/삭제: 1, 공백 0.5, 숫자 2
//! - 소문자 <-> 소문자: 1칸 0.5, 2칸 1, 3칸 1.5, 그 이상 2
//! - 대문자 <-> 대문자 1칸: 0.5
//! - 대문자 <-> 소문자: 같은 키 0.3, 1칸 0.5, 3칸 초과 3
//! - 문자 <-> 숫자, 문자 <-> 공백, 공백 <-> 숫자: 1.5
//! - 숫자 <-> 숫자: 2
//! - 발음이 비슷한 자모 (ㄸ/ㅌ, ㅋ/ㄱ): 0.5
//!
//! 일부 값은 위 설계와 맞지 않는다 (예: `e`->`D` 3, `D`->`e` 0.5).
//! 값은 원본 그대로 유지한다.

/// 비용표 크기
pub const COST_TABLE_SIZE: usize = 66;
/// 공백 기호 인덱스
pub const SPACE_INDEX: usize = 62;
/// 삽입/삭제 기호 인덱스
pub const EDIT_INDEX: usize = COST_TABLE_SIZE - 1;

/// 기호 -> 비용표 인덱스 (비용표에 없는 기호면 None)
pub fn symbol_index(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some((c as usize - 'a' as usize) * 2),
        'A'..='Z' => Some((c as usize - 'A' as usize) * 2 + 1),
        '0'..='9' => Some(c as usize + 4),
        ' ' => Some(SPACE_INDEX),
        _ => None,
    }
}

#[rustfmt::skip]
pub static COST_TABLE: [[f64; COST_TABLE_SIZE]; COST_TABLE_SIZE] = [
    // a
    [
        0.0, 0.3, 2.0, 3.0, 1.5, 3.0, 1.0, 3.0, 1.0, 1.0, 1.5,
        3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 0.5,
        0.5, 1.5, 1.5, 0.5, 0.5, 2.0, 2.0, 2.0, 3.0, 2.0, 3.0,
        0.5, 0.5, 1.0, 3.0, 2.0, 3.0, 0.5, 0.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // A
    [
        0.3, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.5,
        0.5, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // b
    [
        2.0, 3.0, 0.0, 0.3, 1.0, 3.0, 1.5, 3.0, 2.0, 2.0, 1.0,
        3.0, 0.5, 0.5, 0.5, 0.5, 1.5, 3.0, 1.0, 3.0, 1.5, 3.0,
        2.0, 3.0, 1.0, 3.0, 0.5, 0.5, 2.0, 2.0, 2.0, 2.0, 2.0,
        2.0, 1.5, 1.5, 2.0, 3.0, 1.0, 1.0, 1.0, 3.0, 0.5, 0.5,
        2.0, 2.0, 1.5, 3.0, 1.0, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // B
    [
        3.0, 3.0, 0.3, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 0.5, 0.5, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // c
    [
        1.5, 3.0, 1.0, 3.0, 0.0, 0.3, 0.5, 0.5, 0.5, 1.0, 0.5,
        0.5, 1.0, 3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 1.5, 3.0, 2.0, 2.0, 2.0, 2.0, 2.0,
        2.0, 1.0, 1.0, 1.0, 3.0, 0.5, 0.5, 2.0, 3.0, 3.0, 3.0,
        0.5, 0.5, 0.5, 0.5, 1.5, 3.0, 1.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // C
    [
        3.0, 3.0, 3.0, 3.0, 0.3, 0.0, 0.5, 0.5, 3.0, 3.0, 0.5,
        0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // d
    [
        1.0, 3.0, 1.5, 3.0, 0.5, 0.5, 0.0, 0.3, 0.5, 0.5, 0.5,
        0.5, 1.0, 3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 1.5,
        1.5, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 2.0, 3.0, 0.5, 0.5,
        1.0, 1.0, 0.5, 0.5, 1.5, 3.0, 1.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // D
    [
        3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 0.3, 0.0, 0.5, 0.5, 0.5,
        0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 0.5, 0.5, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5,
        3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // e
    [
        1.0, 3.0, 2.0, 3.0, 0.5, 3.0, 0.5, 3.0, 0.0, 0.3, 1.0,
        3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 1.0,
        1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 2.0, 3.0, 1.5, 3.0,
        0.5, 0.5, 0.5, 3.0, 1.5, 3.0, 1.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // E
    [
        1.0, 3.0, 2.0, 3.0, 1.0, 3.0, 0.5, 0.5, 0.3, 0.0, 1.0,
        3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 1.0,
        1.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 2.0, 3.0, 1.5, 3.0,
        0.5, 0.5, 0.5, 3.0, 1.5, 3.0, 1.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // f
    [
        1.5, 3.0, 1.0, 3.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 0.0,
        0.3, 0.5, 0.5, 1.0, 3.0, 2.0, 3.0, 1.5, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 1.5, 3.0, 2.0, 2.0, 2.0, 2.0, 2.0,
        2.0, 0.5, 0.5, 1.0, 3.0, 0.5, 0.5, 1.5, 3.0, 0.5, 0.5,
        1.5, 1.5, 1.0, 3.0, 1.0, 3.0, 1.5, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // F
    [
        3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 3.0, 3.0, 0.3,
        0.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 0.5, 0.5, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 0.5, 0.5,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // g
    [
        2.0, 3.0, 0.5, 0.5, 1.0, 3.0, 1.0, 3.0, 1.5, 1.5, 0.5,
        0.5, 0.0, 0.3, 0.5, 0.5, 1.5, 3.0, 1.0, 3.0, 1.5, 3.0,
        2.0, 3.0, 1.5, 3.0, 1.0, 3.0, 2.0, 2.0, 2.0, 2.0, 2.0,
        2.0, 1.0, 1.0, 1.5, 3.0, 0.5, 0.5, 1.0, 3.0, 0.5, 0.5,
        2.0, 2.0, 1.5, 3.0, 0.5, 0.5, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // G
    [
        3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.5,
        0.5, 0.3, 0.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 0.5, 0.5,
        3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // h
    [
        2.0, 3.0, 0.5, 0.5, 1.5, 3.0, 1.5, 3.0, 2.0, 2.0, 1.0,
        3.0, 0.5, 0.5, 0.0, 0.3, 1.0, 3.0, 0.5, 0.5, 1.0, 3.0,
        1.5, 3.0, 1.0, 3.0, 0.5, 0.5, 1.5, 1.5, 2.0, 2.0, 2.0,
        2.0, 1.5, 1.5, 2.0, 3.0, 1.0, 1.0, 0.5, 0.5, 1.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 0.5, 0.5, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // H
    [
        3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 0.5, 0.5, 0.3, 0.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // i
    [
        2.0, 3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0,
        3.0, 1.5, 3.0, 1.0, 3.0, 0.0, 0.3, 0.5, 0.5, 0.5, 0.5,
        1.0, 3.0, 1.0, 3.0, 1.0, 3.0, 0.5, 0.5, 1.0, 1.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 1.5, 1.5, 0.5, 0.5, 2.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 1.0, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // I
    [
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 0.3, 0.0, 0.5, 0.5, 0.5, 0.5,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // j
    [
        2.0, 3.0, 1.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 1.5,
        3.0, 1.0, 3.0, 0.5, 0.5, 0.5, 0.5, 0.0, 0.3, 0.5, 0.5,
        1.0, 3.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.5, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 1.5, 1.5, 0.5, 0.5, 1.5, 3.0,
        2.0, 2.0, 2.0, 3.0, 1.0, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // J
    [
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 0.3, 0.0, 0.5, 0.5,
        3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // k
    [
        2.0, 3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0,
        3.0, 1.5, 3.0, 1.0, 3.0, 0.5, 3.0, 0.5, 0.5, 0.0, 0.3,
        0.5, 0.5, 0.5, 0.5, 1.0, 3.0, 0.5, 0.5, 1.0, 1.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 2.0, 2.0, 1.0, 3.0, 2.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 1.5, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // K
    [
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 0.3, 0.0,
        0.5, 0.5, 0.5, 0.5, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // l
    [
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0,
        3.0, 2.0, 3.0, 1.5, 3.0, 1.0, 3.0, 1.0, 3.0, 0.5, 0.5,
        0.0, 0.3, 1.0, 3.0, 1.5, 3.0, 0.5, 0.5, 0.5, 0.5, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 2.0, 2.0, 1.5, 3.0, 2.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // L
    [
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5,
        0.3, 0.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // m
    [
        2.0, 3.0, 1.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0,
        3.0, 1.5, 3.0, 1.0, 3.0, 1.0, 3.0, 0.5, 0.5, 0.5, 0.5,
        1.0, 3.0, 0.0, 0.3, 0.5, 0.5, 1.0, 1.0, 1.5, 1.5, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 2.0, 2.0, 1.0, 3.0, 1.5, 3.0,
        2.0, 2.0, 2.0, 3.0, 1.5, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // M
    [
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 0.5, 0.5,
        3.0, 3.0, 0.3, 0.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // n
    [
        2.0, 3.0, 0.5, 0.5, 1.5, 3.0, 2.0, 3.0, 2.0, 2.0, 1.5,
        3.0, 1.0, 3.0, 0.5, 0.5, 1.0, 3.0, 0.5, 0.5, 1.0, 3.0,
        1.5, 3.0, 0.5, 0.5, 0.0, 0.3, 1.5, 1.5, 2.0, 2.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 1.5, 1.5, 1.0, 3.0, 1.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 1.0, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // N
    [
        3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0,
        3.0, 3.0, 0.5, 0.5, 0.3, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // o
    [
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0,
        3.0, 2.0, 3.0, 1.5, 3.0, 0.5, 0.5, 1.0, 3.0, 0.5, 0.5,
        0.5, 0.5, 1.0, 3.0, 1.5, 3.0, 0.0, 0.3, 0.5, 0.5, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 2.0, 2.0, 1.0, 3.0, 2.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 1.5, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // O
    [
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0,
        3.0, 2.0, 3.0, 1.5, 3.0, 0.5, 0.5, 1.0, 3.0, 0.5, 0.5,
        0.5, 0.5, 1.0, 3.0, 1.5, 3.0, 0.3, 0.0, 0.5, 0.5, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 2.0, 2.0, 1.0, 3.0, 2.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 1.5, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // p
    [
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0,
        3.0, 2.0, 3.0, 2.0, 3.0, 1.0, 3.0, 1.0, 3.0, 1.0, 3.0,
        0.5, 0.5, 1.5, 3.0, 2.0, 3.0, 0.5, 0.5, 0.0, 0.3, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 2.0, 2.0, 1.5, 3.0, 2.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // P
    [
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0,
        3.0, 2.0, 3.0, 2.0, 3.0, 1.0, 3.0, 1.5, 3.0, 1.0, 3.0,
        0.5, 0.5, 1.5, 3.0, 2.0, 3.0, 0.5, 0.5, 0.3, 0.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 3.0, 2.0, 2.0, 1.5, 3.0, 2.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // q
    [
        0.5, 0.5, 2.0, 3.0, 2.0, 3.0, 1.5, 3.0, 1.0, 1.0, 2.0,
        3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 0.0,
        0.3, 1.5, 1.5, 1.0, 3.0, 2.0, 2.0, 2.0, 3.0, 0.5, 3.0,
        0.5, 0.5, 1.5, 3.0, 2.0, 3.0, 1.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // Q
    [
        0.5, 0.5, 2.0, 3.0, 2.0, 3.0, 1.5, 3.0, 1.0, 1.0, 2.0,
        3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 0.3,
        0.0, 1.5, 1.5, 1.0, 3.0, 2.0, 2.0, 2.0, 3.0, 0.5, 3.0,
        0.5, 0.5, 1.5, 3.0, 2.0, 3.0, 1.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // r
    [
        1.5, 3.0, 1.5, 3.0, 1.0, 3.0, 0.5, 0.5, 0.5, 0.5, 0.5,
        0.5, 1.0, 3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 1.5,
        1.5, 0.0, 0.3, 1.0, 3.0, 0.5, 0.5, 1.5, 3.0, 1.0, 3.0,
        1.0, 1.0, 1.0, 3.0, 1.0, 3.0, 0.5, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // R
    [
        1.5, 3.0, 1.5, 3.0, 1.0, 3.0, 0.5, 0.5, 0.5, 0.5, 0.5,
        0.5, 1.0, 3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 1.5,
        1.5, 0.3, 0.0, 1.0, 3.0, 0.5, 0.5, 1.5, 3.0, 1.0, 3.0,
        1.0, 1.0, 1.0, 3.0, 1.0, 3.0, 0.5, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // s
    [
        0.5, 0.5, 2.0, 3.0, 1.0, 3.0, 0.5, 0.5, 0.5, 0.5, 1.0,
        3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 1.0,
        1.0, 1.0, 1.0, 0.0, 0.3, 1.5, 1.5, 2.0, 3.0, 1.5, 3.0,
        0.5, 0.5, 0.5, 0.5, 2.0, 3.0, 0.5, 0.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // S
    [
        0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 0.3, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        0.5, 0.5, 0.5, 0.5, 3.0, 3.0, 0.5, 0.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // t
    [
        2.0, 3.0, 1.0, 3.0, 0.5, 3.0, 1.0, 3.0, 0.5, 1.0, 0.5,
        0.5, 0.5, 0.5, 1.0, 3.0, 1.5, 3.0, 1.5, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 1.5, 3.0, 2.0, 2.0, 2.0, 2.0, 2.0,
        2.0, 0.5, 0.5, 1.5, 3.0, 0.0, 0.3, 1.0, 3.0, 1.0, 3.0,
        0.5, 1.5, 0.5, 3.0, 0.5, 0.5, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // T
    [
        2.0, 3.0, 1.0, 3.0, 0.5, 3.0, 1.0, 3.0, 0.5, 1.0, 0.5,
        0.5, 0.5, 0.5, 1.0, 3.0, 1.5, 3.0, 1.5, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 1.5, 3.0, 2.0, 2.0, 2.0, 2.0, 2.0,
        2.0, 0.5, 0.5, 1.5, 3.0, 0.3, 0.0, 1.0, 3.0, 1.0, 3.0,
        0.5, 1.5, 0.5, 3.0, 0.5, 0.5, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // u
    [
        2.0, 3.0, 1.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 1.5,
        3.0, 1.0, 3.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 1.0, 3.0,
        1.5, 3.0, 1.0, 3.0, 1.0, 3.0, 1.0, 1.0, 1.5, 1.5, 2.0,
        2.0, 1.5, 1.5, 2.0, 3.0, 1.0, 1.0, 0.0, 0.3, 1.5, 3.0,
        2.0, 2.0, 2.0, 3.0, 0.5, 0.5, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // U
    [
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.3, 0.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // v
    [
        2.0, 3.0, 0.5, 0.5, 0.5, 0.5, 1.0, 3.0, 1.5, 1.5, 0.5,
        0.5, 0.5, 0.5, 1.0, 3.0, 2.0, 3.0, 1.5, 3.0, 2.0, 3.0,
        2.0, 3.0, 1.5, 3.0, 1.0, 3.0, 2.0, 2.0, 2.0, 2.0, 0.5,
        0.5, 1.0, 1.0, 1.5, 3.0, 1.0, 1.0, 1.5, 3.0, 0.0, 0.3,
        2.0, 2.0, 1.0, 3.0, 1.0, 3.0, 1.5, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // V
    [
        3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 0.5,
        0.5, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.3, 0.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // w
    [
        0.5, 0.5, 2.0, 3.0, 0.5, 3.0, 1.0, 3.0, 0.5, 0.5, 1.5,
        3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 0.5,
        0.5, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5, 2.0, 3.0, 2.0, 3.0,
        0.0, 0.3, 0.5, 3.0, 2.0, 3.0, 1.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // W
    [
        0.5, 0.5, 2.0, 3.0, 0.5, 3.0, 1.0, 3.0, 0.5, 0.5, 1.5,
        3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 0.5,
        0.5, 1.0, 1.0, 0.5, 0.5, 1.5, 1.5, 2.0, 3.0, 2.0, 3.0,
        0.3, 0.0, 1.0, 3.0, 2.0, 3.0, 1.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // x
    [
        1.0, 3.0, 1.5, 3.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 1.0,
        3.0, 1.5, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 1.5,
        1.5, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5, 2.0, 3.0, 1.0, 3.0,
        0.5, 1.0, 0.0, 0.3, 2.0, 3.0, 0.5, 0.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // X
    [
        3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 0.3, 0.0, 3.0, 3.0, 0.5, 0.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // y
    [
        2.0, 3.0, 1.0, 3.0, 1.5, 3.0, 1.5, 3.0, 1.5, 1.5, 1.0,
        3.0, 0.5, 0.5, 0.5, 0.5, 1.0, 3.0, 1.0, 3.0, 1.5, 3.0,
        2.0, 3.0, 1.5, 3.0, 1.0, 3.0, 1.5, 1.5, 2.0, 2.0, 2.0,
        2.0, 1.0, 1.0, 2.0, 3.0, 0.5, 0.5, 0.5, 0.5, 1.0, 3.0,
        2.0, 2.0, 2.0, 3.0, 0.0, 0.3, 2.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // Y
    [
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 0.5, 0.5, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 0.5, 0.5, 0.5, 0.5, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 0.3, 0.0, 3.0, 3.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // z
    [
        0.5, 0.5, 2.0, 3.0, 1.0, 3.0, 1.0, 3.0, 1.0, 1.0, 1.5,
        3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
        2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 2.0, 1.0,
        1.0, 0.5, 0.5, 0.5, 0.5, 2.0, 2.0, 2.0, 3.0, 1.5, 3.0,
        1.0, 1.0, 0.5, 0.5, 2.0, 3.0, 0.0, 0.3, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // Z
    [
        0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        3.0, 3.0, 0.5, 0.5, 3.0, 3.0, 0.3, 0.0, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 100.0, 100.0, 1.0,
    ],
    // 0
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 0.0, 2.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // 1
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 0.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // 2
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 0.0,
        2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // 3
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 2.0,
        0.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // 4
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 2.0,
        2.0, 0.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // 5
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 2.0,
        2.0, 2.0, 0.0, 2.0, 2.0, 2.0, 2.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // 6
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 2.0,
        2.0, 2.0, 2.0, 0.0, 2.0, 2.0, 2.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // 7
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 0.0, 2.0, 2.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // 8
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 2.0, 0.0, 2.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // 9
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 0.0, 1.5, 100.0, 100.0, 2.0,
    ],
    // space
    [
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
        1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 0.0, 100.0, 100.0, 0.5,
    ],
    // $
    [
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 0.0, 100.0, 0.15,
    ],
    // #
    [
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
        100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 0.0, 0.2,
    ],
    // ins/del
    [
        1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0,
        2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 0.5, 0.15, 0.2, 1.0,
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_index() {
        assert_eq!(symbol_index('a'), Some(0));
        assert_eq!(symbol_index('A'), Some(1));
        assert_eq!(symbol_index('z'), Some(50));
        assert_eq!(symbol_index('Z'), Some(51));
        assert_eq!(symbol_index('0'), Some(52));
        assert_eq!(symbol_index('9'), Some(61));
        assert_eq!(symbol_index(' '), Some(SPACE_INDEX));
        assert_eq!(symbol_index('.'), None);
        assert_eq!(symbol_index('ㄱ'), None);
        assert_eq!(symbol_index('ａ'), None);
    }

    #[test]
    fn test_diagonal_is_zero() {
        for i in 0..EDIT_INDEX {
            assert_eq!(COST_TABLE[i][i], 0.0, "row {}", i);
        }
    }

    #[test]
    fn test_same_key_case_cost() {
        for k in 0..26 {
            assert_eq!(COST_TABLE[k * 2][k * 2 + 1], 0.3);
            assert_eq!(COST_TABLE[k * 2 + 1][k * 2], 0.3);
        }
    }

    #[test]
    fn test_edit_costs() {
        let a = symbol_index('a').unwrap();
        let one = symbol_index('1').unwrap();
        // 삽입
        assert_eq!(COST_TABLE[a][EDIT_INDEX], 1.0);
        assert_eq!(COST_TABLE[one][EDIT_INDEX], 2.0);
        assert_eq!(COST_TABLE[SPACE_INDEX][EDIT_INDEX], 0.5);
        // 삭제
        assert_eq!(COST_TABLE[EDIT_INDEX][a], 1.0);
        assert_eq!(COST_TABLE[EDIT_INDEX][one], 2.0);
        assert_eq!(COST_TABLE[EDIT_INDEX][SPACE_INDEX], 0.5);
    }

    #[test]
    fn test_class_boundaries() {
        let r = symbol_index('r').unwrap();
        let z = symbol_index('z').unwrap();
        let one = symbol_index('1').unwrap();
        let two = symbol_index('2').unwrap();
        assert_eq!(COST_TABLE[z][r], 0.5);
        assert_eq!(COST_TABLE[r][one], 1.5);
        assert_eq!(COST_TABLE[r][SPACE_INDEX], 1.5);
        assert_eq!(COST_TABLE[SPACE_INDEX][one], 1.5);
        assert_eq!(COST_TABLE[one][two], 2.0);
    }

    #[test]
    fn test_known_asymmetric_cells_preserved() {
        let e = symbol_index('e').unwrap();
        let d_upper = symbol_index('D').unwrap();
        assert_eq!(COST_TABLE[e][d_upper], 3.0);
        assert_eq!(COST_TABLE[d_upper][e], 0.5);
    }
}
