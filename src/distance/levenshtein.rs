//! 두벌식 키 거리 가중 편집 거리

use log::trace;

use super::cost_table::{symbol_index, COST_TABLE, EDIT_INDEX};
use crate::core::keymap::to_keystrokes;

/// 편집 거리 계산 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// 비용표에 없는 기호 (영문자, 숫자, 공백 외)
    UnknownSymbol(char),
}

impl std::fmt::Display for DistanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceError::UnknownSymbol(c) => {
                write!(f, "비용표에 없는 기호: {:?} (U+{:04X})", c, *c as u32)
            }
        }
    }
}

impl std::error::Error for DistanceError {}

fn index_of(c: char) -> Result<usize, DistanceError> {
    symbol_index(c).ok_or(DistanceError::UnknownSymbol(c))
}

/// 치환 비용 (같은 기호면 0)
pub fn substitution_cost(a: char, b: char) -> Result<f64, DistanceError> {
    if a == b {
        return Ok(0.0);
    }
    Ok(COST_TABLE[index_of(a)?][index_of(b)?])
}

/// 삽입 비용
pub fn insertion_cost(c: char) -> Result<f64, DistanceError> {
    Ok(COST_TABLE[index_of(c)?][EDIT_INDEX])
}

/// 삭제 비용
pub fn deletion_cost(c: char) -> Result<f64, DistanceError> {
    Ok(COST_TABLE[EDIT_INDEX][index_of(c)?])
}

/// 키 입력 문자열 사이의 가중 편집 거리
///
/// 삽입/삭제/치환 비용으로 비용표를 사용한다. 삽입과 삭제 비용은 모두
/// `other` 쪽 현재 기호로 매긴다. `target` 길이만큼의 행 두 개만 유지한다.
///
/// 빈 문자열: 둘 다 비었으면 1, 한쪽만 비었으면 다른 쪽 글자 수.
///
/// # Errors
/// 영문자, 숫자, 공백이 아닌 기호가 있으면 [`DistanceError::UnknownSymbol`].
pub fn edit_distance(target: &str, other: &str) -> Result<f64, DistanceError> {
    let n = target.chars().count();
    let m = other.chars().count();
    if n == 0 || m == 0 {
        return Ok(if n == m { 1.0 } else { n.max(m) as f64 });
    }

    let source: Vec<usize> = target.chars().map(index_of).collect::<Result<_, _>>()?;
    let other: Vec<usize> = other.chars().map(index_of).collect::<Result<_, _>>()?;

    // 이전 행, 현재 행
    let mut prev: Vec<f64> = (0..=n).map(|i| i as f64).collect();
    let mut curr: Vec<f64> = vec![0.0; n + 1];

    for (j, &t) in other.iter().enumerate() {
        let insert = COST_TABLE[t][EDIT_INDEX];
        let delete = COST_TABLE[EDIT_INDEX][t];
        curr[0] = (j + 1) as f64;

        for (i, &s) in source.iter().enumerate() {
            let substitute = if s == t { 0.0 } else { COST_TABLE[s][t] };
            curr[i + 1] = (curr[i] + insert)
                .min(prev[i + 1] + delete)
                .min(prev[i] + substitute);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[n])
}

/// 두 한글 문자열의 오타 거리
///
/// 두 문자열을 두벌식 키 입력으로 바꾼 뒤 [`edit_distance`]를 계산한다.
///
/// # Examples
/// ```
/// use hdku::keystroke_aware_distance;
/// assert_eq!(keystroke_aware_distance("안녕하세요", "안녕허세요").unwrap(), 0.5);
/// ```
pub fn keystroke_aware_distance(a: &str, b: &str) -> Result<f64, DistanceError> {
    let a_keys = to_keystrokes(a, false, false);
    let b_keys = to_keystrokes(b, false, false);
    let distance = edit_distance(&a_keys, &b_keys)?;
    trace!("{} ({}) <-> {} ({}) = {}", a, a_keys, b, b_keys, distance);
    Ok(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: &str, b: &str) -> f64 {
        edit_distance(a, b).unwrap()
    }

    #[test]
    fn test_case_change() {
        assert_eq!(dist("rhrkawk", "rhrkaWk"), 0.3);
    }

    #[test]
    fn test_adjacent_key() {
        assert_eq!(dist("rhrkawk", "rhrkaqk"), 0.5);
        // 발음이 비슷한 자모
        assert_eq!(dist("z", "r"), 0.5);
    }

    #[test]
    fn test_insert_delete() {
        assert_eq!(dist("rhrkawk", "rhrkawkk"), 1.0);
        assert_eq!(dist("rhrkawk", "rhrkaw"), 1.0);
        assert_eq!(dist("rhrkawk ", "rhrkawk"), 1.0);
        assert_eq!(dist("rhrkawk", "rhrkawk "), 0.5);
        assert_eq!(dist("rhrkawk", "rhrkawk1"), 2.0);
    }

    #[test]
    fn test_substitutions_across_classes() {
        assert_eq!(dist("ab", "ba"), 2.0);
        assert_eq!(dist("1", "2"), 2.0);
        assert_eq!(dist("a", "1"), 1.5);
        assert_eq!(dist(" ", "a"), 1.5);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(dist("", ""), 1.0);
        assert_eq!(dist("1", ""), 1.0);
        assert_eq!(dist("", "1"), 1.0);
        assert_eq!(dist("d", ""), 1.0);
        assert_eq!(dist("dd", ""), 2.0);
        assert_eq!(dist("DD", ""), 2.0);
    }

    #[test]
    fn test_identical_is_zero() {
        assert_eq!(dist("dkssudgktpdy", "dkssudgktpdy"), 0.0);
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(edit_distance("a.", "ab"), Err(DistanceError::UnknownSymbol('.')));
        assert_eq!(edit_distance("ab", "가"), Err(DistanceError::UnknownSymbol('가')));
        assert_eq!(substitution_cost('a', '!'), Err(DistanceError::UnknownSymbol('!')));
        assert_eq!(insertion_cost('ㄱ'), Err(DistanceError::UnknownSymbol('ㄱ')));
        assert_eq!(deletion_cost('｜'), Err(DistanceError::UnknownSymbol('｜')));
        // 같은 기호끼리의 치환은 조회하지 않음
        assert_eq!(substitution_cost('.', '.'), Ok(0.0));
    }

    #[test]
    fn test_single_costs() {
        assert_eq!(substitution_cost('k', 'j'), Ok(0.5));
        assert_eq!(insertion_cost(' '), Ok(0.5));
        assert_eq!(deletion_cost('7'), Ok(2.0));
        assert_eq!(insertion_cost('Q'), Ok(1.0));
    }

    #[test]
    fn test_keystroke_aware_distance() {
        let d = |a, b| keystroke_aware_distance(a, b).unwrap();
        assert_eq!(d("안녕하세요", "안녕하세요"), 0.0);
        assert_eq!(d("안녕하세요", "안녕허세요"), 0.5);
        assert_eq!(d("안녕하세요", "안녕하셈"), 2.0);
        assert_eq!(d("아주 바뻐요", "아주 바빠요"), 0.5);
        assert_eq!(d("한글", "한귿"), 1.0);
        assert_eq!(d("가", ""), 2.0);
    }

    #[test]
    fn test_keystroke_aware_distance_rejects_punctuation() {
        assert_eq!(
            keystroke_aware_distance("가.", "나."),
            Err(DistanceError::UnknownSymbol('.'))
        );
    }
}
