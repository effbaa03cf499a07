//! 한글 -> 두벌식 키 입력 / 자모 문자열 변환
//!
//! 완성형 한글과 낱자모를 두벌식 자판의 영문 키 시퀀스나 자모 시퀀스로 풀어냅니다.
//! 한글이 아닌 문자는 그대로 유지됩니다.

use crate::core::syllable::syllable_to_jamos;

/// 원문 한 글자의 끝을 표시하는 구분자 (U+FF5C, 전각)
pub const DIVIDER: char = '｜';
/// 구분자와 비슷하게 생긴 ASCII 문자. 구분자가 아니라 일반 데이터로 취급된다.
pub const ASCII_DIVIDER: char = '|';

const FULLWIDTH_OFFSET: u32 = 0xFF21 - 0x41;

/// ASCII 영문자를 전각 문자로 변환 (영문자가 아니면 None)
pub fn to_fullwidth(c: char) -> Option<char> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    char::from_u32(c as u32 + FULLWIDTH_OFFSET)
}

/// 전각 영문자를 ASCII로 되돌림 (전각 영문자가 아니면 None)
pub fn from_fullwidth(c: char) -> Option<char> {
    let half = (c as u32).checked_sub(FULLWIDTH_OFFSET).and_then(char::from_u32)?;
    half.is_ascii_alphabetic().then_some(half)
}

/// 한글 문자열을 두벌식 키 시퀀스로 변환
///
/// - `fullwidth`: 키 문자를 전각 영문자로 출력 (원문의 ASCII와 구분)
/// - `divider`: 원문 한 글자마다 뒤에 [`DIVIDER`]를 붙임
///
/// # Examples
/// ```
/// use hdku::to_keystrokes;
/// assert_eq!(to_keystrokes("안녕", false, false), "dkssud");
/// assert_eq!(to_keystrokes("전희원", false, true), "wjs｜gml｜dnjs｜");
/// ```
pub fn to_keystrokes(text: &str, fullwidth: bool, divider: bool) -> String {
    let mut result = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match syllable_to_jamos(c) {
            Some(triple) => {
                for key in triple.jamos().flat_map(|j| j.keystrokes().chars()) {
                    if fullwidth {
                        result.push(to_fullwidth(key).unwrap_or(key));
                    } else {
                        result.push(key);
                    }
                }
            }
            // 한글이 아닌 문자는 그대로 유지
            None => result.push(c),
        }
        if divider {
            result.push(DIVIDER);
        }
    }

    result
}

/// 한글 문자열을 호환용 자모 시퀀스로 변환 (종성 없음은 생략)
///
/// # Examples
/// ```
/// use hdku::to_jamos;
/// assert_eq!(to_jamos("전희원", false), "ㅈㅓㄴㅎㅢㅇㅝㄴ");
/// ```
pub fn to_jamos(text: &str, divider: bool) -> String {
    let mut result = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match syllable_to_jamos(c) {
            Some(triple) => result.extend(triple.jamos().map(|j| j.as_char())),
            None => result.push(c),
        }
        if divider {
            result.push(DIVIDER);
        }
    }

    result
}

/// 구분자가 붙은 출력을 원문 한 글자 단위로 다시 나눔
///
/// 마지막 구분자 뒤의 빈 조각은 버린다.
pub fn split_by_divider(text: &str) -> Vec<&str> {
    let mut units: Vec<&str> = text.split(DIVIDER).collect();
    if units.last() == Some(&"") {
        units.pop();
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_syllables() {
        assert_eq!(to_keystrokes("가", false, false), "rk");
        assert_eq!(to_keystrokes("나", false, false), "sk");
        assert_eq!(to_keystrokes("각", false, false), "rkr");
        assert_eq!(to_keystrokes("한글", false, false), "gksrmf");
    }

    #[test]
    fn test_complex_vowels_and_tails() {
        assert_eq!(to_keystrokes("완", false, false), "dhks");
        assert_eq!(to_keystrokes("웬", false, false), "dnps");
        assert_eq!(to_keystrokes("의", false, false), "dml");
        assert_eq!(to_keystrokes("읽", false, false), "dlfr");
        assert_eq!(to_keystrokes("없", false, false), "djqt");
        assert_eq!(to_keystrokes("삶", false, false), "tkfa");
    }

    #[test]
    fn test_ssang_consonants() {
        assert_eq!(to_keystrokes("까", false, false), "Rk");
        assert_eq!(to_keystrokes("빠", false, false), "Qk");
        assert_eq!(to_keystrokes("있", false, false), "dlT");
    }

    #[test]
    fn test_isolated_jamo() {
        assert_eq!(to_keystrokes("ㄱ", false, false), "r");
        assert_eq!(to_keystrokes("ㄳ", false, false), "rt");
        assert_eq!(to_keystrokes("ㅘ", false, false), "hk");
        assert_eq!(to_jamos("ㄱㅏ", false), "ㄱㅏ");
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(to_keystrokes("가1나", false, false), "rk1sk");
        assert_eq!(to_keystrokes("안녕!", false, false), "dkssud!");
        assert_eq!(to_keystrokes("abc", false, false), "abc");
        assert_eq!(to_keystrokes("", true, true), "");
    }

    #[test]
    fn test_fullwidth_and_divider() {
        assert_eq!(to_keystrokes("전희원", true, true), "ｗｊｓ｜ｇｍｌ｜ｄｎｊｓ｜");
        assert_eq!(to_keystrokes("전희원", false, true), "wjs｜gml｜dnjs｜");
        assert_eq!(to_keystrokes("전희원", false, false), "wjsgmldnjs");
        assert_eq!(to_keystrokes("전희원", true, false), "ｗｊｓｇｍｌｄｎｊｓ");
    }

    #[test]
    fn test_fullwidth_leaves_non_hangul_alone() {
        assert_eq!(to_keystrokes("a가", true, false), "aｒｋ");
    }

    #[test]
    fn test_to_jamos() {
        assert_eq!(to_jamos("전희원", false), "ㅈㅓㄴㅎㅢㅇㅝㄴ");
        assert_eq!(to_jamos("전희원", true), "ㅈㅓㄴ｜ㅎㅢ｜ㅇㅝㄴ｜");
        assert_eq!(to_jamos("a b", true), "a｜ ｜b｜");
    }

    #[test]
    fn test_ascii_divider_is_data() {
        assert_eq!(to_keystrokes("가|나", false, true), "rk｜|｜sk｜");
        assert_eq!(split_by_divider("rk｜|｜sk｜"), vec!["rk", "|", "sk"]);
    }

    #[test]
    fn test_split_by_divider() {
        assert_eq!(
            split_by_divider(&to_keystrokes("전희원", false, true)),
            vec!["wjs", "gml", "dnjs"]
        );
        assert!(split_by_divider("").is_empty());
    }

    #[test]
    fn test_fullwidth_conversion() {
        assert_eq!(to_fullwidth('a'), Some('ａ'));
        assert_eq!(to_fullwidth('Z'), Some('Ｚ'));
        assert_eq!(to_fullwidth('1'), None);
        assert_eq!(from_fullwidth('ｗ'), Some('w'));
        assert_eq!(from_fullwidth('w'), None);
        assert_eq!(from_fullwidth('｜'), None);
    }

    #[test]
    fn test_roundtrip_conversion() {
        use crate::core::converter::keystrokes_to_hangul;

        let keys = "dkssud"; // 안녕
        let korean = keystrokes_to_hangul(keys);
        assert_eq!(korean, "안녕");
        assert_eq!(to_keystrokes(&korean, false, false), keys);
    }
}
