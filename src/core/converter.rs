//! 자모/키 입력 -> 한글 변환기

use crate::core::hangul_fsm::{Composer, JamoDecoder};
use crate::core::jamo_mapper::{map_to_jamo, Jamo};

/// 호환용 자모 문자를 그대로 자모로 받는 해석기
#[derive(Debug, Clone, Copy, Default)]
pub struct JamoInput;

impl JamoDecoder for JamoInput {
    fn decode(&self, token: char) -> Option<Jamo> {
        Jamo::from_char(token)
    }
}

/// 두벌식 영문 키 하나를 자모로 해석하는 해석기
#[derive(Debug, Clone, Copy, Default)]
pub struct KeystrokeInput;

impl JamoDecoder for KeystrokeInput {
    fn decode(&self, token: char) -> Option<Jamo> {
        map_to_jamo(token)
    }
}

/// 자모 시퀀스 조합기 ("ㄱㅏ" -> "가")
pub type JamoComposer = Composer<JamoInput>;
/// 두벌식 키 시퀀스 조합기 ("rk" -> "가")
pub type KeystrokeComposer = Composer<KeystrokeInput>;

/// 영문 키 시퀀스를 한글로 변환 (강제 변환 없음)
/// 조합할 수 없는 단어는 원문 그대로 유지
pub fn keystrokes_to_hangul(input: &str) -> String {
    KeystrokeComposer::new(false).convert(input)
}

/// 자모 시퀀스를 한글로 변환 (강제 변환 없음)
pub fn jamos_to_hangul(input: &str) -> String {
    JamoComposer::new(false).convert(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(keystrokes_to_hangul("rkskek"), "가나다");
        assert_eq!(keystrokes_to_hangul("dkssudgktpdy"), "안녕하세요");
        assert_eq!(keystrokes_to_hangul("gksrmf"), "한글");
        assert_eq!(keystrokes_to_hangul("dkswl"), "안지");
    }

    #[test]
    fn test_complex_vowel_and_tail() {
        assert_eq!(keystrokes_to_hangul("dhksfy"), "완료");
        assert_eq!(keystrokes_to_hangul("dlfr"), "읽");
        assert_eq!(keystrokes_to_hangul("dlfrdj"), "읽어");
        assert_eq!(keystrokes_to_hangul("dkfrk"), "알가");
        assert_eq!(keystrokes_to_hangul("ekfrtm"), "닭스");
        assert_eq!(keystrokes_to_hangul("qkqtk"), "밥사");
    }

    #[test]
    fn test_double_consonant() {
        assert_eq!(keystrokes_to_hangul("Tks"), "싼");
        assert_eq!(keystrokes_to_hangul("Rk"), "까");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(keystrokes_to_hangul("123rksk"), "123가나");
        assert_eq!(keystrokes_to_hangul("rk!sk"), "가!나");
        assert_eq!(keystrokes_to_hangul("rkXsk"), "가X나");
        assert_eq!(keystrokes_to_hangul("gksrmf thtm"), "한글 소스");
    }

    #[test]
    fn test_incomplete_words_pass_through() {
        assert_eq!(keystrokes_to_hangul("r"), "r");
        assert_eq!(keystrokes_to_hangul("rs"), "rs");
        assert_eq!(keystrokes_to_hangul("k"), "k");
        assert_eq!(keystrokes_to_hangul("kr"), "kr");
        assert_eq!(keystrokes_to_hangul("rkE"), "rkE");
    }

    #[test]
    fn test_forced_incomplete_words() {
        let mut c = KeystrokeComposer::new(true);
        assert_eq!(c.convert("r"), "ㄱ");
        assert_eq!(c.convert("rs"), "ㄱㄴ");
        assert_eq!(c.convert("kh"), "ㅏㅗ");
        assert_eq!(c.convert("khk"), "ㅏㅘ");
        assert_eq!(c.convert("kr"), "ㅏㄱ");
        assert_eq!(c.convert("ddk"), "ㅇ아");
        assert_eq!(c.convert("rkfrr"), "갉ㄱ");
        assert_eq!(c.convert("rkE"), "가ㄸ");
        assert_eq!(c.convert("rk rr"), "가 ㄱㄱ");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(keystrokes_to_hangul(""), "");
        assert_eq!(jamos_to_hangul(""), "");
    }

    #[test]
    fn test_jamo_input() {
        assert_eq!(jamos_to_hangul("ㄱㅗㄱㅏㅁㅈㅏ"), "고감자");
        assert_eq!(jamos_to_hangul("ㅈㅓㄴㅎㅡㅣㅇㅜㅓㄴ"), "전희원");
        assert_eq!(jamos_to_hangul("ㅇㅏㄹㅁ"), "앎");
        assert_eq!(jamos_to_hangul("\"ㅇㅏㄹㅁ"), "\"앎");
        assert_eq!(jamos_to_hangul("ㄷㅏㄹㄱㅇㅣ"), "닭이");
        // 키 문자는 자모 조합기에서 변환 불가 토큰
        assert_eq!(jamos_to_hangul("rk"), "rk");
    }

    #[test]
    fn test_jamo_input_cluster_as_lead() {
        assert_eq!(jamos_to_hangul("ㄳㅏ"), "ㄳㅏ");
        assert_eq!(JamoComposer::new(true).convert("ㄳㅏ"), "ㄳㅏ");
    }
}
