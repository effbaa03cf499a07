//! 통합 테스트 - 공개 API

use hdku::core::unicode::{HANGUL_SYLLABLE_BASE, HANGUL_SYLLABLE_END};
use hdku::distance::edit_distance;
use hdku::{
    jamos_to_syllable, keystroke_aware_distance, split_by_divider, syllable_to_jamos, to_jamos,
    to_keystrokes, JamoComposer, KeystrokeComposer,
};

#[test]
fn test_jamo_composer() {
    let mut am = JamoComposer::new(false);
    assert_eq!(am.convert("ㄱㅗㄱㅏㅁㅈㅏ"), "고감자");
    assert_eq!(am.convert("ㄱㅗㄱㅏㅁㅁㅈㅏ"), "ㄱㅗㄱㅏㅁㅁㅈㅏ"); // ㅁㅁ 이중 초성
    let mut am = JamoComposer::new(true);
    assert_eq!(am.convert("ㄱㅗㄱㅏㅁㅁㅈㅏ"), "고감ㅁ자");
}

#[test]
fn test_keystroke_composer() {
    let mut kam = KeystrokeComposer::new(false);
    assert_eq!(kam.convert("rhrkawk"), "고감자");
    assert_eq!(kam.convert("rhrkaawk"), "rhrkaawk");
    let mut kam = KeystrokeComposer::new(true);
    assert_eq!(kam.convert("rhrkaawk"), "고감ㅁ자");
}

#[test]
fn test_keystroke_composer_sentences() {
    let mut kam = KeystrokeComposer::new(false);
    assert_eq!(kam.convert("wjsgmldnjsdkfa"), "전희원앎");
    assert_eq!(kam.convert("zjavbxj"), "컴퓨터");
    assert_eq!(kam.convert("vmfhrmfoa"), "프로그램");
    assert_eq!(kam.convert("sksms wjdakf glaemfdj"), "나는 정말 힘들어");
}

#[test]
fn test_every_syllable_roundtrips_through_jamos() {
    for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END {
        let c = char::from_u32(code).unwrap();
        let t = syllable_to_jamos(c).unwrap();
        assert_eq!(jamos_to_syllable(t.lead, t.vowel, t.tail), Some(c));
    }
}

#[test]
fn test_every_syllable_recomposes_from_keystrokes() {
    let mut kam = KeystrokeComposer::new(false);
    for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END {
        let s = char::from_u32(code).unwrap().to_string();
        assert_eq!(kam.convert(&to_keystrokes(&s, false, false)), s);
    }
}

#[test]
fn test_text_recomposes_from_keystrokes() {
    let mut kam = KeystrokeComposer::new(false);
    let mut am = JamoComposer::new(false);
    for text in [
        "안녕하세요",
        "고감자",
        "닭이 울었다",
        "아버지가 방에 들어가셨다",
        "없어요 읽어요 삶은",
        "왜 괜찮아",
    ] {
        assert_eq!(kam.convert(&to_keystrokes(text, false, false)), text);
        assert_eq!(am.convert(&to_jamos(text, false)), text);
    }
}

#[test]
fn test_keystrokes_fixture() {
    assert_eq!(to_keystrokes("전희원", true, true), "ｗｊｓ｜ｇｍｌ｜ｄｎｊｓ｜");
    assert_eq!(to_jamos("전희원", true), "ㅈㅓㄴ｜ㅎㅢ｜ㅇㅝㄴ｜");
    assert_eq!(
        split_by_divider(&to_jamos("전희원", true)),
        vec!["ㅈㅓㄴ", "ㅎㅢ", "ㅇㅝㄴ"]
    );
}

#[test]
fn test_edit_distance_degenerate() {
    assert_eq!(edit_distance("", ""), Ok(1.0));
    assert_eq!(edit_distance("1", ""), Ok(1.0));
    assert_eq!(edit_distance("dd", ""), Ok(2.0));
}

#[test]
fn test_keystroke_aware_distance() {
    let d = |a, b| keystroke_aware_distance(a, b).unwrap();
    assert_eq!(d("안녕하세요", "안녕하세요"), 0.0);
    assert_eq!(d("안녕하세요", "안녕허세요"), 0.5);
    assert_eq!(d("안녕하세요", "안녕하셈"), 2.0);
    assert_eq!(
        d("찡그린 상판때기가 너무 보기 싫어", "찡그린 상판떼기가 너무 보기 싫어"),
        0.5
    );
    assert_eq!(
        d("찡그린 상판때기가 너무 보기 싫어", "찡그린 상판때기게 너무 보기 싫어"),
        1.0
    );
}
