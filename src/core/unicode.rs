//! 유니코드 한글 조합/분해 및 문자 분류 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const HANGUL_SYLLABLE_END: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 순서의 호환용 자모
#[rustfmt::skip]
const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 인덱스 순서의 호환용 자모
#[rustfmt::skip]
const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 인덱스 순서의 호환용 자모 (0 = 종성 없음)
#[rustfmt::skip]
const JONGSEONG: [Option<char>; 28] = [
    None,      Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'),
    Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'),
    Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'),
    Some('ㅇ'), Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jungseong = (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 호환용 자모의 초성 인덱스 (초성이 될 수 없으면 None)
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG.iter().position(|&x| x == c).map(|i| i as u32)
}

/// 호환용 자모의 중성 인덱스
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG.iter().position(|&x| x == c).map(|i| i as u32)
}

/// 호환용 자모의 종성 인덱스 (종성이 될 수 없으면 None, 0은 반환하지 않음)
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG.iter().position(|&x| x == Some(c)).map(|i| i as u32)
}

/// 초성 인덱스 -> 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG.get(jung as usize).copied()
}

/// 종성 인덱스 -> 호환용 자모 (0 = 종성 없음은 None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    JONGSEONG.get(jong as usize).copied().flatten()
}

/// 문자 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// 초성이 될 수 있는 자음 (ㄱ, ㄸ 등 19개)
    Lead,
    /// 모음 (21개)
    Vowel,
    /// 종성으로만 쓰이는 겹자음 (ㄳ, ㄺ 등 11개)
    TailCapable,
    /// 그 외 모든 문자 (완성형 음절 포함)
    Other,
}

/// 호환용 자모 한 글자를 분류
pub fn classify(c: char) -> CharClass {
    if choseong_index(c).is_some() {
        CharClass::Lead
    } else if jungseong_index(c).is_some() {
        CharClass::Vowel
    } else if jongseong_index(c).is_some() {
        CharClass::TailCapable
    } else {
        CharClass::Other
    }
}

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END).contains(&(c as u32))
}

/// 자음 자모인지 확인 (겹자음 포함)
pub fn is_consonant_char(c: char) -> bool {
    matches!(classify(c), CharClass::Lead | CharClass::TailCapable)
}

/// 모음 자모인지 확인
pub fn is_vowel_char(c: char) -> bool {
    classify(c) == CharClass::Vowel
}

/// 자모(자음 또는 모음)인지 확인
pub fn is_jamo_char(c: char) -> bool {
    classify(c) != CharClass::Other
}

/// 완성형 음절이거나 낱자모인지 확인
pub fn is_hangul_char(c: char) -> bool {
    is_syllable(c) || is_jamo_char(c)
}

/// 빈 문자열은 false, 그 외에는 모든 문자가 조건을 만족해야 true
fn all_chars(text: &str, pred: impl Fn(char) -> bool) -> bool {
    !text.is_empty() && text.chars().all(pred)
}

/// 모든 문자가 한글(완성형 또는 낱자모)인지 확인
pub fn is_hangul(text: &str) -> bool {
    all_chars(text, is_hangul_char)
}

/// 모든 문자가 낱자모인지 확인
pub fn is_jamo(text: &str) -> bool {
    all_chars(text, is_jamo_char)
}

/// 모든 문자가 자음인지 확인
pub fn is_jaeum(text: &str) -> bool {
    all_chars(text, is_consonant_char)
}

/// 모든 문자가 모음인지 확인
pub fn is_moeum(text: &str) -> bool {
    all_chars(text, is_vowel_char)
}

/// 모든 문자가 ASCII인지 확인
pub fn is_ascii(text: &str) -> bool {
    all_chars(text, |c| c.is_ascii())
}
