//! 두벌식 자판 키 입력 <-> 한글 자모 매핑

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::unicode::{
    choseong_index, is_consonant_char, is_vowel_char, jongseong_index, jungseong_index,
};

/// 자모와 두벌식 키 입력 (1~2타)
///
/// 겹받침과 이중모음은 두 타로, 나머지는 한 타로 입력된다.
#[rustfmt::skip]
const KEYSTROKES: [(char, &str); 51] = [
    ('ㄱ', "r"),  ('ㄲ', "R"),  ('ㄳ', "rt"), ('ㄴ', "s"),  ('ㄵ', "sw"), ('ㄶ', "sg"),
    ('ㄷ', "e"),  ('ㄸ', "E"),  ('ㄹ', "f"),  ('ㄺ', "fr"), ('ㄻ', "fa"), ('ㄼ', "fq"),
    ('ㄽ', "ft"), ('ㄾ', "fx"), ('ㄿ', "fv"), ('ㅀ', "fg"), ('ㅁ', "a"),  ('ㅂ', "q"),
    ('ㅃ', "Q"),  ('ㅄ', "qt"), ('ㅅ', "t"),  ('ㅆ', "T"),  ('ㅇ', "d"),  ('ㅈ', "w"),
    ('ㅉ', "W"),  ('ㅊ', "c"),  ('ㅋ', "z"),  ('ㅌ', "x"),  ('ㅍ', "v"),  ('ㅎ', "g"),
    ('ㅏ', "k"),  ('ㅐ', "o"),  ('ㅑ', "i"),  ('ㅒ', "O"),  ('ㅓ', "j"),  ('ㅔ', "p"),
    ('ㅕ', "u"),  ('ㅖ', "P"),  ('ㅗ', "h"),  ('ㅘ', "hk"), ('ㅙ', "ho"), ('ㅚ', "hl"),
    ('ㅛ', "y"),  ('ㅜ', "n"),  ('ㅝ', "nj"), ('ㅞ', "np"), ('ㅟ', "nl"), ('ㅠ', "b"),
    ('ㅡ', "m"),  ('ㅢ', "ml"), ('ㅣ', "l"),
];

/// 홑자모 두 개 -> 겹자모
#[rustfmt::skip]
const FUSIONS: [((char, char), char); 18] = [
    (('ㄱ', 'ㅅ'), 'ㄳ'), (('ㄴ', 'ㅈ'), 'ㄵ'), (('ㄴ', 'ㅎ'), 'ㄶ'),
    (('ㄹ', 'ㄱ'), 'ㄺ'), (('ㄹ', 'ㅁ'), 'ㄻ'), (('ㄹ', 'ㅂ'), 'ㄼ'),
    (('ㄹ', 'ㅅ'), 'ㄽ'), (('ㄹ', 'ㅌ'), 'ㄾ'), (('ㄹ', 'ㅍ'), 'ㄿ'),
    (('ㄹ', 'ㅎ'), 'ㅀ'), (('ㅂ', 'ㅅ'), 'ㅄ'),
    (('ㅗ', 'ㅏ'), 'ㅘ'), (('ㅗ', 'ㅐ'), 'ㅙ'), (('ㅗ', 'ㅣ'), 'ㅚ'),
    (('ㅜ', 'ㅓ'), 'ㅝ'), (('ㅜ', 'ㅔ'), 'ㅞ'), (('ㅜ', 'ㅣ'), 'ㅟ'),
    (('ㅡ', 'ㅣ'), 'ㅢ'),
];

lazy_static! {
    static ref JAMO_TO_KEY: HashMap<char, &'static str> = KEYSTROKES.iter().copied().collect();
    static ref KEY_TO_JAMO: HashMap<&'static str, char> =
        KEYSTROKES.iter().map(|&(jamo, key)| (key, jamo)).collect();
    static ref FUSION: HashMap<(char, char), char> = FUSIONS.iter().copied().collect();
}

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JamoKind {
    /// 자음 (겹자음 포함)
    Consonant,
    /// 모음 (이중모음 포함)
    Vowel,
}

/// 호환용 자모 한 글자
///
/// 자음/모음 51자 중 하나임이 생성 시점에 보장된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jamo {
    ch: char,
    kind: JamoKind,
}

impl Jamo {
    /// 호환용 자모 문자에서 생성 (자모가 아니면 None)
    pub fn from_char(ch: char) -> Option<Self> {
        if is_consonant_char(ch) {
            Some(Self { ch, kind: JamoKind::Consonant })
        } else if is_vowel_char(ch) {
            Some(Self { ch, kind: JamoKind::Vowel })
        } else {
            None
        }
    }

    /// 키 입력 토큰(1~2타)에서 생성
    pub fn from_keystrokes(keys: &str) -> Option<Self> {
        KEY_TO_JAMO.get(keys).and_then(|&ch| Self::from_char(ch))
    }

    pub fn as_char(&self) -> char {
        self.ch
    }

    pub fn kind(&self) -> JamoKind {
        self.kind
    }

    /// 두벌식 키 입력 토큰
    pub fn keystrokes(&self) -> &'static str {
        // 생성 경로가 from_char 뿐이므로 항상 테이블에 존재
        JAMO_TO_KEY.get(&self.ch).copied().unwrap_or_default()
    }

    /// 자음인지 확인
    pub fn is_consonant(&self) -> bool {
        self.kind == JamoKind::Consonant
    }

    /// 모음인지 확인
    pub fn is_vowel(&self) -> bool {
        self.kind == JamoKind::Vowel
    }

    /// 초성 인덱스 반환 (초성이 될 수 있는 자음만)
    pub fn choseong_index(&self) -> Option<u32> {
        choseong_index(self.ch)
    }

    /// 중성 인덱스 반환 (모음만)
    pub fn jungseong_index(&self) -> Option<u32> {
        jungseong_index(self.ch)
    }

    /// 종성 인덱스 반환 (종성이 될 수 있는 자음만)
    pub fn jongseong_index(&self) -> Option<u32> {
        jongseong_index(self.ch)
    }

    /// 종성 자리에 올 수 있는지 (ㄸ, ㅃ, ㅉ는 불가)
    pub fn can_tail(&self) -> bool {
        self.jongseong_index().is_some()
    }

    /// 다른 자모와 합쳐 겹자모를 만든다 (ㄹ + ㄱ = ㄺ, ㅗ + ㅏ = ㅘ)
    pub fn fuse(self, next: Jamo) -> Option<Jamo> {
        fuse(self, next)
    }

    /// 두 타 자모를 홑자모 두 개로 분리 (ㄺ -> ㄹ, ㄱ)
    pub fn split(&self) -> Option<(Jamo, Jamo)> {
        let keys = self.keystrokes();
        if keys.len() != 2 {
            return None;
        }
        let (first, second) = keys.split_at(1);
        Some((Self::from_keystrokes(first)?, Self::from_keystrokes(second)?))
    }
}

/// 겹자모 조합 테이블 조회
pub fn fuse(first: Jamo, second: Jamo) -> Option<Jamo> {
    FUSION
        .get(&(first.ch, second.ch))
        .and_then(|&ch| Jamo::from_char(ch))
}

/// 영문 키 하나를 자모로 변환
/// 매핑에 없는 문자(숫자, 특수문자, 일부 대문자 등)는 None 반환
pub fn map_to_jamo(c: char) -> Option<Jamo> {
    let mut buf = [0u8; 4];
    Jamo::from_keystrokes(c.encode_utf8(&mut buf))
}
