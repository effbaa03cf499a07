//! 음절 <-> (초성, 중성, 종성) 자모 묶음 변환

use crate::core::jamo_mapper::Jamo;
use crate::core::unicode::{
    choseong_to_jamo_char, compose_syllable, decompose_syllable, jongseong_to_jamo_char,
    jungseong_to_jamo_char,
};

/// 한 음절을 이루는 (초성, 중성, 종성) 자모 묶음
///
/// 낱자모 하나도 해당 자리만 채운 묶음으로 표현한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JamoTriple {
    pub lead: Option<Jamo>,
    pub vowel: Option<Jamo>,
    pub tail: Option<Jamo>,
}

impl JamoTriple {
    pub fn new(lead: Option<Jamo>, vowel: Option<Jamo>, tail: Option<Jamo>) -> Self {
        Self { lead, vowel, tail }
    }

    /// 초성만 채운 묶음
    pub fn lead_only(lead: Jamo) -> Self {
        Self { lead: Some(lead), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.lead.is_none() && self.vowel.is_none() && self.tail.is_none()
    }

    /// 초성과 중성이 모두 있는지
    pub fn is_complete(&self) -> bool {
        self.lead.is_some() && self.vowel.is_some()
    }

    /// 음절로 조합 (`jamos_to_syllable` 참고)
    pub fn to_syllable(&self) -> Option<char> {
        jamos_to_syllable(self.lead, self.vowel, self.tail)
    }

    /// 채워진 자모를 초성, 중성, 종성 순으로 나열
    pub fn jamos(&self) -> impl Iterator<Item = Jamo> {
        [self.lead, self.vowel, self.tail].into_iter().flatten()
    }
}

/// 음절 또는 낱자모를 (초성, 중성, 종성)으로 분해
///
/// 낱자음은 초성 자리, 낱모음은 중성 자리만 채운다.
/// 한글이 아니면 None.
pub fn syllable_to_jamos(c: char) -> Option<JamoTriple> {
    if let Some(jamo) = Jamo::from_char(c) {
        return Some(if jamo.is_consonant() {
            JamoTriple::lead_only(jamo)
        } else {
            JamoTriple { vowel: Some(jamo), ..JamoTriple::default() }
        });
    }

    let (cho, jung, jong) = decompose_syllable(c)?;
    let lead = choseong_to_jamo_char(cho).and_then(Jamo::from_char);
    let vowel = jungseong_to_jamo_char(jung).and_then(Jamo::from_char);
    let tail = jongseong_to_jamo_char(jong).and_then(Jamo::from_char);
    Some(JamoTriple { lead, vowel, tail })
}

/// (초성, 중성, 종성)을 음절로 조합
///
/// - 초성이나 중성 중 하나만 있으면 그 자모를 그대로 반환
/// - 둘 다 없으면 None
/// - 초성/종성 자리에 올 수 없는 자모가 있으면 None
pub fn jamos_to_syllable(
    lead: Option<Jamo>,
    vowel: Option<Jamo>,
    tail: Option<Jamo>,
) -> Option<char> {
    match (lead, vowel) {
        (Some(lead), Some(vowel)) => {
            let jong = match tail {
                Some(t) => t.jongseong_index()?,
                None => 0,
            };
            compose_syllable(lead.choseong_index()?, vowel.jungseong_index()?, jong)
        }
        (Some(lead), None) => Some(lead.as_char()),
        (None, Some(vowel)) => Some(vowel.as_char()),
        (None, None) => None,
    }
}
