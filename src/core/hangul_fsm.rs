//! 한글 조합 오토마타
//!
//! 자모(또는 키 입력) 토큰을 하나씩 받아 음절을 조합합니다.
//! 조합 상태는 [`JamoTriple`] 값이고, 각 전이는 (다음 상태, 확정된 음절)을 돌려주는
//! 순수 함수([`feed_consonant`], [`feed_vowel`])로 정의됩니다.
//!
//! 자모가 아닌 토큰으로 끊기는 구간을 "단어"라 부르며, 단어가 올바르게 조합되지
//! 않으면 조합 결과를 버리고 원래 입력을 그대로 출력합니다 (강제 변환 시 제외).

use log::{debug, trace};

use crate::core::jamo_mapper::Jamo;
use crate::core::syllable::JamoTriple;

/// 단어 유효성
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// 조합 불가 (원래 입력 출력)
    Invalid,
    /// 정상 조합
    Valid,
    /// 강제 변환으로 조합 결과 출력
    ForcedValid,
}

/// 전이 한 번의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 다음 조합 상태
    pub next: JamoTriple,
    /// 이번 전이로 확정된 음절 단위
    pub commit: Option<JamoTriple>,
    /// 단어가 더 이상 올바르지 않음
    pub rejected: bool,
}

impl Step {
    fn hold(next: JamoTriple) -> Self {
        Self { next, commit: None, rejected: false }
    }

    fn reject(current: JamoTriple) -> Self {
        Self { next: current, commit: None, rejected: true }
    }

    fn commit(unit: JamoTriple, next: JamoTriple) -> Self {
        Self { next, commit: Some(unit), rejected: false }
    }
}

/// 자음 입력 전이
pub fn feed_consonant(pending: JamoTriple, c: Jamo, force: bool) -> Step {
    let JamoTriple { lead, vowel, tail } = pending;
    let start = JamoTriple::lead_only(c);

    match (lead, vowel, tail) {
        // 초성 없이 모음/종성만 있는 상태
        (None, Some(_), _) | (None, None, Some(_)) => {
            if force {
                Step::commit(pending, start)
            } else {
                Step::reject(pending)
            }
        }
        (None, None, None) => Step::hold(start),
        // 초성만 있는데 종성이 있는 상태는 정상 경로로는 도달하지 않음
        (Some(_), None, Some(_)) => Step::reject(pending),
        // 초성만 있음: 낱자음으로 확정하고 새 초성
        (Some(_), None, None) => Step::commit(pending, start),
        (Some(_), Some(_), None) => {
            if c.can_tail() {
                Step::hold(JamoTriple { tail: Some(c), ..pending })
            } else {
                // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                Step::commit(pending, start)
            }
        }
        (Some(_), Some(_), Some(t)) => match t.keystrokes().len() {
            1 => match t.fuse(c) {
                Some(fused) => Step::hold(JamoTriple { tail: Some(fused), ..pending }),
                None => Step::commit(pending, start),
            },
            2 => Step::commit(pending, start),
            n => unreachable!("종성 {} 의 키 길이 {}", t.as_char(), n),
        },
    }
}

/// 모음 입력 전이
pub fn feed_vowel(pending: JamoTriple, v: Jamo) -> Step {
    let JamoTriple { lead, vowel, tail } = pending;

    let Some(t) = tail else {
        return match vowel {
            None => Step::hold(JamoTriple { vowel: Some(v), ..pending }),
            Some(current) => match current.fuse(v) {
                // 이중모음 (ㅗ + ㅏ = ㅘ)
                Some(fused) => Step::hold(JamoTriple { vowel: Some(fused), ..pending }),
                None => Step::commit(pending, JamoTriple::new(None, Some(v), None)),
            },
        };
    };

    // 종성을 다음 음절의 초성으로 넘김
    // 겹받침이면 첫 자음은 남기고 둘째 자음만 넘긴다
    match t.keystrokes().len() {
        2 => match t.split() {
            Some((remain, moved)) => Step::commit(
                JamoTriple::new(lead, vowel, Some(remain)),
                JamoTriple::new(Some(moved), Some(v), None),
            ),
            None => unreachable!("겹받침 {} 분리 실패", t.as_char()),
        },
        1 => Step::commit(
            JamoTriple::new(lead, vowel, None),
            JamoTriple::new(Some(t), Some(v), None),
        ),
        n => unreachable!("종성 {} 의 키 길이 {}", t.as_char(), n),
    }
}

/// 토큰을 자모로 해석하는 방식
///
/// 해석할 수 없는 토큰은 단어를 끊고 그대로 출력된다.
pub trait JamoDecoder {
    fn decode(&self, token: char) -> Option<Jamo>;
}

/// 조합 중인 단어
#[derive(Debug, Clone, PartialEq, Eq)]
struct Word {
    validity: Validity,
    /// 확정된 음절
    syllables: String,
    /// 원래 입력 토큰
    raw: String,
}

impl Default for Word {
    fn default() -> Self {
        Self {
            validity: Validity::Valid,
            syllables: String::new(),
            raw: String::new(),
        }
    }
}

impl Word {
    fn is_empty(&self) -> bool {
        self.raw.is_empty() && self.syllables.is_empty()
    }

    /// 음절 단위 확정. 초성+중성이 갖춰지지 않은 단위는 단어를 무효로 만든다.
    fn commit(&mut self, unit: JamoTriple) {
        if unit.is_empty() {
            return;
        }
        if !unit.is_complete() {
            self.validity = Validity::Invalid;
        }
        match unit.to_syllable() {
            Some(c) => self.syllables.push(c),
            None => {
                // 초성 자리에 겹자음이 들어온 경우 등: 낱자모로 남김
                self.validity = Validity::Invalid;
                self.syllables.extend(unit.jamos().map(|j| j.as_char()));
            }
        }
    }
}

/// 한글 조합기
///
/// 하나의 입력 스트림이 단독으로 소유한다. 스트림마다 별도 인스턴스가 필요하다.
#[derive(Debug, Clone)]
pub struct Composer<D> {
    decoder: D,
    force_convert: bool,
    pending: JamoTriple,
    word: Word,
    output: String,
}

impl<D: JamoDecoder + Default> Composer<D> {
    /// 새 조합기 생성
    pub fn new(force_convert: bool) -> Self {
        Self::with_decoder(D::default(), force_convert)
    }
}

impl<D: JamoDecoder + Default> Default for Composer<D> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<D: JamoDecoder> Composer<D> {
    pub fn with_decoder(decoder: D, force_convert: bool) -> Self {
        Self {
            decoder,
            force_convert,
            pending: JamoTriple::default(),
            word: Word::default(),
            output: String::new(),
        }
    }

    pub fn force_convert(&self) -> bool {
        self.force_convert
    }

    pub fn set_force_convert(&mut self, force: bool) {
        self.force_convert = force;
    }

    /// 현재 조합 중인 (초성, 중성, 종성)
    pub fn pending(&self) -> JamoTriple {
        self.pending
    }

    /// 토큰 하나 입력
    pub fn feed(&mut self, token: char) {
        let Some(jamo) = self.decoder.decode(token) else {
            // 변환 불가 토큰: 단어를 끝내고 그대로 출력
            self.finalize();
            self.output.push(token);
            return;
        };

        self.word.raw.push(token);
        let step = if jamo.is_consonant() {
            feed_consonant(self.pending, jamo, self.force_convert)
        } else {
            feed_vowel(self.pending, jamo)
        };
        trace!("{:?} + {} -> {:?}", self.pending, jamo.as_char(), step);

        if step.rejected {
            debug!("조합 불가 입력: {:?} 상태에서 {}", self.pending, token);
            self.word.validity = Validity::Invalid;
        }
        if let Some(unit) = step.commit {
            self.word.commit(unit);
        }
        self.pending = step.next;
    }

    /// 현재 단어를 마무리하고 출력 버퍼에 추가
    ///
    /// 반환: 마무리한 단어의 유효성 (단어가 비어 있으면 None)
    pub fn finalize(&mut self) -> Option<Validity> {
        let pending = std::mem::take(&mut self.pending);
        self.word.commit(pending);

        let word = std::mem::take(&mut self.word);
        if word.is_empty() {
            return None;
        }

        let validity = if self.force_convert {
            Validity::ForcedValid
        } else {
            word.validity
        };
        match validity {
            Validity::Valid => self.output.push_str(&word.syllables),
            Validity::ForcedValid => {
                if word.validity == Validity::Invalid {
                    debug!("강제 변환: {} -> {}", word.raw, word.syllables);
                }
                self.output.push_str(&word.syllables);
            }
            Validity::Invalid => {
                debug!("조합 실패, 원문 유지: {}", word.raw);
                self.output.push_str(&word.raw);
            }
        }
        Some(validity)
    }

    /// 스트림 종료: 마지막 단어를 마무리하고 누적 결과를 돌려준 뒤 초기화
    pub fn finish(&mut self) -> String {
        self.finalize();
        let output = std::mem::take(&mut self.output);
        self.clear();
        output
    }

    /// 조합 상태와 버퍼 초기화
    pub fn clear(&mut self) {
        self.pending = JamoTriple::default();
        self.word = Word::default();
        self.output.clear();
    }

    /// 입력 전체를 변환
    ///
    /// 마지막 단어가 조합 불가이고 강제 변환이 꺼져 있으면 입력을 그대로 돌려준다.
    pub fn convert(&mut self, input: &str) -> String {
        self.clear();
        for token in input.chars() {
            self.feed(token);
        }
        let last = self.finalize();
        let output = std::mem::take(&mut self.output);
        self.clear();

        if last == Some(Validity::Invalid) && !self.force_convert {
            input.to_string()
        } else {
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::KeystrokeInput;

    fn jamo(c: char) -> Jamo {
        Jamo::from_char(c).unwrap()
    }

    fn triple(lead: Option<char>, vowel: Option<char>, tail: Option<char>) -> JamoTriple {
        JamoTriple::new(lead.map(jamo), vowel.map(jamo), tail.map(jamo))
    }

    #[test]
    fn test_consonant_starts_lead() {
        let step = feed_consonant(JamoTriple::default(), jamo('ㄱ'), false);
        assert_eq!(step, Step::hold(triple(Some('ㄱ'), None, None)));
    }

    #[test]
    fn test_consonant_after_lone_vowel() {
        let pending = triple(None, Some('ㅏ'), None);

        let strict = feed_consonant(pending, jamo('ㄱ'), false);
        assert!(strict.rejected);
        assert_eq!(strict.next, pending);
        assert_eq!(strict.commit, None);

        let forced = feed_consonant(pending, jamo('ㄱ'), true);
        assert!(!forced.rejected);
        assert_eq!(forced.commit, Some(pending));
        assert_eq!(forced.next, triple(Some('ㄱ'), None, None));
    }

    #[test]
    fn test_consonant_after_lone_lead_commits() {
        let step = feed_consonant(triple(Some('ㅁ'), None, None), jamo('ㅈ'), false);
        assert_eq!(step.commit, Some(triple(Some('ㅁ'), None, None)));
        assert_eq!(step.next, triple(Some('ㅈ'), None, None));
    }

    #[test]
    fn test_consonant_becomes_tail() {
        let step = feed_consonant(triple(Some('ㄱ'), Some('ㅏ'), None), jamo('ㅁ'), false);
        assert_eq!(step, Step::hold(triple(Some('ㄱ'), Some('ㅏ'), Some('ㅁ'))));
    }

    #[test]
    fn test_non_tail_consonant_commits() {
        let step = feed_consonant(triple(Some('ㄱ'), Some('ㅏ'), None), jamo('ㄸ'), false);
        assert_eq!(step.commit, Some(triple(Some('ㄱ'), Some('ㅏ'), None)));
        assert_eq!(step.next, triple(Some('ㄸ'), None, None));
    }

    #[test]
    fn test_tail_fusion() {
        let step = feed_consonant(triple(Some('ㄷ'), Some('ㅏ'), Some('ㄹ')), jamo('ㄱ'), false);
        assert_eq!(step, Step::hold(triple(Some('ㄷ'), Some('ㅏ'), Some('ㄺ'))));

        let step = feed_consonant(triple(Some('ㄷ'), Some('ㅏ'), Some('ㄺ')), jamo('ㅅ'), false);
        assert_eq!(step.commit, Some(triple(Some('ㄷ'), Some('ㅏ'), Some('ㄺ'))));
        assert_eq!(step.next, triple(Some('ㅅ'), None, None));

        let step = feed_consonant(triple(Some('ㄱ'), Some('ㅏ'), Some('ㅁ')), jamo('ㅁ'), false);
        assert_eq!(step.commit, Some(triple(Some('ㄱ'), Some('ㅏ'), Some('ㅁ'))));
        assert_eq!(step.next, triple(Some('ㅁ'), None, None));
    }

    #[test]
    fn test_vowel_fusion() {
        let step = feed_vowel(triple(Some('ㅇ'), Some('ㅗ'), None), jamo('ㅏ'));
        assert_eq!(step, Step::hold(triple(Some('ㅇ'), Some('ㅘ'), None)));

        let step = feed_vowel(triple(Some('ㅇ'), Some('ㅏ'), None), jamo('ㅏ'));
        assert_eq!(step.commit, Some(triple(Some('ㅇ'), Some('ㅏ'), None)));
        assert_eq!(step.next, triple(None, Some('ㅏ'), None));
    }

    #[test]
    fn test_vowel_moves_single_tail() {
        let step = feed_vowel(triple(Some('ㄱ'), Some('ㅗ'), Some('ㄱ')), jamo('ㅏ'));
        assert_eq!(step.commit, Some(triple(Some('ㄱ'), Some('ㅗ'), None)));
        assert_eq!(step.next, triple(Some('ㄱ'), Some('ㅏ'), None));
    }

    #[test]
    fn test_vowel_splits_cluster_tail() {
        let step = feed_vowel(triple(Some('ㅇ'), Some('ㅏ'), Some('ㄺ')), jamo('ㅏ'));
        assert_eq!(step.commit, Some(triple(Some('ㅇ'), Some('ㅏ'), Some('ㄹ'))));
        assert_eq!(step.next, triple(Some('ㄱ'), Some('ㅏ'), None));
    }

    fn composer(force: bool) -> Composer<KeystrokeInput> {
        Composer::new(force)
    }

    #[test]
    fn test_finalize_tags() {
        let mut c = composer(false);
        assert_eq!(c.finalize(), None);

        for t in "rk".chars() {
            c.feed(t);
        }
        assert_eq!(c.finalize(), Some(Validity::Valid));

        c.feed('r');
        assert_eq!(c.finalize(), Some(Validity::Invalid));
        assert_eq!(c.finish(), "가r");

        let mut c = composer(true);
        c.feed('r');
        assert_eq!(c.finalize(), Some(Validity::ForcedValid));
        assert_eq!(c.finish(), "ㄱ");
    }

    #[test]
    fn test_state_resets_after_finalize_and_clear() {
        let mut c = composer(false);
        c.feed('r');
        c.feed('k');
        assert_eq!(c.pending(), triple(Some('ㄱ'), Some('ㅏ'), None));
        c.finalize();
        assert!(c.pending().is_empty());

        c.feed('r');
        c.clear();
        assert!(c.pending().is_empty());
        assert_eq!(c.finish(), "");
    }

    #[test]
    fn test_streaming_matches_convert() {
        let mut c = composer(false);
        for t in "dkssud!".chars() {
            c.feed(t);
        }
        assert_eq!(c.finish(), "안녕!");
        assert_eq!(c.convert("dkssud!"), "안녕!");
    }

    #[test]
    fn test_force_flag_toggle() {
        let mut c = composer(false);
        assert!(!c.force_convert());
        assert_eq!(c.convert("rhrkaawk"), "rhrkaawk");
        c.set_force_convert(true);
        assert!(c.force_convert());
        assert_eq!(c.convert("rhrkaawk"), "고감ㅁ자");
    }

    #[test]
    fn test_invalid_word_before_valid_word() {
        let mut c = composer(false);
        assert_eq!(c.convert("rr rk"), "rr 가");
        // 마지막 단어가 무효면 입력 전체를 그대로
        assert_eq!(c.convert("rk rr"), "rk rr");
    }
}
