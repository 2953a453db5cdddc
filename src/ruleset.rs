//! Exclusion rulesets for happy case classification.
//!
//! A ruleset is an immutable bundle of keyword lists and compiled regex
//! patterns plus the scoping choices that differ between the three filter
//! variants. Keyword matching is plain substring containment; patterns are
//! regular expressions. The lists target Korean-language test cases with a
//! handful of English terms mixed in.

use anyhow::{Context, Result};
use regex::Regex;

/// Which fields feed the title keyword check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleScope {
    /// Title only.
    TitleOnly,
    /// Title plus Section and Section Hierarchy. Catches cases grouped under
    /// sections named after error scenarios.
    TitleAndSection,
}

/// Which fields feed the edge keyword and boundary pattern checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeScope {
    /// Title + Steps.
    TitleSteps,
    /// Title + Steps + Expected Result.
    TitleStepsExpected,
    /// All five text fields, sections included.
    AllFields,
}

/// Identity used to group case rows under their section marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKeyMode {
    /// Section name alone.
    Name,
    /// Section name plus hierarchy path, so same-named sections at different
    /// depths stay distinct.
    NameAndHierarchy,
}

/// Where the filtered rows go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Write `<stem>_happy<ext>` next to the input, preserving the original.
    HappyCopy,
    /// Overwrite the input file.
    InPlace,
}

/// Title exclusion keywords shared by all rulesets.
const BASE_TITLE_KEYWORDS: &[&str] = &[
    "오류",
    "에러",
    "실패",
    "error",
    "fail",
    "잘못된",
    "유효하지 않은",
    "올바르지 않은",
    "틀린",
    "빈 값",
    "빈칸",
    "미입력",
    "입력하지 않",
    "입력 없이",
    "미선택",
    "접근 거부",
    "권한 없음",
    "권한없음",
    "차단",
    "금지",
    "중복",
    "이미 사용 중",
    "이미 존재",
    "재시도",
    "최댓값",
    "최솟값",
    "경계값",
    "경계",
    "불일치",
];

/// Title keywords added by the strict and strengthened rulesets.
const EXTRA_TITLE_KEYWORDS: &[&str] = &[
    "초과",
    "미만",
    "부족",
    "만료",
    "타임아웃",
    "비정상",
    "예외",
    "누락",
    "위반",
];

/// Expected Result exclusion keywords shared by all rulesets. Phrases that
/// only ever appear in validation failures, error toasts, or HTTP error
/// pages.
const BASE_EXPECTED_KEYWORDS: &[&str] = &[
    "올바르지 않습니다",
    "오류 메시지",
    "에러 메시지",
    "오류가 발생",
    "다시 시도",
    "재입력",
    "필수 입력",
    "입력해주세요",
    "필수 항목",
    "빨간색 테두리",
    "붉은 테두리",
    "경고 아이콘",
    "오류 아이콘",
    "403",
    "404",
    "500",
    "접근 불가",
    "페이지를 찾을 수 없습니다",
];

const EXTRA_EXPECTED_KEYWORDS: &[&str] = &["거부", "유효하지 않", "경고 메시지"];

/// Edge case keywords shared by all rulesets: special input shapes, empty
/// states, concurrency, navigation abuse, session expiry, length limits.
const BASE_EDGE_KEYWORDS: &[&str] = &[
    "특수문자",
    "이모지",
    "공백만",
    "줄바꿈만",
    "데이터 없음",
    "0건",
    "빈 목록",
    "연결 끊김",
    "동시에",
    "중복 요청",
    "연속 클릭",
    "이중 제출",
    "뒤로가기",
    "새로고침 후",
    "브라우저 닫기",
    "세션 만료",
    "타임아웃",
    "토큰 만료",
    "최대 글자수",
    "자 초과",
    "자 미만",
];

const EXTRA_EDGE_KEYWORDS: &[&str] = &[
    "XSS",
    "SQL",
    "인젝션",
    "스크립트",
    "네트워크 끊김",
    "오프라인",
];

/// Steps patterns shared by all rulesets: abnormal preconditions such as
/// empty-field submission, disallowed access, injection payloads, logged-out
/// state.
const BASE_STEPS_PATTERNS: &[&str] = &[
    r"비워\s*두고",
    r"아무것도\s*입력하지\s*않",
    r"잘못된\s*.+\s*(형식|값|데이터)",
    r"허용되지\s*않는",
    r"권한\s*없는\s*상태",
    r"로그아웃\s*상태",
    r"<script",
    r"'\s*OR\s*'",
    r"이모지",
];

/// Steps patterns added by the strict and strengthened rulesets: nonexistent
/// targets, expired tokens/sessions, deleted accounts.
const EXTRA_STEPS_PATTERNS: &[&str] = &[
    r"존재하지\s*않는",
    r"만료된\s*(토큰|세션|링크)",
    r"삭제된\s*(계정|데이터|파일)",
];

/// Numeric boundary patterns, strict ruleset only: "100자 초과", "딱 100자",
/// "최대 100자", "3회 이상" and the like.
const BOUNDARY_PATTERNS: &[&str] = &[
    r"\d+\s*자\s*(초과|미만|이상|이하)",
    r"딱\s*\d+",
    r"최대\s*\d+\s*자",
    r"최소\s*\d+\s*자",
    r"\d+\s*(개|건|회)\s*(초과|미만|이상|이하)",
];

/// One filter variant's complete configuration.
#[derive(Debug)]
pub struct Ruleset {
    pub name: &'static str,
    pub title_keywords: Vec<&'static str>,
    pub expected_keywords: Vec<&'static str>,
    pub edge_keywords: Vec<&'static str>,
    pub steps_patterns: Vec<Regex>,
    pub boundary_patterns: Vec<Regex>,
    pub title_scope: TitleScope,
    pub edge_scope: EdgeScope,
    pub section_key: SectionKeyMode,
    pub output_mode: OutputMode,
}

impl Ruleset {
    /// The original extraction ruleset: base lists only, title-only scope,
    /// edge keywords checked against title + steps.
    pub fn baseline() -> Result<Self> {
        Ok(Self {
            name: "baseline",
            title_keywords: BASE_TITLE_KEYWORDS.to_vec(),
            expected_keywords: BASE_EXPECTED_KEYWORDS.to_vec(),
            edge_keywords: BASE_EDGE_KEYWORDS
                .iter()
                .copied()
                .chain(["탭 전환"])
                .collect(),
            steps_patterns: compile(BASE_STEPS_PATTERNS)?,
            boundary_patterns: Vec::new(),
            title_scope: TitleScope::TitleOnly,
            edge_scope: EdgeScope::TitleSteps,
            section_key: SectionKeyMode::Name,
            output_mode: OutputMode::HappyCopy,
        })
    }

    /// The strict ruleset: strengthened lists, numeric boundary patterns,
    /// title scope widened to the section columns, edge scope widened to
    /// every text field.
    pub fn strict() -> Result<Self> {
        Ok(Self {
            name: "strict",
            title_keywords: join(BASE_TITLE_KEYWORDS, EXTRA_TITLE_KEYWORDS),
            expected_keywords: join(BASE_EXPECTED_KEYWORDS, EXTRA_EXPECTED_KEYWORDS),
            edge_keywords: BASE_EDGE_KEYWORDS
                .iter()
                .copied()
                .chain(["탭 전환", "한자", "아랍어"])
                .chain(EXTRA_EDGE_KEYWORDS.iter().copied())
                .collect(),
            steps_patterns: compile_joined(BASE_STEPS_PATTERNS, EXTRA_STEPS_PATTERNS)?,
            boundary_patterns: compile(BOUNDARY_PATTERNS)?,
            title_scope: TitleScope::TitleAndSection,
            edge_scope: EdgeScope::AllFields,
            section_key: SectionKeyMode::Name,
            output_mode: OutputMode::HappyCopy,
        })
    }

    /// The strengthened in-place ruleset: strict keyword lists without the
    /// boundary patterns, title-only scope, edge scope including Expected
    /// Result, sections keyed by (name, hierarchy), input overwritten.
    pub fn strengthened() -> Result<Self> {
        Ok(Self {
            name: "strengthened",
            title_keywords: join(BASE_TITLE_KEYWORDS, EXTRA_TITLE_KEYWORDS),
            expected_keywords: join(BASE_EXPECTED_KEYWORDS, EXTRA_EXPECTED_KEYWORDS),
            edge_keywords: BASE_EDGE_KEYWORDS
                .iter()
                .copied()
                .chain(["브라우저 탭 전환"])
                .chain(EXTRA_EDGE_KEYWORDS.iter().copied())
                .collect(),
            steps_patterns: compile_joined(BASE_STEPS_PATTERNS, EXTRA_STEPS_PATTERNS)?,
            boundary_patterns: Vec::new(),
            title_scope: TitleScope::TitleOnly,
            edge_scope: EdgeScope::TitleStepsExpected,
            section_key: SectionKeyMode::NameAndHierarchy,
            output_mode: OutputMode::InPlace,
        })
    }
}

fn join(base: &[&'static str], extra: &[&'static str]) -> Vec<&'static str> {
    base.iter().chain(extra.iter()).copied().collect()
}

fn compile(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid ruleset pattern: {p}")))
        .collect()
}

fn compile_joined(base: &[&str], extra: &[&str]) -> Result<Vec<Regex>> {
    let mut compiled = compile(base)?;
    compiled.extend(compile(extra)?);
    Ok(compiled)
}
