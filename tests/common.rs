//! Common test helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str =
    "Section,Section Hierarchy,Title,Preconditions,Steps,Expected Result,Priority";

/// A small mixed fixture: one section with a happy and an excluded case,
/// one section with only an excluded case.
pub fn mixed_fixture() -> String {
    format!(
        "{HEADER}\n\
         \"로그인\",\"로그인\",\"\",\"\",\"\",\"\",\"\"\n\
         \"로그인\",\"로그인\",\"로그인 성공 시 메인 페이지로 이동\",\"계정 존재\",\"1. 이메일 입력 (예: a@b.com)\",\"메인 페이지로 이동한다\",\"High\"\n\
         \"로그인\",\"로그인\",\"비밀번호 오류 시 에러 메시지 표시\",\"계정 존재\",\"1. 틀린 비밀번호 입력\",\"에러 메시지가 노출된다\",\"High\"\n\
         \"보안\",\"보안\",\"\",\"\",\"\",\"\",\"\"\n\
         \"보안\",\"보안\",\"세션 만료 시 재로그인 요구\",\"\",\"1. 세션 만료 후 접근\",\"로그인 페이지로 이동\",\"Medium\"\n"
    )
}

/// A fixture with no exclusion keywords anywhere.
pub fn pure_happy_fixture() -> String {
    format!(
        "{HEADER}\n\
         \"가입\",\"가입\",\"\",\"\",\"\",\"\",\"\"\n\
         \"가입\",\"가입\",\"정보 작성 후 가입 버튼 동작\",\"\",\"1. 이름에 '홍길동' 작성\",\"환영 화면이 노출된다\",\"Medium\"\n"
    )
}

/// Write a fixture into `dir` under `name` and return its path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
