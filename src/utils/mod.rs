//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 값의 문자열 변환 및 정리
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//! - [`dates`] - 구독 만료일 계산과 타임스탬프 포맷팅

pub mod dates;
pub mod display_terminal;
pub mod string_utils;
