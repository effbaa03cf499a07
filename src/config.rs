//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_ENV: &str = "HDKU_CONFIG";

/// hdku 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HdkuConfig {
    /// 조합 불가 단어도 강제로 조합
    #[serde(default)]
    pub force_convert: bool,
    /// 키 변환 결과를 전각 영문자로 출력
    #[serde(default)]
    pub fullwidth: bool,
    /// 원문 한 글자마다 구분자 출력
    #[serde(default)]
    pub divider: bool,
}

/// 설정 파일 경로: $HDKU_CONFIG, 없으면 ~/.config/hdku/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hdku").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HdkuConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            HdkuConfig::default()
        }),
        Err(_) => HdkuConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &HdkuConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
