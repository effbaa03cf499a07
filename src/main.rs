//! hdku - 두벌식 한글 키 입력 도구

use std::io::{self, BufRead};
use std::process::ExitCode;

use hdku::config::{load_config, HdkuConfig};
use hdku::distance::edit_distance;
use hdku::{keystroke_aware_distance, to_jamos, to_keystrokes, JamoComposer, KeystrokeComposer};

const USAGE: &str = "\
사용법: hdku [--force] [--fullwidth] [--divider] <명령> [텍스트...]

명령:
  keys <한글>                 한글 -> 두벌식 키 입력
  jamo <한글>                 한글 -> 자모
  compose <키 입력>           두벌식 키 입력 -> 한글
  compose-jamo <자모>         자모 -> 한글
  distance <한글> <한글>      두 한글 문자열의 오타 거리
  edit-distance <키> <키>     두 키 입력 문자열의 편집 거리

텍스트를 생략하면 표준 입력에서 한 줄씩 읽습니다.";

/// 명령행 인자 파싱 결과
struct Args {
    config: HdkuConfig,
    command: String,
    rest: Vec<String>,
}

fn parse_args(mut config: HdkuConfig) -> Option<Args> {
    let mut command = None;
    let mut rest = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--force" => config.force_convert = true,
            "--fullwidth" => config.fullwidth = true,
            "--divider" => config.divider = true,
            "-h" | "--help" => return None,
            _ if command.is_none() => command = Some(arg),
            _ => rest.push(arg),
        }
    }

    Some(Args {
        config,
        command: command?,
        rest,
    })
}

/// 인자가 있으면 인자를 이어 붙인 한 줄, 없으면 표준 입력의 각 줄에 적용
fn for_each_line(rest: &[String], mut f: impl FnMut(&str) -> String) -> io::Result<()> {
    if !rest.is_empty() {
        println!("{}", f(&rest.join(" ")));
        return Ok(());
    }
    for line in io::stdin().lock().lines() {
        println!("{}", f(&line?));
    }
    Ok(())
}

fn run_distance(rest: &[String], keystrokes: bool) -> ExitCode {
    let [a, b] = rest else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };
    let result = if keystrokes {
        edit_distance(a, b)
    } else {
        keystroke_aware_distance(a, b)
    };
    match result {
        Ok(distance) => {
            println!("{}", distance);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("거리 계산 실패: {}", e);
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(args) = parse_args(load_config()) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };
    let config = args.config;

    let result = match args.command.as_str() {
        "keys" => for_each_line(&args.rest, |line| {
            to_keystrokes(line, config.fullwidth, config.divider)
        }),
        "jamo" => for_each_line(&args.rest, |line| to_jamos(line, config.divider)),
        "compose" => {
            let mut composer = KeystrokeComposer::new(config.force_convert);
            for_each_line(&args.rest, |line| composer.convert(line))
        }
        "compose-jamo" => {
            let mut composer = JamoComposer::new(config.force_convert);
            for_each_line(&args.rest, |line| composer.convert(line))
        }
        "distance" => return run_distance(&args.rest, false),
        "edit-distance" => return run_distance(&args.rest, true),
        other => {
            eprintln!("알 수 없는 명령: {}\n\n{}", other, USAGE);
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("입출력 오류: {}", e);
            ExitCode::from(1)
        }
    }
}
