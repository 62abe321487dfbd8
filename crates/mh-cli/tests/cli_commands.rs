//! Integration tests for the mh-cli binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

const ENV_VARS: [&str; 7] = [
    "MEIHUA_LLM_BACKEND",
    "MEIHUA_LLM_API_URL",
    "MEIHUA_LLM_API_KEY",
    "MEIHUA_LLM_MODEL",
    "MEIHUA_LLM_TEMPERATURE",
    "MEIHUA_LLM_TOP_P",
    "MEIHUA_PROMPT_TEMPLATE",
];

fn meihua() -> Command {
    let mut cmd = Command::cargo_bin("meihua").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

// ---------------------------------------------------------------------------
// cast
// ---------------------------------------------------------------------------

#[test]
fn cast_char_shows_both_hexagrams() {
    meihua()
        .args(["cast", "char", "字", "13", "--at", "2026-10-18 10:05"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("風火家人")
                .and(predicate::str::contains("風山漸"))
                .and(predicate::str::contains("起卦時間：2026/10/18 上午10:05:00（巳時）"))
                .and(predicate::str::contains("所占之字：字（13畫）"))
                .and(predicate::str::contains("動爻：第 1 爻（老陽）"))
                .and(predicate::str::contains("━━━ ━━━")),
        );
}

#[test]
fn cast_number_with_inquiry() {
    meihua()
        .args([
            "cast", "number", "8", "16", "--at", "2026-10-18 10:05", "--inquiry", "要不要搬家",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("地水師")
                .and(predicate::str::contains("山水蒙"))
                .and(predicate::str::contains("所問之事：要不要搬家")),
        );
}

#[test]
fn cast_pure_hexagram_name() {
    meihua()
        .args(["cast", "number", "1", "1", "--at", "2026-10-18 14:05:09"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("乾為天")
                .and(predicate::str::contains("天火同人"))
                .and(predicate::str::contains("下午2:05:09")),
        );
}

#[test]
fn cast_json_output() {
    meihua()
        .args(["cast", "char", "字", "13", "--at", "2026-10-18 10:05", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""name": "風火家人""#)
                .and(predicate::str::contains(r#""changedName": "風山漸""#))
                .and(predicate::str::contains(r#""changingLine": 1"#))
                .and(predicate::str::contains(r#""method": "CONSCIOUSNESS""#))
                .and(predicate::str::contains(r#""earthlyBranch": "巳""#))
                .and(predicate::str::contains("interpretation").not()),
        );
}

#[test]
fn cast_prints_prompt() {
    meihua()
        .args(["cast", "number", "8", "16", "--at", "2026-10-18 10:05", "--prompt"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("本卦：地水師")
                .and(predicate::str::contains("第 6 爻的【爻辭】原文")),
        );
}

#[test]
fn cast_interpret_without_key_falls_back() {
    meihua()
        .args(["cast", "char", "木", "4", "--at", "2026-10-18 10:05", "--interpret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("抱歉，目前解析服務暫時無法連線，請稍後再試。"));
}

#[test]
fn cast_interpret_json_marks_fallback() {
    meihua()
        .args([
            "cast", "char", "木", "4", "--at", "2026-10-18 10:05", "--interpret", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""source": "fallback""#));
}

#[test]
fn cast_rejects_out_of_range_number() {
    meihua()
        .args(["cast", "number", "0", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("numbers must be between 1 and 99"));
}

#[test]
fn cast_rejects_multiple_characters() {
    meihua()
        .args(["cast", "char", "木木", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a single character"));
}

#[test]
fn cast_rejects_zero_strokes() {
    meihua()
        .args(["cast", "char", "木", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stroke count must be at least 1"));
}

#[test]
fn cast_rejects_bad_timestamp() {
    meihua()
        .args(["cast", "number", "3", "5", "--at", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --at"));
}

#[test]
fn cast_invalid_backend_config_falls_back() {
    meihua()
        .env("MEIHUA_LLM_BACKEND", "oracle-bones")
        .env("RUST_LOG", "warn")
        .args(["cast", "char", "字", "13", "--at", "2026-10-18 10:05", "--interpret"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("風火家人")
                .and(predicate::str::contains("抱歉，目前解析服務暫時無法連線，請稍後再試。")),
        )
        .stderr(predicate::str::contains("unknown backend"));
}

#[test]
fn cast_missing_template_still_shows_reading() {
    meihua()
        .env("MEIHUA_PROMPT_TEMPLATE", "/nonexistent/prompt.j2")
        .args(["cast", "char", "字", "13", "--at", "2026-10-18 10:05", "--interpret"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("風火家人")
                .and(predicate::str::contains("抱歉，目前解析服務暫時無法連線，請稍後再試。")),
        );
}

// ---------------------------------------------------------------------------
// branch / trigrams / grid
// ---------------------------------------------------------------------------

#[test]
fn branch_for_hour() {
    meihua()
        .args(["branch", "--hour", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("未時 (13:00-15:00)").and(predicate::str::contains("地支序：8")));
}

#[test]
fn branch_late_night_is_zi() {
    meihua()
        .args(["branch", "--hour", "23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("子時"));
}

#[test]
fn branch_rejects_hour_out_of_range() {
    meihua().args(["branch", "--hour", "24"]).assert().failure();
}

#[test]
fn trigrams_lists_all_eight() {
    meihua()
        .arg("trigrams")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("☰")
                .and(predicate::str::contains("巽"))
                .and(predicate::str::contains("澤"))
                .and(predicate::str::contains("0 0 0")),
        );
}

#[test]
fn grid_lists_names() {
    meihua()
        .arg("grid")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("乾為天")
                .and(predicate::str::contains("地天泰"))
                .and(predicate::str::contains("坤為地"))
                .and(predicate::str::contains("64 hexagrams")),
        );
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn session_casts_and_lists_history() {
    meihua()
        .arg("session")
        .write_stdin("char 字 13\nnumber 8 16\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1. 風火家人")
                .and(predicate::str::contains("2. 地水師"))
                .and(predicate::str::contains("再會！")),
        );
}

#[test]
fn session_reports_errors_and_continues() {
    meihua()
        .arg("session")
        .write_stdin("divine\nnumber 0 1\nexport text\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown command 'divine'")
                .and(predicate::str::contains("numbers must be between 1 and 99"))
                .and(predicate::str::contains("梅花易數占卜紀錄")),
        );
}

#[test]
fn session_interpret_attaches_fallback() {
    meihua()
        .args(["session", "--interpret"])
        .write_stdin("number 3 5\nexport\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("抱歉，目前解析服務暫時無法連線")
                .and(predicate::str::contains("**解析**（第 1 卦） *未能取得*")),
        );
}

#[test]
fn session_survives_missing_template() {
    meihua()
        .env("MEIHUA_PROMPT_TEMPLATE", "/nonexistent/prompt.j2")
        .args(["session", "--interpret"])
        .write_stdin("char 字 13\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1. 風火家人")
                .and(predicate::str::contains("抱歉，目前解析服務暫時無法連線"))
                .and(predicate::str::contains("再會！")),
        );
}

#[test]
fn session_quits_on_first_word() {
    meihua()
        .arg("session")
        .write_stdin("quit now\nhistory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("再會！").and(predicate::str::contains("尚無占卜紀錄").not()));
}
