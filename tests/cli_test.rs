use anyhow::Result;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn dirstat(args: &[&OsStr]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_dirstat"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

#[test]
fn test_no_argument_exits_one_silently() -> Result<()> {
    let out = dirstat(&[])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    Ok(())
}

#[test]
fn test_lists_directory_as_json() -> Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("one"), "1")?;
    fs::create_dir(temp.path().join("two"))?;

    let out = dirstat(&[temp.path().as_os_str()])?;
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());

    let value: Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(value["."]["filename"], ".");
    assert_eq!(value["children"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn test_missing_directory_prints_one_diagnostic_line() -> Result<()> {
    let temp = tempdir()?;
    let missing = temp.path().join("nope");

    let out = dirstat(&[missing.as_os_str()])?;
    assert_eq!(out.status.code(), Some(1));

    let text = String::from_utf8(out.stdout)?;
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("No such file or directory"));
    assert!(serde_json::from_str::<Value>(&text).is_err());
    Ok(())
}

#[test]
fn test_brief_pretty_flags() -> Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("f"), "")?;

    let out = dirstat(&[
        temp.path().as_os_str(),
        OsStr::new("--brief"),
        OsStr::new("--pretty"),
    ])?;
    assert_eq!(out.status.code(), Some(0));

    let text = String::from_utf8(out.stdout)?;
    assert!(text.starts_with("{\n    \".\""));
    let value: Value = serde_json::from_str(&text)?;
    assert_eq!(value["children"][0]["filename"], "f");
    assert_eq!(value["children"][0]["isdir"], false);
    assert!(value["children"][0].get("stat").is_none());
    Ok(())
}

#[test]
fn test_directory_named_like_a_flag() -> Result<()> {
    let temp = tempdir()?;
    let odd = temp.path().join("-x");
    fs::create_dir(&odd)?;
    fs::write(odd.join("inside"), "")?;

    let out = Command::new(env!("CARGO_BIN_EXE_dirstat"))
        .arg("-x")
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .output()?;
    assert_eq!(out.status.code(), Some(0));

    let value: Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(value["children"][0]["filename"], "inside");
    Ok(())
}
