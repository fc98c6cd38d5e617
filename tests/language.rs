use std::fs::{self};

use fnscript::run;
use walkdir::WalkDir;

#[test]
fn sample_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "fn"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&code) {
            panic!("Script {path:?} failed:\n{code}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn readme_examples_work() {
    let content = fs::read_to_string("README.md").expect("README.md should exist");
    let blocks = extract_script_blocks(&content);

    assert!(!blocks.is_empty(), "No fnscript examples found in README.md");
    for (i, code) in blocks.iter().enumerate() {
        if let Err(e) = run(code) {
            panic!("README example {} failed:\n{}\nError: {:?}", i + 1, code, e);
        }
    }
}

fn extract_script_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```fnscript") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("x = (1 + 2)\nassert(x eq 3)");
    assert_success("x = (7 * 9)\nassert(x eq 63)");
    assert_success("x = (8 - 5)\nassert(x eq 3)");
    assert_success("x = (10 / 2)\nassert(x eq 5)");
}

#[test]
fn rebinding_fails() {
    assert_failure("x = 1\nx = 2");
    assert_success("x = 1\nf = (x) { x }\nassert(f(2) eq 2)");
}

#[test]
fn assertions() {
    assert_success("assert(true)");
    assert_failure("assert(false)");
    assert_failure("assert(1 eq 2)");
}

#[test]
fn functions() {
    assert_success("sq = (x) { x * x }\nassert(sq(7) eq 49)");
    assert_success("apply = (f, x) { f(x) }\ninc = (n) { n + 1 }\nassert(apply(inc, 1) eq 2)");
    assert_failure("sq = (x) { x * x }\nsq()");
    assert_failure("sq = (x) { x * x }\nsq(1, 2)");
}

#[test]
fn conditionals() {
    assert_success("assert(if 1 eq 1 { true } else { false })");
    assert_success("assert(unless 1 eq 1 { false } else { true })");
    assert_success("sign = (n) { if n eq 0 { 0 } else { 1 } }\nassert(sign(0) eq 0)");
}

#[test]
fn objects_and_imports() {
    assert_success("p = { x = 3; y = 4 }\nassert(p.x * p.y eq 12)");
    assert_failure("p = 1\np.x");
    assert_success("lib = { half = (n) { n / 2 } }\nimport lib\nassert(half(8) eq 4)");
    assert_failure("lib = 3\nimport lib");
}

#[test]
fn syntax_errors() {
    assert_failure("x = (1 + 2");
    assert_failure("f(1,)");
    assert_failure("{");
    assert_failure("x = [1]");
}
