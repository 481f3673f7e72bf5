use std::fs;

use duocalc::calculate;
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

/// An expected outcome read from a case file.
enum Expected {
    Value(f64),
    Failure,
}

#[test]
fn case_files_evaluate_as_expected() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            match (calculate(&expression), expected) {
                (Ok(value), Expected::Value(want)) => {
                    assert!((value - want).abs() < TOLERANCE,
                            "Case {} in {:?}: '{}' evaluated to {}, expected {}",
                            i + 1,
                            path,
                            expression,
                            value,
                            want);
                },
                (Err(_), Expected::Failure) => {},
                (Ok(value), Expected::Failure) => {
                    panic!("Case {} in {:?}: '{}' evaluated to {} but was expected to fail",
                           i + 1,
                           path,
                           expression,
                           value)
                },
                (Err(e), Expected::Value(_)) => {
                    panic!("Case {} in {:?}: '{}' failed: {}", i + 1, path, expression, e)
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expression => expected` lines, skipping blank lines and `#`
/// comments. `expected` is a comma-decimal number or the word `error`.
fn extract_cases(content: &str) -> Vec<(String, Expected)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (expression, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("Case line without '=>': {line}"));
               let expected = match expected.trim() {
                   "error" => Expected::Failure,
                   number => Expected::Value(number.replace(',', ".")
                                                   .parse()
                                                   .unwrap_or_else(|e| {
                                                       panic!("Bad expected value '{number}': {e}")
                                                   })),
               };
               (expression.to_string(), expected)
           })
           .collect()
}
