use std::fs;

use walkdir::WalkDir;
use yardcalc::evaluate;

/// One `expression => expected` line of a documentation example.
struct Example {
    expression: String,
    expected:   Option<f64>,
}

#[test]
fn documentation_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("docs").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for example in extract_examples(&content) {
            count += 1;
            let result = evaluate(&example.expression);
            match (example.expected, result) {
                (Some(expected), Ok(value)) => {
                    assert!((value - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                            "{path:?}: {} gave {value}, documented as {expected}",
                            example.expression);
                },
                (None, Err(_)) => {},
                (Some(_), Err(e)) => {
                    panic!("{path:?}: {} failed: {e}", example.expression)
                },
                (None, Ok(value)) => panic!("{path:?}: {} gave {value}, documented as an error",
                                            example.expression),
            }
        }
    }

    assert!(count > 0, "No examples found in docs");
}

fn extract_examples(content: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```yardcalc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = trimmed.split_once("=>") {
            let expected = expected.trim();
            examples.push(Example { expression: expression.trim().to_string(),
                                    expected:   if expected == "error" {
                                        None
                                    } else {
                                        Some(expected.parse().unwrap_or_else(|e| {
                                                                 panic!("Bad expected value {expected:?}: {e}")
                                                             }))
                                    }, });
        }
    }

    examples
}
