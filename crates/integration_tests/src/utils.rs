use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

pub fn compare_json(
    actual: &Value,
    expected: &Value,
    ignore_fields: &[&str],
) -> Result<ComparisonResult> {
    let mut differences = Vec::new();

    compare_json_recursive(actual, expected, ignore_fields, "", &mut differences);

    if differences.is_empty() {
        Ok(ComparisonResult::Match)
    } else {
        Ok(ComparisonResult::Mismatch { differences })
    }
}

#[derive(Debug, Clone)]
pub enum Difference {
    ValueMismatch {
        path: String,
        expected: Value,
        actual: Value,
    },
    MissingField {
        path: String,
    },
    ExtraField {
        path: String,
    },
    ArrayLengthMismatch {
        path: String,
        expected_len: usize,
        actual_len: usize,
    },
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn compare_json_recursive(
    actual: &Value,
    expected: &Value,
    ignore_fields: &[&str],
    path: &str,
    differences: &mut Vec<Difference>,
) {
    match (actual, expected) {
        (Value::Object(actual_obj), Value::Object(expected_obj)) => {
            for (key, expected_val) in expected_obj.iter() {
                let current_path = child_path(path, key);

                // Skip ignored fields
                if ignore_fields
                    .iter()
                    .any(|&field| current_path.ends_with(field) || current_path == field)
                {
                    continue;
                }

                match actual_obj.get(key) {
                    Some(actual_val) => compare_json_recursive(
                        actual_val,
                        expected_val,
                        ignore_fields,
                        &current_path,
                        differences,
                    ),
                    None => differences.push(Difference::MissingField { path: current_path }),
                }
            }

            for key in actual_obj.keys() {
                if !expected_obj.contains_key(key) {
                    differences.push(Difference::ExtraField {
                        path: child_path(path, key),
                    });
                }
            }
        }
        (Value::Array(actual_arr), Value::Array(expected_arr)) => {
            if actual_arr.len() != expected_arr.len() {
                differences.push(Difference::ArrayLengthMismatch {
                    path: path.to_string(),
                    expected_len: expected_arr.len(),
                    actual_len: actual_arr.len(),
                });
            }

            // Compare overlapping elements even if lengths differ
            for (i, (actual_val, expected_val)) in
                actual_arr.iter().zip(expected_arr.iter()).enumerate()
            {
                let current_path = format!("{}[{}]", path, i);
                compare_json_recursive(
                    actual_val,
                    expected_val,
                    ignore_fields,
                    &current_path,
                    differences,
                );
            }
        }
        (actual_val, expected_val) => {
            if actual_val != expected_val {
                differences.push(Difference::ValueMismatch {
                    path: path.to_string(),
                    expected: expected_val.clone(),
                    actual: actual_val.clone(),
                });
            }
        }
    }
}

#[derive(Debug)]
pub enum ComparisonResult {
    Match,
    Mismatch { differences: Vec<Difference> },
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match)
    }

    pub fn differences(&self) -> &[Difference] {
        match self {
            ComparisonResult::Match => &[],
            ComparisonResult::Mismatch { differences } => differences,
        }
    }

    /// One colored line per difference, expected in green and actual in red
    pub fn format_diff(&self) -> String {
        let mut output = vec![format!("{}", "OUTPUT MISMATCH".bright_yellow().bold())];

        for diff in self.differences() {
            let line = match diff {
                Difference::ValueMismatch {
                    path,
                    expected,
                    actual,
                } => format!(
                    "{}: {} {}",
                    path.bright_white(),
                    format!("- {}", actual).red(),
                    format!("+ {}", expected).green()
                ),
                Difference::MissingField { path } => {
                    format!("{}: {}", path.bright_white(), "missing".green())
                }
                Difference::ExtraField { path } => {
                    format!("{}: {}", path.bright_white(), "unexpected".red())
                }
                Difference::ArrayLengthMismatch {
                    path,
                    expected_len,
                    actual_len,
                } => format!(
                    "{}: {} {}",
                    path.bright_white(),
                    format!("- {} items", actual_len).red(),
                    format!("+ {} items", expected_len).green()
                ),
            };
            output.push(line);
        }

        output.push(format!(
            "{} {}",
            "Total differences:".bright_cyan().bold(),
            self.differences().len().to_string().bright_white()
        ));
        output.join("\n")
    }
}
