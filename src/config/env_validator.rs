//! Environment variable validation with helpful error messages
//!
//! Invalid values produce a warning with a typo suggestion and fall back
//! to a default instead of failing.

use std::io::Write;

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `default` if invalid (warning on stderr)
    pub fn parse<T, F>(&self, value: &str, parser: F, default: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, default, &mut std::io::stderr())
    }

    /// Parse `value`, or write the warning to `writer` and fall back to `default`
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        parser(value).unwrap_or_else(|| {
            let _ = writeln!(writer, "{}", self.warning(value));
            default
        })
    }

    /// The rejected value with any suggestion, then the accepted values
    fn warning(&self, value: &str) -> String {
        format!(
            "Warning: Invalid {} value '{}'{}\nValid values: {}",
            self.var_name,
            value,
            self.suggest(value),
            self.valid_values.join(", ")
        )
    }

    fn suggest(&self, value: &str) -> String {
        let input = value.to_lowercase();
        closest_match(&input, self.valid_values, MAX_SUGGESTION_DISTANCE)
            .filter(|suggested| *suggested != input)
            .map(|suggested| format!(". Did you mean '{}'?", suggested))
            .unwrap_or_default()
    }
}

/// Largest edit distance still offered as a "did you mean" suggestion
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

/// The candidate nearest to `input`, if any lies within `max_distance` edits
///
/// Ties go to the earliest candidate.
pub fn closest_match<'a>(
    input: &str,
    candidates: &[&'a str],
    max_distance: usize,
) -> Option<&'a str> {
    candidates
        .iter()
        .map(|candidate| (*candidate, levenshtein(input, candidate)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= max_distance)
        .map(|(candidate, _)| candidate)
}

/// Edit distance between two byte strings (insert, delete, substitute)
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());

    // One row of the DP table; `row[j]` is the distance from the current
    // prefix of `a` to `b[..j]`.
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
