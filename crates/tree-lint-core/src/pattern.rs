//! Pattern compilation for comment- and name-matching checks.

use crate::check::CheckError;
use regex::Regex;

/// Compiles a user-supplied expression into a whole-string matcher.
///
/// The expression is wrapped as `\A(?s:expr)\z`: it must match the entire
/// input (not a substring), with `.` matching newlines so multi-line
/// comments are matchable as a single unit. Compiling the same expression
/// twice yields matchers with identical behavior.
///
/// An empty expression returns `Ok(None)`: the check is inert rather than
/// an error, so unconfigured template checks report nothing.
///
/// # Errors
///
/// Returns a [`CheckError::Configuration`] naming the check and the
/// offending expression when it does not compile.
pub fn compile_full_match(rule: &str, expression: &str) -> Result<Option<Regex>, CheckError> {
    if expression.is_empty() {
        return Ok(None);
    }
    Regex::new(&format!(r"\A(?s:{expression})\z"))
        .map(Some)
        .map_err(|e| CheckError::configuration(rule, expression, e.to_string()))
}
