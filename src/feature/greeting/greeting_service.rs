//! A service for greeting someone.

use tracing::instrument;

/// Returns a greeting based on someone's name.
#[instrument(ret)]
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!("Hello, World!", greet("World"));
    }

    #[test]
    fn echoes_the_name_verbatim() {
        assert_eq!("Hello,  !", greet(" "));
        assert_eq!("Hello, !", greet(""));
        assert_eq!("Hello, Världen!", greet("Världen"));
    }
}
