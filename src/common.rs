use itertools::Itertools;

/// Collapses each whitespace run to a single space, dropping leading and
/// trailing whitespace. Used for the source echo in listing output.
pub fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_spaces_squeezes_runs() {
        assert_eq!(collapse_spaces(".c.ret ;"), ".c.ret ;");
        assert_eq!(collapse_spaces("  .c.fs\n\t foo ; "), ".c.fs foo ;");
        assert_eq!(collapse_spaces(""), "");
    }
}
