//! Command line tokenizing.

use alloc::vec::Vec;

use crate::config::{MAX_ARGS, MAX_LINE_LEN};

/// Cut `line` to at most [`MAX_LINE_LEN`] bytes on a character boundary.
pub fn clamp_line(line: &str) -> &str {
    if line.len() <= MAX_LINE_LEN {
        return line;
    }
    let mut end = MAX_LINE_LEN;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

/// Split on whitespace, keeping at most [`MAX_ARGS`] tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    clamp_line(line).split_whitespace().take(MAX_ARGS).collect()
}

/// Where `echo` output goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect<'a> {
    /// The console
    None,
    /// `> file`
    Truncate(&'a str),
    /// `>> file`
    Append(&'a str),
}

/// Split echo arguments into the words to print and the redirection.
///
/// Only the first `>` or `>>` counts; a redirection with no file name is
/// treated as no redirection at all.
pub fn split_redirect<'a>(args: &[&'a str]) -> (usize, Redirect<'a>) {
    for (i, arg) in args.iter().enumerate() {
        let target = args.get(i + 1).copied();
        match (*arg, target) {
            (">", Some(file)) => return (i, Redirect::Truncate(file)),
            (">>", Some(file)) => return (i, Redirect::Append(file)),
            (">", None) | (">>", None) => return (i, Redirect::None),
            _ => {}
        }
    }
    (args.len(), Redirect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  ls   -l\t/home \n"), ["ls", "-l", "/home"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_caps_arguments() {
        let line = "x ".repeat(40);
        assert_eq!(tokenize(&line).len(), MAX_ARGS);
    }

    #[test]
    fn test_clamp_line_respects_char_boundary() {
        let mut line = "a".repeat(MAX_LINE_LEN - 1);
        line.push('é');
        assert_eq!(clamp_line(&line).len(), MAX_LINE_LEN - 1);

        let short = String::from("echo hi");
        assert_eq!(clamp_line(&short), "echo hi");
    }

    #[test]
    fn test_split_redirect() {
        assert_eq!(split_redirect(&["hi", "there"]), (2, Redirect::None));
        assert_eq!(
            split_redirect(&["hi", ">", "f.txt"]),
            (1, Redirect::Truncate("f.txt"))
        );
        assert_eq!(
            split_redirect(&["a", "b", ">>", "log"]),
            (2, Redirect::Append("log"))
        );
        assert_eq!(split_redirect(&["hi", ">"]), (1, Redirect::None));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tokens_are_bounded_and_trimmed(line in "[ a-z\\t]{0,600}") {
                let tokens = tokenize(&line);
                prop_assert!(tokens.len() <= MAX_ARGS);
                for token in tokens {
                    prop_assert!(!token.is_empty());
                    prop_assert!(!token.contains(char::is_whitespace));
                }
            }
        }
    }
}
