//! Tokenizing and argument classification
//!
//! Turns raw input (a free-text line or an argv-style token list) into a
//! populated [`CommandContext`]. Token 0 is the command name; the rest is
//! classified into long options, short options/flag clusters, and positional
//! arguments.

use tracing::debug;

use crate::domain::entities::CommandContext;

/// Split a raw line into shell-like tokens, honoring double-quoted substrings.
///
/// The line is split on whitespace first. If the most recently emitted token
/// begins with `"` but does not end with `"`, the next chunk is appended to it
/// with a single space instead of starting a new token, until a token ends
/// with `"`. Afterwards one layer of surrounding double quotes is stripped
/// from every token that both starts and ends with `"`.
///
/// An unterminated quote at the end of input is left as-is, quote character
/// included. Empty input yields no tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for chunk in input.split_whitespace() {
        match tokens.last_mut() {
            // Continue a quoted segment that naive splitting broke apart
            Some(last) if last.starts_with('"') && !last.ends_with('"') => {
                last.push(' ');
                last.push_str(chunk);
            }
            _ => tokens.push(chunk.to_string()),
        }
    }

    for token in &mut tokens {
        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            *token = token[1..token.len() - 1].to_string();
        }
    }

    tokens
}

impl CommandContext {
    /// Parse one line of free text: [`tokenize`], then classify.
    pub fn from_line(input: &str) -> Self {
        let tokens = tokenize(input);
        Self::from_argv(&tokens)
    }

    /// Classify an argv-style token list where index 0 is the command name.
    ///
    /// Scanning left to right from token 1, the first matching rule wins:
    ///
    /// 1. `--` alone: every remaining token is positional, scanning stops.
    /// 2. `--<text>` (more than two characters): long option. `--key=value`
    ///    records the pair (an empty value is recorded too); `--key value`
    ///    consumes the next token as the value when it exists and does not
    ///    start with `-`, otherwise `key` becomes a flag.
    /// 3. `-<text>` (more than one character): short option. A single
    ///    character takes the next token as its value under the same rule,
    ///    otherwise becomes a flag. Multiple characters form a cluster where
    ///    every character becomes an independent flag, never a value.
    /// 4. Anything else is a positional argument, order preserved.
    ///
    /// A positional argument that itself begins with `-` (a negative number,
    /// say) is classified as an option or flag. That is a compatibility
    /// guarantee, not an oversight; `--` is the escape hatch.
    pub fn from_argv<S: AsRef<str>>(argv: &[S]) -> Self {
        let mut context = Self::default();
        let Some(first) = argv.first() else {
            return context;
        };
        context.command_name = first.as_ref().to_string();

        let mut index = 1;
        while index < argv.len() {
            let token = argv[index].as_ref();

            if token == "--" {
                for rest in &argv[index + 1..] {
                    context.args.push(rest.as_ref().to_string());
                }
                break;
            } else if token.len() > 2 && token.starts_with("--") {
                index = classify_long(&mut context, &token[2..], argv, index);
            } else if token.len() > 1 && token.starts_with('-') {
                index = classify_short(&mut context, &token[1..], argv, index);
            } else {
                context.args.push(token.to_string());
            }

            index += 1;
        }

        debug!(
            command = %context.command_name,
            options = context.options.len(),
            flags = context.flags.len(),
            args = context.args.len(),
            "classified argv"
        );
        context
    }
}

/// Handle `--key=value`, `--key value`, and `--flag`. Returns the index of
/// the last token consumed.
fn classify_long<S: AsRef<str>>(
    context: &mut CommandContext,
    body: &str,
    argv: &[S],
    index: usize,
) -> usize {
    if let Some((key, value)) = body.split_once('=') {
        context.options.insert(key.to_string(), value.to_string());
        return index;
    }

    match next_value(argv, index) {
        Some(value) => {
            context.options.insert(body.to_string(), value.to_string());
            index + 1
        }
        None => {
            context.flags.insert(body.to_string());
            index
        }
    }
}

/// Handle `-k value`, `-k`, and clusters like `-xyz`. Returns the index of
/// the last token consumed.
fn classify_short<S: AsRef<str>>(
    context: &mut CommandContext,
    body: &str,
    argv: &[S],
    index: usize,
) -> usize {
    let mut chars = body.chars();
    let first = chars.next();
    let single = first.is_some() && chars.next().is_none();

    if single {
        match next_value(argv, index) {
            Some(value) => {
                context.options.insert(body.to_string(), value.to_string());
                return index + 1;
            }
            None => {
                context.flags.insert(body.to_string());
                return index;
            }
        }
    }

    // Cluster: each character is an independent flag, values never attach
    for c in body.chars() {
        context.flags.insert(c.to_string());
    }
    index
}

/// The token after `index`, if it exists and does not look like an option.
fn next_value<S: AsRef<str>>(argv: &[S], index: usize) -> Option<&str> {
    argv.get(index + 1)
        .map(AsRef::as_ref)
        .filter(|next| !next.starts_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_keeps_unterminated_quote() {
        let tokens = tokenize("copy \"my file.txt");
        assert_eq!(tokens, vec!["copy", "\"my file.txt"]);
    }

    #[test]
    fn tokenize_merges_quoted_segment() {
        let tokens = tokenize("copy \"my file.txt\" dest");
        assert_eq!(tokens, vec!["copy", "my file.txt", "dest"]);
    }

    #[test]
    fn lone_quote_survives() {
        assert_eq!(tokenize("\""), vec!["\""]);
    }

    #[test]
    fn empty_option_value_is_recorded() {
        let context = CommandContext::from_argv(&["cmd", "--key="]);
        assert_eq!(context.option("key"), Some(""));
    }
}
