//! Command line parser
//!
//! Splits `module -command arg0, arg1, ..., argN` in one pass. There is no
//! quoting: every comma in the argument text separates two arguments.

/// One parsed line, borrowing from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// Text before the first space, or the whole line
    pub module_name: &'a str,
    /// Text after the first `-` up to the next space; empty without a `-`
    pub command_name: &'a str,
    /// Everything after the command token, trimmed
    pub args_str: &'a str,
    /// 0 for blank argument text, else one more than the number of commas
    pub args_count: usize,
}

impl<'a> ParsedCommand<'a> {
    /// Parse a line. Surrounding whitespace (such as a trailing CR/LF) is ignored.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();

        let module_name = line.split_once(' ').map_or(line, |(module, _)| module);

        let (command_name, args_str) = match line.split_once('-') {
            None => ("", ""),
            Some((_, rest)) => match rest.split_once(' ') {
                Some((command, args)) => (command, args.trim()),
                None => (rest, ""),
            },
        };

        let args_count = if args_str.is_empty() {
            0
        } else {
            1 + args_str.matches(',').count()
        };

        Self { module_name, command_name, args_str, args_count }
    }

    /// Argument tokens, each trimmed; yields exactly `args_count` items
    pub fn args(&self) -> impl Iterator<Item = &'a str> + 'a {
        let text = self.args_str;
        let count = self.args_count;
        text.split(',').map(str::trim).take(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let cmd = ParsedCommand::parse("gpio -set 3, 1");
        assert_eq!(cmd.module_name, "gpio");
        assert_eq!(cmd.command_name, "set");
        assert_eq!(cmd.args_str, "3, 1");
        assert_eq!(cmd.args_count, 2);
        assert_eq!(cmd.args().collect::<Vec<_>>(), vec!["3", "1"]);
    }

    #[test]
    fn test_no_arguments() {
        let cmd = ParsedCommand::parse("sys -uptime");
        assert_eq!(cmd.command_name, "uptime");
        assert_eq!(cmd.args_count, 0);
        assert_eq!(cmd.args().count(), 0);

        let cmd = ParsedCommand::parse("sys -uptime   \r\n");
        assert_eq!(cmd.command_name, "uptime");
        assert_eq!(cmd.args_count, 0);
    }

    #[test]
    fn test_module_only() {
        let cmd = ParsedCommand::parse("gpio");
        assert_eq!(cmd.module_name, "gpio");
        assert_eq!(cmd.command_name, "");
        assert_eq!(cmd.args_count, 0);
    }

    #[test]
    fn test_missing_dash_gives_empty_command() {
        let cmd = ParsedCommand::parse("gpio set 3");
        assert_eq!(cmd.module_name, "gpio");
        assert_eq!(cmd.command_name, "");
        assert_eq!(cmd.args_count, 0);
    }

    #[test]
    fn test_tokens_are_trimmed_and_empty_tokens_kept() {
        let cmd = ParsedCommand::parse("net -send  a ,  b c ,, d ");
        assert_eq!(cmd.args_count, 4);
        assert_eq!(cmd.args().collect::<Vec<_>>(), vec!["a", "b c", "", "d"]);
    }

    #[test]
    fn test_negative_numbers_after_command() {
        let cmd = ParsedCommand::parse("motor -move -5, 10");
        assert_eq!(cmd.command_name, "move");
        assert_eq!(cmd.args().collect::<Vec<_>>(), vec!["-5", "10"]);
    }

    #[test]
    fn test_commas_cannot_be_escaped() {
        let cmd = ParsedCommand::parse("sys -echo \"a,b\"");
        assert_eq!(cmd.args_count, 2);
        assert_eq!(cmd.args().collect::<Vec<_>>(), vec!["\"a", "b\""]);
    }
}
