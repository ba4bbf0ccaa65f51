use crate::api::Argument;
use crate::constant::*;
use crate::parser::{Command, ParseError};

/// Behaviour to display the usage, the version, and parse failures of a command line.
///
/// Implement this to customize how the command line is presented.
pub trait Output {
    /// Display the usage (ex: upon `--help`).
    fn usage(&self, command: &Command);

    /// Display the version (ex: upon `--version`).
    fn version(&self, command: &Command);

    /// Display a parse failure, returning the exit status to terminate with.
    fn failure(&self, command: &Command, error: &ParseError) -> i32;
}

/// The default [`Output`], writing to standard out (and standard error for failures).
#[derive(Debug, Default)]
pub struct ConsoleOutput {}

impl Output for ConsoleOutput {
    fn usage(&self, command: &Command) {
        println!("{}", render_usage(command));
    }

    fn version(&self, command: &Command) {
        println!("{}", render_version(command));
    }

    fn failure(&self, command: &Command, error: &ParseError) -> i32 {
        eprintln!("{}", render_failure(command, error));
        FAILURE_STATUS
    }
}

fn render_synopsis(command: &Command) -> String {
    let mut parts = vec![command.program_name().to_string()];
    let xor = command.xor_handler();

    for group in xor.groups() {
        let members: Vec<String> = group
            .iter()
            .map(|member| command.short_id(member.as_ref()))
            .collect();
        parts.push(format!("{{{}}}", members.join("|")));
    }

    parts.extend(
        command
            .arguments()
            .filter(|argument| !xor.contains(*argument))
            .map(|argument| command.short_id(argument)),
    );
    parts.join(" ")
}

fn render_entry(command: &Command, argument: &dyn Argument) -> String {
    format!(
        "   {}\n     {}",
        command.long_id(argument),
        argument.description()
    )
}

pub(crate) fn render_usage(command: &Command) -> String {
    let xor = command.xor_handler();
    let mut entries: Vec<String> = xor
        .groups()
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|member| render_entry(command, member.as_ref()))
                .collect::<Vec<String>>()
                .join("\n         -- OR --\n")
        })
        .collect();
    entries.extend(
        command
            .arguments()
            .filter(|argument| !xor.contains(*argument))
            .map(|argument| render_entry(command, argument)),
    );

    format!(
        "\nUSAGE:\n\n   {}\n\nWhere:\n\n{}\n\n   {}\n",
        render_synopsis(command),
        entries.join("\n\n"),
        command.message()
    )
}

pub(crate) fn render_version(command: &Command) -> String {
    format!(
        "\n{}  version: {}\n",
        command.program_name(),
        command.version()
    )
}

pub(crate) fn render_failure(command: &Command, error: &ParseError) -> String {
    let heading = match error.argument() {
        Some(id) => format!("PARSE ERROR: Argument: {id}"),
        None => "PARSE ERROR:".to_string(),
    };
    let pointer = if command.has_help_and_version() {
        format!(
            "For complete USAGE and HELP type: \n   {} {}{}",
            command.program_name(),
            NAME_START,
            HELP_NAME
        )
    } else {
        format!("Brief USAGE: \n   {}", render_synopsis(command))
    };

    format!("{heading}\n             {error}\n\n{pointer}\n")
}

#[cfg(any(test, feature = "unit_test"))]
#[allow(missing_docs)]
pub mod util {
    use crate::constant::FAILURE_STATUS;
    use crate::parser::interface::{render_failure, render_usage, render_version};
    use crate::parser::{Command, Output, ParseError};
    use std::sync::mpsc;

    /// Create an [`Output`] whose renderings may be inspected via the paired receiver.
    pub fn channel_output() -> (SenderOutput, ReceiverOutput) {
        let (usage_tx, usage_rx) = mpsc::channel();
        let (version_tx, version_rx) = mpsc::channel();
        let (failure_tx, failure_rx) = mpsc::channel();
        let sender = SenderOutput {
            usage_tx,
            version_tx,
            failure_tx,
        };
        let receiver = ReceiverOutput {
            usage_rx,
            version_rx,
            failure_rx,
        };
        (sender, receiver)
    }

    pub struct SenderOutput {
        usage_tx: mpsc::Sender<Option<String>>,
        version_tx: mpsc::Sender<Option<String>>,
        failure_tx: mpsc::Sender<Option<String>>,
    }

    impl Drop for SenderOutput {
        fn drop(&mut self) {
            // The receiver may have been dropped first.
            let _ = self.usage_tx.send(None);
            let _ = self.version_tx.send(None);
            let _ = self.failure_tx.send(None);
        }
    }

    impl Output for SenderOutput {
        fn usage(&self, command: &Command) {
            self.usage_tx.send(Some(render_usage(command))).unwrap();
        }

        fn version(&self, command: &Command) {
            self.version_tx.send(Some(render_version(command))).unwrap();
        }

        fn failure(&self, command: &Command, error: &ParseError) -> i32 {
            self.failure_tx
                .send(Some(render_failure(command, error)))
                .unwrap();
            FAILURE_STATUS
        }
    }

    pub struct ReceiverOutput {
        usage_rx: mpsc::Receiver<Option<String>>,
        version_rx: mpsc::Receiver<Option<String>>,
        failure_rx: mpsc::Receiver<Option<String>>,
    }

    impl ReceiverOutput {
        /// Collect the (usage, version, failure) renderings.
        /// Blocks until the paired sender has been dropped.
        pub fn consume(self) -> (Option<String>, Option<String>, Option<String>) {
            let ReceiverOutput {
                usage_rx,
                version_rx,
                failure_rx,
            } = self;

            (drain(usage_rx), drain(version_rx), drain(failure_rx))
        }

        pub fn consume_usage(self) -> String {
            let (usage, version, failure) = self.consume();
            assert_eq!(version, None);
            assert_eq!(failure, None);
            usage.unwrap()
        }

        pub fn consume_version(self) -> String {
            let (usage, version, failure) = self.consume();
            assert_eq!(usage, None);
            assert_eq!(failure, None);
            version.unwrap()
        }

        pub fn consume_failure(self) -> String {
            let (usage, version, failure) = self.consume();
            assert_eq!(usage, None);
            assert_eq!(version, None);
            failure.unwrap()
        }
    }

    fn drain(receiver: mpsc::Receiver<Option<String>>) -> Option<String> {
        let mut values = Vec::default();

        while let Some(message) = receiver.recv().unwrap() {
            values.push(message);
        }

        if values.is_empty() {
            None
        } else {
            Some(values.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::util::channel_output;
    use super::*;
    use crate::api::{AsArgument, Parameter, PositionalArg, SwitchArg, ValueArg};
    use crate::test::assert_contains;

    fn command(help_and_version: bool) -> Command {
        let mut command = Command::new(
            "Sums things.".to_string(),
            "1.2.3".to_string(),
            ' ',
            help_and_version,
        );
        let num = ValueArg::new(
            Parameter::labeled("n", "num").help("How many.").required(),
            0u32,
            "integer",
        )
        .unwrap();
        let item = PositionalArg::new(Parameter::positional("item").help("The item."), 0u32, "u32")
            .unwrap();
        let a = SwitchArg::new(Parameter::labeled("a", "all").help("Everything."), false).unwrap();
        let b = SwitchArg::new(Parameter::labeled("b", "bare").help("Nothing."), false).unwrap();
        command.add(num.as_argument()).unwrap();
        command.add(item.as_argument()).unwrap();
        command
            .xor_add(vec![a.as_argument(), b.as_argument()])
            .unwrap();
        command
            .consume(
                ["summer", "-n", "1", "-a"].map(String::from).to_vec(),
                false,
            )
            .unwrap();
        command
    }

    #[test]
    fn usage() {
        let usage = render_usage(&command(true));
        assert_contains!(usage, "USAGE:");
        assert_contains!(usage, "summer {-a|-b} -n <integer> <u32>");
        assert_contains!(usage, "-n <integer>,  --num <integer>\n     How many.");
        assert_contains!(usage, "-a,  --all\n     Everything.\n         -- OR --\n   -b,  --bare");
        assert_contains!(usage, "<u32>\n     The item.");
        assert_contains!(usage, "Sums things.");
    }

    #[test]
    fn version() {
        assert_eq!(render_version(&command(true)), "\nsummer  version: 1.2.3\n");
    }

    #[test]
    fn failure() {
        let error = ParseError::MissingValue {
            argument: "-n (--num)".to_string(),
        };
        let message = render_failure(&command(true), &error);
        assert_contains!(message, "PARSE ERROR: Argument: -n (--num)");
        assert_contains!(message, "Missing a value for this argument!");
        assert_contains!(message, "For complete USAGE and HELP type: \n   summer --help");
    }

    #[test]
    fn failure_brief() {
        let message = render_failure(&command(false), &ParseError::TooManyArguments);
        assert_contains!(message, "PARSE ERROR:\n");
        assert_contains!(message, "Too many arguments!");
        assert_contains!(message, "Brief USAGE: \n   summer");
    }

    #[test]
    fn channel() {
        let command = command(true);
        let (sender, receiver) = channel_output();
        sender.usage(&command);
        sender.usage(&command);
        drop(sender);

        let (usage, version, failure) = receiver.consume();
        let usage = usage.unwrap();
        assert_eq!(usage.matches("USAGE:").count(), 2);
        assert_eq!(version, None);
        assert_eq!(failure, None);
    }

    #[test]
    fn channel_failure() {
        let command = command(true);
        let (sender, receiver) = channel_output();
        assert_eq!(
            sender.failure(&command, &ParseError::TooManyArguments),
            FAILURE_STATUS
        );
        drop(sender);

        let failure = receiver.consume_failure();
        assert_contains!(failure, "Too many arguments!");
        assert_contains!(failure, "For complete USAGE and HELP type:");
    }
}
