pub(crate) const FLAG_START: &str = "-";
pub(crate) const FLAG_START_CHAR: char = '-';
pub(crate) const NAME_START: &str = "--";
pub(crate) const DEFAULT_DELIMITER: char = ' ';
pub(crate) const DEFAULT_VERSION: &str = "none";

pub(crate) const HELP_SHORT: &str = "h";
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_DESCRIPTION: &str = "Displays usage information and exits.";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_DESCRIPTION: &str = "Displays version information and exits.";
pub(crate) const IGNORE_NAME: &str = "ignore_rest";
pub(crate) const IGNORE_DESCRIPTION: &str =
    "Ignores the rest of the labeled arguments following this flag.";

pub(crate) const FAILURE_STATUS: i32 = 1;
