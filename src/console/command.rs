use thiserror::Error;

const SET_DIAMONDS_USAGE: &str = "setdiamonds [NUMBER]";
const SET_EMERALDS_USAGE: &str = "setemeralds [NUMBER]";
const SET_CLICKS_PER_EMERALD_USAGE: &str = "setcpemerald [NUMBER > 0]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    SetDiamonds(u64),
    SetEmeralds(u64),
    SetClicksPerEmerald(u32),
    ResetGame,
    Export,
    Help,
    Clear,
}

/// Input the console could not turn into a command. `Display` is the line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("empty command")]
    Empty,
    #[error("Invalid amount. Usage: {usage}")]
    InvalidAmount { usage: &'static str },
    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl ConsoleCommand {
    /// Parses one line of space-separated tokens. The verb is case-insensitive.
    pub fn parse(line: &str) -> Result<Self, ConsoleError> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(ConsoleError::Empty)?.to_ascii_lowercase();
        let argument = tokens.next();

        match verb.as_str() {
            "setdiamonds" => parse_amount(argument, SET_DIAMONDS_USAGE).map(Self::SetDiamonds),
            "setemeralds" | "setemerald" | "setemerlds" => {
                parse_amount(argument, SET_EMERALDS_USAGE).map(Self::SetEmeralds)
            }
            "setcpemerald" => argument
                .and_then(|raw| raw.parse::<u32>().ok())
                .filter(|clicks| *clicks > 0)
                .map(Self::SetClicksPerEmerald)
                .ok_or(ConsoleError::InvalidAmount {
                    usage: SET_CLICKS_PER_EMERALD_USAGE,
                }),
            "resetgame" => Ok(Self::ResetGame),
            "export" => Ok(Self::Export),
            "help" => Ok(Self::Help),
            "clear" => Ok(Self::Clear),
            _ => Err(ConsoleError::Unknown(verb)),
        }
    }
}

fn parse_amount(argument: Option<&str>, usage: &'static str) -> Result<u64, ConsoleError> {
    argument
        .and_then(|raw| raw.parse::<u64>().ok())
        .ok_or(ConsoleError::InvalidAmount { usage })
}
