use std::time::Duration;

/// Arguments of a `go` command. Unknown tokens are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u32>,
    pub movetime: Option<Duration>,
    pub wtime: Option<Duration>,
    pub btime: Option<Duration>,
    pub winc: Option<Duration>,
    pub binc: Option<Duration>,
}

impl GoParams {
    fn parse(args: &[&str]) -> Self {
        let mut params = GoParams::default();
        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1).and_then(|v| v.parse::<u64>().ok());
            let millis = value.map(Duration::from_millis);
            let consumed = match args[i] {
                "depth" => {
                    params.depth = value.map(|d| d.min(u64::from(u32::MAX)) as u32);
                    true
                }
                "movetime" => {
                    params.movetime = millis;
                    true
                }
                "wtime" => {
                    params.wtime = millis;
                    true
                }
                "btime" => {
                    params.btime = millis;
                    true
                }
                "winc" => {
                    params.winc = millis;
                    true
                }
                "binc" => {
                    params.binc = millis;
                    true
                }
                _ => false,
            };
            i += if consumed && value.is_some() { 2 } else { 1 };
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    /// Raw tokens after `position`
    Position(Vec<String>),
    Go(GoParams),
    Perft(u32),
    SetOption { name: String, value: Option<String> },
    /// `d`: print the board
    Display,
    Stop,
    Quit,
    Unknown(String),
}

/// Split `setoption name <name...> [value <value...>]`.
fn parse_setoption(args: &[&str]) -> UciCommand {
    let mut name = Vec::new();
    let mut value: Option<Vec<&str>> = None;
    let mut in_name = false;
    for &tok in args {
        match tok {
            "name" if value.is_none() => in_name = true,
            "value" if in_name => {
                in_name = false;
                value = Some(Vec::new());
            }
            _ => {
                if let Some(v) = value.as_mut() {
                    v.push(tok);
                } else if in_name {
                    name.push(tok);
                }
            }
        }
    }
    UciCommand::SetOption {
        name: name.join(" "),
        value: value.map(|v| v.join(" ")),
    }
}

pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let (&head, args) = parts.split_first()?;

    let cmd = match head {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(args.iter().map(|p| (*p).to_string()).collect()),
        "go" => UciCommand::Go(GoParams::parse(args)),
        "perft" => {
            let depth = args.first().and_then(|v| v.parse::<u32>().ok()).unwrap_or(1);
            UciCommand::Perft(depth)
        }
        "setoption" => parse_setoption(args),
        "d" => UciCommand::Display,
        "stop" => UciCommand::Stop,
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
